//! Post route handlers: department listings and the write/edit/delete flow.
//!
//! Every mutation resolves its target partition from the authenticated
//! user's access level via the fixed department table, and rejects before
//! any repository call when the level maps to no department. The department
//! path segment on listings is validated against the same table; a raw
//! request string never reaches storage.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use campus_board_core::{Department, PostId};

use crate::db::PostRepository;
use crate::error::{AppError, Result};
use crate::middleware::{OptionalAuth, RequireAuth};
use crate::models::{CurrentUser, NewPost, Post};
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Write-form submission. `id` is empty for a new post, set for an edit.
#[derive(Debug, Deserialize)]
pub struct SavePostForm {
    #[serde(default)]
    pub id: String,
    pub header: String,
    pub content: String,
}

/// Form carrying just a post id (edit and delete).
#[derive(Debug, Deserialize)]
pub struct PostIdForm {
    pub id: i32,
}

// =============================================================================
// Templates
// =============================================================================

/// Department listing template.
#[derive(Template, WebTemplate)]
#[template(path = "posts/index.html")]
pub struct IndexTemplate {
    pub user: Option<CurrentUser>,
    pub department: &'static str,
    pub posts: Vec<Post>,
    /// Whether the viewer may author posts on this board.
    pub can_write: bool,
}

/// Write/edit form template.
#[derive(Template, WebTemplate)]
#[template(path = "posts/write.html")]
pub struct WriteTemplate {
    pub user: Option<CurrentUser>,
    /// The post being edited, absent when composing a new one.
    pub post: Option<Post>,
}

// =============================================================================
// Helpers
// =============================================================================

/// Resolve the department the authenticated user may write to.
///
/// Rejects with `InvalidDepartment` when the access level is unmapped; the
/// caller returns immediately, so no repository call can follow.
fn writable_department(user: &CurrentUser) -> Result<Department> {
    user.department().ok_or_else(|| {
        AppError::InvalidDepartment(format!(
            "access level {} maps to no department",
            user.access
        ))
    })
}

fn board_url(department: Department) -> String {
    format!("/{}", department.slug())
}

// =============================================================================
// Listing Routes
// =============================================================================

/// Display every post on one department's board.
///
/// The path segment is validated against the fixed department table before
/// any storage access; unknown slugs bounce to the home page.
#[instrument(skip(state, user))]
pub async fn index(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    Path(department): Path<String>,
) -> Result<Response> {
    let Some(department) = Department::from_slug(&department) else {
        return Err(AppError::InvalidDepartment(department));
    };

    let posts = PostRepository::new(state.pool()).list(department).await?;

    let can_write = user
        .as_ref()
        .is_some_and(|u| u.department() == Some(department));

    Ok(IndexTemplate {
        user,
        department: department.slug(),
        posts,
        can_write,
    }
    .into_response())
}

// =============================================================================
// Write Flow
// =============================================================================

/// Display the compose form.
///
/// Requires a logged-in user whose access level maps to a department.
pub async fn write_page(RequireAuth(user): RequireAuth) -> Result<Response> {
    writable_department(&user)?;

    Ok(WriteTemplate {
        user: Some(user),
        post: None,
    }
    .into_response())
}

/// Save a post: create when the form carries no id, full-row update otherwise.
///
/// The target partition comes from the user's access level, never from the
/// form.
#[instrument(skip(state, user, form))]
pub async fn save(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Form(form): Form<SavePostForm>,
) -> Result<Redirect> {
    let department = writable_department(&user)?;
    let repo = PostRepository::new(state.pool());

    if form.id.is_empty() {
        let post = NewPost {
            header: form.header,
            author: user.id,
            content: form.content,
        };
        let id = repo.create(&post, department).await?;
        tracing::info!(%id, %department, "post added");
    } else {
        let id: i32 = form
            .id
            .parse()
            .map_err(|_| AppError::BadRequest(format!("invalid post id: {}", form.id)))?;
        let post = Post {
            id: PostId::new(id),
            header: form.header,
            author: user.id,
            content: form.content,
            // Ignored on update; the stored date is kept.
            date: String::new(),
        };
        repo.update(&post, department).await?;
        tracing::info!(%id, %department, "post changed");
    }

    Ok(Redirect::to(&board_url(department)))
}

/// Load an existing post into the compose form.
#[instrument(skip(state, user))]
pub async fn edit(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Form(form): Form<PostIdForm>,
) -> Result<Response> {
    let department = writable_department(&user)?;

    let post = PostRepository::new(state.pool())
        .find(PostId::new(form.id), department)
        .await?;

    Ok(WriteTemplate {
        user: Some(user),
        post: Some(post),
    }
    .into_response())
}

/// Delete a post from the user's department board.
///
/// Deleting an id that no longer exists is a no-op; the redirect is the same
/// either way.
#[instrument(skip(state, user))]
pub async fn delete(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Form(form): Form<PostIdForm>,
) -> Result<Redirect> {
    let department = writable_department(&user)?;

    PostRepository::new(state.pool())
        .delete(PostId::new(form.id), department)
        .await?;
    tracing::info!(id = form.id, %department, "post deleted");

    Ok(Redirect::to(&board_url(department)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use campus_board_core::{AccessLevel, Email, UserId};

    use super::*;

    fn user_with_access(level: i32) -> CurrentUser {
        CurrentUser {
            id: UserId::new(1),
            email: Email::parse("user@university.edu").unwrap(),
            access: AccessLevel::new(level),
        }
    }

    #[test]
    fn test_writable_department_follows_access() {
        let dept = writable_department(&user_with_access(15)).unwrap();
        assert_eq!(dept, Department::Prog);
    }

    #[test]
    fn test_unmapped_access_is_rejected_before_storage() {
        let err = writable_department(&user_with_access(99)).unwrap_err();
        assert!(matches!(err, AppError::InvalidDepartment(_)));
    }
}
