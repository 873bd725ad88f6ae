//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use campus_board_core::Department;

use crate::middleware::OptionalAuth;
use crate::models::CurrentUser;

/// A department entry on the home page.
pub struct DepartmentView {
    pub slug: &'static str,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// The logged-in user, if any.
    pub user: Option<CurrentUser>,
    /// Every department board, in access-level order.
    pub departments: Vec<DepartmentView>,
}

/// Display the home page with links to each department board.
pub async fn home(OptionalAuth(user): OptionalAuth) -> impl IntoResponse {
    let departments = Department::ALL
        .iter()
        .map(|d| DepartmentView { slug: d.slug() })
        .collect();

    HomeTemplate { user, departments }
}
