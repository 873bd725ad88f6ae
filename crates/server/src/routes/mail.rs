//! Notification email route handlers.
//!
//! Lets a logged-in user send a notice through the department SMTP relay.
//! Both routes are gated: the compose form and the send action require an
//! authenticated identity.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tracing::instrument;

use campus_board_core::Email;

use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::CurrentUser;
use crate::state::AppState;

/// Mail form data.
#[derive(Debug, Deserialize)]
pub struct SendMailForm {
    pub receiver: String,
    pub subject: String,
    pub content: String,
}

/// Query parameters for the compose page.
#[derive(Debug, Deserialize)]
pub struct ComposeQuery {
    pub sent: Option<String>,
}

/// Compose form template.
#[derive(Template, WebTemplate)]
#[template(path = "mail/compose.html")]
pub struct ComposeTemplate {
    pub user: Option<CurrentUser>,
    pub sent: bool,
}

/// Display the compose form.
pub async fn compose_page(
    RequireAuth(user): RequireAuth,
    Query(query): Query<ComposeQuery>,
) -> impl IntoResponse {
    ComposeTemplate {
        user: Some(user),
        sent: query.sent.is_some(),
    }
}

/// Send a notification email.
#[instrument(skip(state, _user, form))]
pub async fn send(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Form(form): Form<SendMailForm>,
) -> Result<Redirect> {
    let receiver = Email::parse(&form.receiver)
        .map_err(|e| AppError::BadRequest(format!("invalid receiver address: {e}")))?;

    state
        .email()
        .send_notice(receiver.as_str(), &form.subject, &form.content)
        .await?;

    Ok(Redirect::to("/mail?sent=1"))
}
