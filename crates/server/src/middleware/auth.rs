//! Authentication extractors.
//!
//! The session-backed identity resolver. Handlers that need an identity
//! receive it as an explicit argument through these extractors; there is no
//! implicit request-context lookup, so a gated handler can never observe an
//! absent identity.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::{CurrentUser, session_keys};

/// Extractor that requires a logged-in user.
///
/// If the request carries no identity, the handler never runs: the rejection
/// redirects to the home page before any handler logic.
///
/// # Example
///
/// ```rust,ignore
/// async fn gated_handler(
///     RequireAuth(user): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", user.email)
/// }
/// ```
pub struct RequireAuth(pub CurrentUser);

/// Extractor that optionally resolves the current user.
///
/// Unlike `RequireAuth`, an anonymous request is not rejected; the handler
/// receives `None`. A failure to read the session store itself is still an
/// error, distinct from the normal not-logged-in state.
pub struct OptionalAuth(pub Option<CurrentUser>);

/// Rejection for the authentication extractors.
pub enum AuthRejection {
    /// Anonymous request on a gated route: bounce to the home page.
    RedirectHome,
    /// The session store could not be read (corrupted cookie, backend down).
    SessionFailure,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectHome => Redirect::to("/").into_response(),
            Self::SessionFailure => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

/// Read the current user out of the session, distinguishing "no session" from
/// a session-store failure.
async fn resolve_user(parts: &mut Parts) -> Result<Option<CurrentUser>, AuthRejection> {
    // Session is inserted into extensions by SessionManagerLayer. Its absence
    // means the layer is not installed at all, which is a deployment fault,
    // not an anonymous visitor.
    let Some(session) = parts.extensions.get::<Session>() else {
        tracing::error!("session layer missing from request extensions");
        return Err(AuthRejection::SessionFailure);
    };

    session
        .get::<CurrentUser>(session_keys::CURRENT_USER)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "session store read failed");
            AuthRejection::SessionFailure
        })
}

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = resolve_user(parts)
            .await?
            .ok_or(AuthRejection::RedirectHome)?;

        Ok(Self(user))
    }
}

impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(resolve_user(parts).await?))
    }
}

/// Store the logged-in user in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_user(
    session: &Session,
    user: &CurrentUser,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_USER, user).await
}

/// Destroy the session (logout).
///
/// Removes the record from the store and expires the cookie.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_user(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.flush().await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::Request;

    use super::*;

    #[tokio::test]
    async fn test_missing_session_layer_is_a_failure_not_anonymous() {
        let (mut parts, ()) = Request::builder().uri("/").body(()).unwrap().into_parts();

        let result = resolve_user(&mut parts).await;
        assert!(matches!(result, Err(AuthRejection::SessionFailure)));
    }
}
