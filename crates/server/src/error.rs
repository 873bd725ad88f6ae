//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side failures to
//! Sentry before responding to the client. All route handlers should return
//! `Result<T, AppError>`.
//!
//! Rejection semantics follow the access-control contract: an anonymous or
//! department-less identity is redirected home and the handler never touches
//! storage, while storage and session failures surface as opaque 500s.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::auth::AuthError;
use crate::services::email::EmailError;

/// Application-level error type for the board server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Outgoing email failed.
    #[error("Email error: {0}")]
    Email(#[from] EmailError),

    /// Session store could not be read or written.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Anonymous identity attempted a gated operation.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Department identifier or access level outside the fixed table.
    #[error("Invalid department: {0}")]
    InvalidDepartment(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether this error is a server-side fault rather than a client
    /// rejection. Server faults are captured to Sentry and logged before the
    /// opaque response goes out; that includes infrastructure failures
    /// surfacing through the auth layer, which also render as 500s.
    fn is_server_fault(&self) -> bool {
        matches!(
            self,
            Self::Database(_)
                | Self::Email(_)
                | Self::Session(_)
                | Self::Internal(_)
                | Self::Auth(AuthError::Repository(_) | AuthError::PasswordHash)
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if self.is_server_fault() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        match &self {
            // Rejected mutations bounce to the home page; the handler has
            // already returned, so no privileged logic runs after this.
            Self::Unauthorized(_) | Self::InvalidDepartment(_) => {
                Redirect::to("/").into_response()
            }
            Self::Database(RepositoryError::NotFound) | Self::NotFound(_) => {
                (StatusCode::NOT_FOUND, "Not found".to_string()).into_response()
            }
            Self::Auth(err) => {
                let status = match err {
                    AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, "Authentication error".to_string()).into_response()
            }
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()).into_response(),
            // Don't expose internal error details to clients
            Self::Database(_) | Self::Email(_) | Self::Session(_) | Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
                .into_response(),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use axum::http::header::LOCATION;

    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("post 123".to_string());
        assert_eq!(err.to_string(), "Not found: post 123");

        let err = AppError::InvalidDepartment("kafbogus".to_string());
        assert_eq!(err.to_string(), "Invalid department: kafbogus");
    }

    #[test]
    fn test_rejections_redirect_home() {
        for err in [
            AppError::Unauthorized("anonymous".to_string()),
            AppError::InvalidDepartment("kafbogus".to_string()),
        ] {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::SEE_OTHER);
            assert_eq!(
                response.headers().get(LOCATION).and_then(|v| v.to_str().ok()),
                Some("/")
            );
        }
    }

    #[test]
    fn test_not_found_status() {
        let response = AppError::NotFound("post".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = AppError::Database(RepositoryError::NotFound).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_storage_errors_are_opaque_internal_errors() {
        let response =
            AppError::Database(RepositoryError::DataCorruption("bad email".to_string()))
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_bad_request_status() {
        let response = AppError::BadRequest("missing id".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_auth_infrastructure_failures_are_server_faults() {
        assert!(AppError::Auth(AuthError::Repository(RepositoryError::NotFound)).is_server_fault());
        assert!(AppError::Auth(AuthError::PasswordHash).is_server_fault());
    }

    #[test]
    fn test_client_rejections_are_not_server_faults() {
        assert!(!AppError::Auth(AuthError::InvalidCredentials).is_server_fault());
        assert!(!AppError::Unauthorized("anonymous".to_string()).is_server_fault());
        assert!(!AppError::InvalidDepartment("kafbogus".to_string()).is_server_fault());
        assert!(!AppError::BadRequest("missing id".to_string()).is_server_fault());
        assert!(!AppError::NotFound("post".to_string()).is_server_fault());
    }

    #[test]
    fn test_auth_repository_failure_is_an_opaque_internal_error() {
        let err = AppError::Auth(AuthError::Repository(RepositoryError::DataCorruption(
            "bad email".to_string(),
        )));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
