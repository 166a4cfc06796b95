//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// No account registered under the given email
    #[error("There is no account with this e-mail")]
    EmailNotFound,

    /// Password does not match the stored hash
    #[error("Wrong password")]
    WrongPassword,

    /// Username already exists
    #[error("Username already taken")]
    UsernameTaken,

    /// Email already exists
    #[error("E-mail already taken")]
    EmailTaken,

    /// User record disappeared under us (stale session, deleted row)
    #[error("User not found")]
    UserNotFound,

    /// Session token absent, malformed, forged or expired
    #[error("Session not found or expired")]
    SessionInvalid,

    /// Request requires an authenticated identity
    #[error("Sign in required")]
    Unauthorized,

    /// Field-level validation failure
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::EmailNotFound | AuthError::WrongPassword => StatusCode::UNAUTHORIZED,
            AuthError::UsernameTaken | AuthError::EmailTaken => StatusCode::CONFLICT,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::SessionInvalid | AuthError::Unauthorized => StatusCode::UNAUTHORIZED,
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::EmailNotFound
            | AuthError::WrongPassword
            | AuthError::SessionInvalid
            | AuthError::Unauthorized => ErrorKind::Unauthorized,
            AuthError::UsernameTaken | AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::EmailNotFound | AuthError::WrongPassword => {
                tracing::warn!("Failed login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest | ErrorKind::UnprocessableEntity => {
                AuthError::Validation(err.message().to_string())
            }
            _ => AuthError::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::EmailNotFound.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::WrongPassword.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::UsernameTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(AuthError::EmailTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(AuthError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AuthError::Validation("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_duplicates_are_distinct_variants() {
        // Duplicate username and duplicate email must be individually
        // detectable by callers, not one merged conflict error.
        let username = AuthError::UsernameTaken;
        let email = AuthError::EmailTaken;
        assert_ne!(username.to_string(), email.to_string());
        assert!(matches!(username, AuthError::UsernameTaken));
        assert!(matches!(email, AuthError::EmailTaken));
    }

    #[test]
    fn test_app_error_kind_mapping() {
        assert_eq!(AuthError::UserNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(AuthError::SessionInvalid.kind(), ErrorKind::Unauthorized);
        assert_eq!(
            AuthError::Internal("x".into()).kind(),
            ErrorKind::InternalServerError
        );
    }
}
