//! Posts Error Types
//!
//! Post-specific error variants integrating with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Posts-specific result type alias
pub type PostResult<T> = Result<T, PostError>;

/// Posts-specific error variants
#[derive(Debug, Error)]
pub enum PostError {
    /// Post id or username does not exist
    #[error("Not found")]
    NotFound,

    /// Caller is authenticated but does not own the post
    ///
    /// Terminal: answered with 403, never with a sign-in redirect.
    #[error("You can only modify your own posts")]
    Forbidden,

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

impl PostError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            PostError::NotFound => StatusCode::NOT_FOUND,
            PostError::Forbidden => StatusCode::FORBIDDEN,
            PostError::Unauthorized => StatusCode::UNAUTHORIZED,
            PostError::Validation(_) => StatusCode::BAD_REQUEST,
            PostError::Database(_) | PostError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PostError::NotFound => ErrorKind::NotFound,
            PostError::Forbidden => ErrorKind::Forbidden,
            PostError::Unauthorized => ErrorKind::Unauthorized,
            PostError::Validation(_) => ErrorKind::BadRequest,
            PostError::Database(_) | PostError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            PostError::Database(e) => {
                tracing::error!(error = %e, "Posts database error");
            }
            PostError::Internal(msg) => {
                tracing::error!(message = %msg, "Posts internal error");
            }
            PostError::Forbidden => {
                tracing::warn!("Rejected modification of another user's post");
            }
            _ => {
                tracing::debug!(error = %self, "Posts error");
            }
        }
    }
}

impl IntoResponse for PostError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<auth::AuthError> for PostError {
    fn from(err: auth::AuthError) -> Self {
        match err {
            auth::AuthError::Unauthorized | auth::AuthError::SessionInvalid => {
                PostError::Unauthorized
            }
            auth::AuthError::UserNotFound => PostError::NotFound,
            auth::AuthError::Database(e) => PostError::Database(e),
            other => PostError::Internal(other.to_string()),
        }
    }
}
