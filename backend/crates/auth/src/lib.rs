//! Auth (Authentication & Accounts) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - User signup with unique username + email
//! - Signin by email/password, signout, account update (incl. profile image)
//! - Server-side sessions with HMAC-signed cookie tokens
//! - "Remember me" long-lived sessions vs. ephemeral sessions
//! - Post-login redirect ("next") handling for gated pages
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, never stored or exposed in clear
//! - Session tokens verified before any database lookup
//! - Duplicate username/email enforced by database unique constraints

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
