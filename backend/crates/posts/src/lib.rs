//! Posts Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Post entity, value objects, repository trait
//! - `application/` - Use cases (CRUD, listing, pagination)
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Public paginated home feed, newest first
//! - Per-author listing under the author's username
//! - Create / read / update / delete with ownership enforcement
//!
//! ## Ownership Model
//! - Every post belongs to exactly one author, fixed at creation
//! - Update and delete require the caller to be the owner (403 otherwise)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::PostsConfig;
pub use error::{PostError, PostResult};
pub use infra::postgres::PgPostRepository;
pub use presentation::router::posts_router;

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}
