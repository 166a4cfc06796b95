//! Domain Layer
//!
//! Entities, value objects and repository traits.
//! No infrastructure concerns here.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{identity::Identity, session::Session, user::User};
pub use repository::{SessionRepository, UserRepository};
