//! Domain Layer
//!
//! Entities, value objects and the repository trait.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::post::{NewPost, Post, PostWithAuthor};
pub use repository::PostRepository;
pub use value_object::page::{Page, PageRequest};
pub use value_object::title::PostTitle;
