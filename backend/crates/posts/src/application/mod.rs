//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod create_post;
pub mod delete_post;
pub mod get_post;
pub mod list_posts;
pub mod update_post;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports
pub use config::PostsConfig;
pub use create_post::{CreatePostInput, CreatePostUseCase};
pub use delete_post::DeletePostUseCase;
pub use get_post::GetPostUseCase;
pub use list_posts::ListPostsUseCase;
pub use update_post::{UpdateOutcome, UpdatePostInput, UpdatePostUseCase};
