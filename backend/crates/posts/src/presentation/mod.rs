//! Presentation Layer
//!
//! HTTP handlers, DTOs and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::PostsAppState;
pub use router::{posts_router, posts_router_generic};
