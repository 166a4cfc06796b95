//! Value Objects

pub mod page;
pub mod post_id;
pub mod title;
