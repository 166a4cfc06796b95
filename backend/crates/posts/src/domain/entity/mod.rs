//! Domain Entities

pub mod post;
