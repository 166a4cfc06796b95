//! Value Objects

pub mod email;
pub mod image_ref;
pub mod user_id;
pub mod user_name;
