//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id)
//! - Cookie management
//! - One-shot flash notifications
//! - Profile image storage
//! - Small cryptographic helpers (random bytes, Base64)

pub mod cookie;
pub mod crypto;
pub mod flash;
pub mod image;
pub mod password;
