//! Post ID
//!
//! Typed numeric identifier for posts, assigned by the database.

pub use kernel::id::PostId;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_id_roundtrip() {
        let post_id = PostId::from_i64(5);
        assert_eq!(post_id.as_i64(), 5);
    }
}
