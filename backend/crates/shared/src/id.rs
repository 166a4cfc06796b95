//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities.
//!
//! IDs are numeric (`i64`) and assigned by the database (BIGSERIAL).
//! Entities therefore only receive an ID once they have been persisted;
//! repositories return the stored row via `INSERT ... RETURNING id`.

use std::fmt;
use std::marker::PhantomData;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type UserId = Id<markers::User>;
/// let id = UserId::from_i64(42);
/// assert_eq!(id.as_i64(), 42);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Create from a database-assigned value
    pub fn from_i64(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying numeric value
    pub fn as_i64(&self) -> i64 {
        self.value
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
///
/// Markers carry the same derives as `Id` itself so the derived impls
/// on `Id<T>` apply to every alias.
pub mod markers {
    /// Marker for User IDs
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct User;

    /// Marker for Post IDs
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Post;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;
pub type PostId = Id<markers::Post>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_type_safety() {
        let user_id: UserId = Id::from_i64(1);
        let post_id: PostId = Id::from_i64(1);

        // These are different types, cannot be mixed
        let _u: i64 = user_id.as_i64();
        let _p: i64 = post_id.into();
    }

    #[test]
    fn test_id_roundtrip() {
        let id: PostId = Id::from_i64(1234);
        assert_eq!(id.as_i64(), 1234);
        assert_eq!(format!("{}", id), "1234");
        assert_eq!(format!("{:?}", id), "Id(1234)");
    }

    #[test]
    fn test_id_equality() {
        let a: UserId = Id::from_i64(7);
        let b: UserId = Id::from_i64(7);
        let c: UserId = Id::from_i64(8);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
