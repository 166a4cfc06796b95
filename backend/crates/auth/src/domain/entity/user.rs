//! User Entity
//!
//! Core user profile entity. The password hash deliberately lives
//! outside this type: it only surfaces through the [`Credentials`]
//! projection used during sign-in and never leaves the auth crate.

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;

use crate::domain::value_object::{
    email::Email, image_ref::ImageRef, user_id::UserId, user_name::UserName,
};

/// User entity
///
/// `user_id` and `created_at` are database-assigned and immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Numeric identifier (BIGSERIAL)
    pub user_id: UserId,
    /// Unique public handle (2-20 chars)
    pub username: UserName,
    /// Unique email, lowercased
    pub email: Email,
    /// Profile image reference (sentinel "default.jpg" until replaced)
    pub image: ImageRef,
    /// Created timestamp, set once at sign-up
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build the updated profile for an account change
    ///
    /// Returns `None` when nothing differs from the current state,
    /// so callers can skip the write entirely.
    pub fn with_profile(
        &self,
        username: UserName,
        email: Email,
        image: Option<ImageRef>,
    ) -> Option<User> {
        let image = image.unwrap_or_else(|| self.image.clone());

        if username == self.username && email == self.email && image == self.image {
            return None;
        }

        Some(User {
            user_id: self.user_id,
            username,
            email,
            image,
            created_at: self.created_at,
        })
    }
}

/// A user as it is handed to the repository before the database has
/// assigned an id and creation timestamp.
#[derive(Debug)]
pub struct NewUser {
    pub username: UserName,
    pub email: Email,
    pub password_hash: HashedPassword,
}

/// Sign-in projection: the user plus the stored password hash.
///
/// Never exposed outside the auth crate.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub user: User,
    pub password_hash: HashedPassword,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            user_id: UserId::from_i64(1),
            username: UserName::new("ada").unwrap(),
            email: Email::new("ada@example.com").unwrap(),
            image: ImageRef::default(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_with_profile_no_change_is_none() {
        let user = sample_user();
        let unchanged = user.with_profile(
            UserName::new("ada").unwrap(),
            Email::new("ada@example.com").unwrap(),
            None,
        );
        assert!(unchanged.is_none());
    }

    #[test]
    fn test_with_profile_username_change() {
        let user = sample_user();
        let updated = user
            .with_profile(
                UserName::new("lovelace").unwrap(),
                Email::new("ada@example.com").unwrap(),
                None,
            )
            .unwrap();
        assert_eq!(updated.username.as_str(), "lovelace");
        assert_eq!(updated.user_id, user.user_id);
        assert_eq!(updated.created_at, user.created_at);
    }

    #[test]
    fn test_with_profile_new_image_is_change() {
        let user = sample_user();
        let updated = user.with_profile(
            UserName::new("ada").unwrap(),
            Email::new("ada@example.com").unwrap(),
            Some(ImageRef::new("deadbeef.jpg").unwrap()),
        );
        assert!(updated.is_some());
    }

    #[test]
    fn test_with_profile_same_image_is_no_change() {
        let user = sample_user();
        let unchanged = user.with_profile(
            UserName::new("ada").unwrap(),
            Email::new("ada@example.com").unwrap(),
            Some(ImageRef::default()),
        );
        assert!(unchanged.is_none());
    }
}
