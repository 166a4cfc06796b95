//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{
    session::Session,
    user::{Credentials, NewUser, User},
};
use crate::domain::value_object::{email::Email, user_id::UserId, user_name::UserName};
use crate::error::AuthResult;
use uuid::Uuid;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user, returning the persisted row with its
    /// database-assigned id and creation timestamp
    async fn create(&self, user: &NewUser) -> AuthResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Find the sign-in projection (user + password hash) by email
    async fn credentials_by_email(&self, email: &Email) -> AuthResult<Option<Credentials>>;

    /// Check if username exists
    async fn exists_by_username(&self, username: &UserName) -> AuthResult<bool>;

    /// Check if email exists
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    /// Update user profile fields
    async fn update(&self, user: &User) -> AuthResult<()>;
}

/// Session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Create a new session
    async fn create(&self, session: &Session) -> AuthResult<()>;

    /// Find session by ID
    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<Session>>;

    /// Update session (e.g., last activity)
    async fn update(&self, session: &Session) -> AuthResult<()>;

    /// Delete a session
    async fn delete(&self, session_id: Uuid) -> AuthResult<()>;

    /// Clean up expired sessions
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
