//! Sign Up Use Case
//!
//! Creates a new user account. The new user is not signed in
//! automatically; the browser is sent to the sign-in page next.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<User> {
        let username =
            UserName::new(&input.username).map_err(|e| AuthError::Validation(e.to_string()))?;
        let email = Email::new(&input.email).map_err(|e| AuthError::Validation(e.to_string()))?;

        // Fast-path duplicate checks. The unique indexes remain the
        // final authority; a concurrent insert still surfaces as a
        // constraint violation from `create`.
        if self.user_repo.exists_by_username(&username).await? {
            return Err(AuthError::UsernameTaken);
        }
        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let password = ClearTextPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.to_string()))?;
        let password_hash = password
            .hash(self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = self
            .user_repo
            .create(&NewUser {
                username,
                email,
                password_hash,
            })
            .await?;

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            "User signed up"
        );

        Ok(user)
    }
}
