//! Sign In Use Case
//!
//! Authenticates a user and creates a session.
//!
//! Failure is reported differently for an unknown e-mail and for a
//! wrong password; the stored hash itself never leaves the repository
//! layer and verification always runs through Argon2.

use std::sync::Arc;

use chrono::Duration;
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::token::generate_session_token;
use crate::domain::entity::session::Session;
use crate::domain::entity::user::User;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
    /// Remember me flag
    pub remember: bool,
}

/// Sign in output
pub struct SignInOutput {
    /// Session token for the cookie
    pub session_token: String,
    /// The signed-in user
    pub user: User,
    /// Whether the cookie should persist across browser restarts
    pub remember: bool,
}

/// Sign in use case
pub struct SignInUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> SignInUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        // A malformed e-mail cannot match any account
        let email = Email::new(&input.email).map_err(|_| AuthError::EmailNotFound)?;

        let credentials = self
            .user_repo
            .credentials_by_email(&email)
            .await?
            .ok_or(AuthError::EmailNotFound)?;

        let password =
            ClearTextPassword::new(input.password).map_err(|_| AuthError::WrongPassword)?;

        if !credentials
            .password_hash
            .verify(&password, self.config.pepper())
        {
            return Err(AuthError::WrongPassword);
        }

        let user = credentials.user;

        // Create session
        let ttl = Duration::from_std(self.config.session_ttl(input.remember))
            .map_err(|e| AuthError::Internal(format!("Invalid session TTL: {e}")))?;
        let session = Session::new(user.user_id, input.remember, ttl);
        self.session_repo.create(&session).await?;

        let session_token = generate_session_token(session.session_id, &self.config.session_secret);

        tracing::info!(
            user_id = %user.user_id,
            session_id = %session.session_id,
            remember = input.remember,
            "User signed in"
        );

        Ok(SignInOutput {
            session_token,
            user,
            remember: input.remember,
        })
    }
}
