//! Sign Out Use Case
//!
//! Invalidates a user session. Idempotent: signing out with a stale or
//! already-deleted token still succeeds.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::parse_session_token;
use crate::domain::repository::SessionRepository;
use crate::error::{AuthError, AuthResult};

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> SignOutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Sign out from the current session
    ///
    /// An unparseable token means there is no session to invalidate,
    /// which still counts as signed out.
    pub async fn execute(&self, session_token: &str) -> AuthResult<()> {
        let session_id = match parse_session_token(session_token, &self.config.session_secret) {
            Ok(session_id) => session_id,
            Err(AuthError::SessionInvalid) => return Ok(()),
            Err(e) => return Err(e),
        };

        self.session_repo.delete(session_id).await?;

        tracing::info!(session_id = %session_id, "User signed out");
        Ok(())
    }
}
