//! Check Session Use Case
//!
//! Resolves a request's cookie token into an [`Identity`]. Resolution
//! never fails: any unusable token yields `Identity::Anonymous`.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::parse_session_token;
use crate::domain::entity::identity::Identity;
use crate::domain::repository::SessionRepository;

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> CheckSessionUseCase<S>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Resolve a token (if any) into the request identity
    pub async fn resolve(&self, session_token: Option<&str>) -> Identity {
        let Some(token) = session_token else {
            return Identity::Anonymous;
        };

        let Ok(session_id) = parse_session_token(token, &self.config.session_secret) else {
            return Identity::Anonymous;
        };

        let session = match self.session_repo.find_by_id(session_id).await {
            Ok(Some(session)) => session,
            Ok(None) => return Identity::Anonymous,
            Err(e) => {
                tracing::warn!(error = %e, "Session lookup failed");
                return Identity::Anonymous;
            }
        };

        if session.is_expired() {
            // Lazy cleanup of the expired row
            let repo = self.session_repo.clone();
            tokio::spawn(async move {
                if let Err(e) = repo.delete(session_id).await {
                    tracing::warn!(error = %e, "Failed to delete expired session");
                }
            });
            return Identity::Anonymous;
        }

        // Record activity and slide the expiration window
        let mut session = session;
        session.touch();
        match chrono::Duration::from_std(self.config.session_ttl(session.remember)) {
            Ok(ttl) => {
                session.extend_if_needed(ttl);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Invalid session TTL in config");
            }
        }

        let identity = Identity::Authenticated {
            user_id: session.user_id,
            session_id: session.session_id,
        };

        // Update in background
        let repo = self.session_repo.clone();
        tokio::spawn(async move {
            if let Err(e) = repo.update(&session).await {
                tracing::warn!(error = %e, "Failed to update session activity");
            }
        });

        identity
    }
}
