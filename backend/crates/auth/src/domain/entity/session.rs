//! Session Entity
//!
//! Represents an authenticated browser session.
//! Stored in the database and referenced by a signed cookie token.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::value_object::user_id::UserId;

/// Session entity
#[derive(Debug, Clone)]
pub struct Session {
    /// Session ID (UUID v4)
    pub session_id: Uuid,
    /// Reference to User
    pub user_id: UserId,
    /// Whether "Remember Me" was checked
    pub remember: bool,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Last activity timestamp
    pub last_activity_at: DateTime<Utc>,
}

impl Session {
    /// Create a new session
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn new(user_id: UserId, remember: bool, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            session_id: Uuid::new_v4(),
            user_id,
            remember,
            expires_at_ms: (now + ttl).timestamp_millis(),
            created_at: now,
            last_activity_at: now,
        }
    }

    /// Check if session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }

    /// Update last activity timestamp
    pub fn touch(&mut self) {
        self.last_activity_at = Utc::now();
    }

    /// Get remaining time until expiration
    pub fn remaining_ms(&self) -> i64 {
        let now_ms = Utc::now().timestamp_millis();
        (self.expires_at_ms - now_ms).max(0)
    }

    /// Slide the expiration forward on activity
    ///
    /// The extension policy is intentionally simple: extend to
    /// (now + ttl) when remaining time falls below half of ttl.
    /// Returns true when the expiration actually moved.
    pub fn extend_if_needed(&mut self, ttl: Duration) -> bool {
        let now = Utc::now();

        // Only extend if less than half the TTL remains
        if self.expires_at_ms < (now + (ttl / 2)).timestamp_millis() {
            self.expires_at_ms = (now + ttl).timestamp_millis();
            return true;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_not_expired() {
        let session = Session::new(UserId::from_i64(1), false, Duration::hours(12));
        assert!(!session.is_expired());
        assert!(session.remaining_ms() > 0);
        assert_eq!(session.created_at, session.last_activity_at);
    }

    #[test]
    fn test_expired_session() {
        let mut session = Session::new(UserId::from_i64(1), false, Duration::hours(12));
        session.expires_at_ms = Utc::now().timestamp_millis() - 1_000;
        assert!(session.is_expired());
        assert_eq!(session.remaining_ms(), 0);
    }

    #[test]
    fn test_extend_skipped_when_fresh() {
        let ttl = Duration::days(7);
        let mut session = Session::new(UserId::from_i64(1), true, ttl);
        let before = session.expires_at_ms;
        assert!(!session.extend_if_needed(ttl));
        assert_eq!(session.expires_at_ms, before);
    }

    #[test]
    fn test_extend_when_past_half_ttl() {
        let ttl = Duration::days(7);
        let mut session = Session::new(UserId::from_i64(1), true, ttl);
        // Simulate a session with only two days left
        session.expires_at_ms = (Utc::now() + Duration::days(2)).timestamp_millis();
        assert!(session.extend_if_needed(ttl));
        assert!(session.remaining_ms() > Duration::days(6).num_milliseconds());
    }

    #[test]
    fn test_touch_advances_last_activity() {
        let mut session = Session::new(UserId::from_i64(1), false, Duration::hours(12));
        let before = session.last_activity_at;
        std::thread::sleep(std::time::Duration::from_millis(5));
        session.touch();
        assert!(session.last_activity_at > before);
    }
}
