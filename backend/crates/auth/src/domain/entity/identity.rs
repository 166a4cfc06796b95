//! Request Identity
//!
//! The outcome of session resolution for a request. Every request
//! carries exactly one `Identity` value; resolution itself never fails,
//! an unusable token simply yields `Anonymous`.

use uuid::Uuid;

use crate::domain::value_object::user_id::UserId;

/// Who is making the current request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identity {
    /// No session, or the presented token was invalid or expired
    Anonymous,
    /// A live session backed by a row in auth_sessions
    Authenticated { user_id: UserId, session_id: Uuid },
}

impl Identity {
    /// Get the user id when authenticated
    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Identity::Anonymous => None,
            Identity::Authenticated { user_id, .. } => Some(*user_id),
        }
    }

    /// Check whether this request is authenticated
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Identity::Authenticated { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous() {
        let identity = Identity::Anonymous;
        assert!(!identity.is_authenticated());
        assert_eq!(identity.user_id(), None);
    }

    #[test]
    fn test_authenticated() {
        let identity = Identity::Authenticated {
            user_id: UserId::from_i64(9),
            session_id: Uuid::new_v4(),
        };
        assert!(identity.is_authenticated());
        assert_eq!(identity.user_id(), Some(UserId::from_i64(9)));
    }
}
