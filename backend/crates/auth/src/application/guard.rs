//! Authentication Guard
//!
//! Small helper shared by use cases and handlers that need a signed-in
//! caller.

use crate::domain::entity::identity::Identity;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// Require that the request identity is authenticated
pub fn require_authenticated(identity: &Identity) -> AuthResult<UserId> {
    identity.user_id().ok_or(AuthError::Unauthorized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_anonymous_rejected() {
        assert!(matches!(
            require_authenticated(&Identity::Anonymous),
            Err(AuthError::Unauthorized)
        ));
    }

    #[test]
    fn test_authenticated_passes() {
        let identity = Identity::Authenticated {
            user_id: UserId::from_i64(3),
            session_id: Uuid::new_v4(),
        };
        assert_eq!(
            require_authenticated(&identity).unwrap(),
            UserId::from_i64(3)
        );
    }
}
