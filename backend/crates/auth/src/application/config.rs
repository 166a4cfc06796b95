//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Session TTL without "Remember Me" (12 hours)
    pub session_ttl_short: Duration,
    /// Session TTL with "Remember Me" (1 week)
    pub session_ttl_long: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// Where to land after sign-in when no "next" target is present
    pub default_landing: String,
    /// Sign-in page path, used when redirecting anonymous requests
    pub signin_path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "session".to_string(),
            session_secret: [0u8; 32],
            session_ttl_short: Duration::from_secs(12 * 3600), // 12 hours
            session_ttl_long: Duration::from_secs(7 * 24 * 3600), // 1 week
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            password_pepper: None,
            default_landing: "/home".to_string(),
            signin_path: "/signin".to_string(),
        }
    }
}

impl AuthConfig {
    /// Create config with a random session secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            session_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// TTL for a session created with the given remember flag
    pub fn session_ttl(&self, remember: bool) -> Duration {
        if remember {
            self.session_ttl_long
        } else {
            self.session_ttl_short
        }
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttls() {
        let config = AuthConfig::default();
        assert_eq!(config.session_ttl(false), Duration::from_secs(12 * 3600));
        assert_eq!(config.session_ttl(true), Duration::from_secs(7 * 24 * 3600));
    }

    #[test]
    fn test_random_secret_differs() {
        let a = AuthConfig::with_random_secret();
        let b = AuthConfig::with_random_secret();
        assert_ne!(a.session_secret, b.session_secret);
    }

    #[test]
    fn test_development_is_insecure_cookie() {
        let config = AuthConfig::development();
        assert!(!config.cookie_secure);
    }
}
