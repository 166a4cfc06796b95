//! Email Value Object
//!
//! Represents a validated, lowercased email address.
//! Basic format validation only - deliverability is out of scope.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Maximum local-part length (per RFC 5321)
const LOCAL_PART_MAX_LENGTH: usize = 64;

/// Email validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("E-mail cannot be empty")]
    Empty,

    #[error("E-mail must be at most {EMAIL_MAX_LENGTH} characters")]
    TooLong,

    #[error("Invalid e-mail format")]
    InvalidFormat,
}

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    pub fn new(email: impl Into<String>) -> Result<Self, EmailError> {
        let email = email.into().trim().to_lowercase();

        if email.is_empty() {
            return Err(EmailError::Empty);
        }
        if email.len() > EMAIL_MAX_LENGTH {
            return Err(EmailError::TooLong);
        }
        if !Self::is_valid_format(&email) {
            return Err(EmailError::InvalidFormat);
        }

        Ok(Self(email))
    }

    /// Basic email format validation
    fn is_valid_format(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        // A second '@' is never valid
        if domain.contains('@') {
            return false;
        }

        if local.is_empty() || local.len() > LOCAL_PART_MAX_LENGTH {
            return false;
        }

        // Domain must be dotted and limited to hostname characters
        if domain.is_empty() || !domain.contains('.') {
            return false;
        }
        if !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return false;
        }
        if domain.starts_with(['.', '-']) || domain.ends_with(['.', '-']) {
            return false;
        }

        true
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, EmailError> {
        Email::new(s)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("user@example.com").is_ok());
        assert!(Email::new("User@Example.COM").is_ok()); // Should lowercase
        assert!(Email::new("user.name@example.co.jp").is_ok());
        assert!(Email::new("user+tag@example.com").is_ok());
    }

    #[test]
    fn test_email_invalid() {
        assert!(matches!(Email::new(""), Err(EmailError::Empty)));
        assert!(matches!(
            Email::new("userexample.com"),
            Err(EmailError::InvalidFormat)
        ));
        assert!(Email::new("user@").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("user@@example.com").is_err());
        assert!(Email::new("user@example").is_err());
        assert!(Email::new("user@.example.com").is_err());
    }

    #[test]
    fn test_email_too_long() {
        let long = format!("{}@example.com", "a".repeat(EMAIL_MAX_LENGTH));
        assert!(matches!(Email::new(long), Err(EmailError::TooLong)));
    }

    #[test]
    fn test_email_case_normalization() {
        let email = Email::new("User@Example.COM").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }
}
