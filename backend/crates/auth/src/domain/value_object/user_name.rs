//! User Name Value Object
//!
//! The username is the public handle shown next to posts and used for
//! the per-user listing URL.
//!
//! ## Invariants
//! - Length: 2-20 characters (after NFKC normalization)
//! - ASCII letters, digits and `_ . -` only; stored lowercase, so
//!   uniqueness and lookups are case-insensitive
//! - Must contain at least one letter or digit, and at least one
//!   non-digit (an all-digit handle would collide with numeric post
//!   ids in listing URLs)
//! - Must start and end with a letter, digit or `_`

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

// ============================================================================
// Constants
// ============================================================================

/// Minimum length for a username (in characters)
pub const USER_NAME_MIN_LENGTH: usize = 2;

/// Maximum length for a username (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 20;

/// Allowed special characters in a username
const ALLOWED_SPECIAL_CHARS: &[char] = &['_', '.', '-'];

// ============================================================================
// Error Types
// ============================================================================

/// Username validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserNameError {
    #[error("Username must be between {min} and {max} characters (got {actual})")]
    InvalidLength {
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("Username contains an invalid character: '{0}'")]
    InvalidCharacter(char),

    #[error("Username must contain at least one letter or digit")]
    NoAlphanumeric,

    #[error("Username cannot consist of digits only")]
    DigitsOnly,

    #[error("Username must start and end with a letter, digit or underscore")]
    InvalidBoundary,
}

// ============================================================================
// UserName
// ============================================================================

/// Validated username
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    /// Create a new username with validation
    ///
    /// Input is NFKC-normalized, trimmed and lowercased before
    /// validation; the lowercase form is the canonical one stored and
    /// compared for uniqueness.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserNameError> {
        let normalized: String = raw
            .as_ref()
            .trim()
            .nfkc()
            .collect::<String>()
            .to_lowercase();

        let char_count = normalized.chars().count();
        if !(USER_NAME_MIN_LENGTH..=USER_NAME_MAX_LENGTH).contains(&char_count) {
            return Err(UserNameError::InvalidLength {
                min: USER_NAME_MIN_LENGTH,
                max: USER_NAME_MAX_LENGTH,
                actual: char_count,
            });
        }

        for ch in normalized.chars() {
            if !ch.is_ascii_alphanumeric() && !ALLOWED_SPECIAL_CHARS.contains(&ch) {
                return Err(UserNameError::InvalidCharacter(ch));
            }
        }

        if !normalized.chars().any(|c| c.is_ascii_alphanumeric()) {
            return Err(UserNameError::NoAlphanumeric);
        }

        // Numeric path keys address posts, so a digits-only handle
        // would have an unreachable listing URL
        if normalized.chars().all(|c| c.is_ascii_digit()) {
            return Err(UserNameError::DigitsOnly);
        }

        let first = normalized.chars().next().unwrap_or('.');
        let last = normalized.chars().next_back().unwrap_or('.');
        let boundary_ok = |c: char| c.is_ascii_alphanumeric() || c == '_';
        if !boundary_ok(first) || !boundary_ok(last) {
            return Err(UserNameError::InvalidBoundary);
        }

        Ok(Self(normalized))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the username as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
