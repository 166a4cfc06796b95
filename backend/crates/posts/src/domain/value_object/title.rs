//! Post Title Value Object

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Maximum title length (in characters)
pub const TITLE_MAX_LENGTH: usize = 100;

/// Title validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TitleError {
    #[error("Title cannot be empty")]
    Empty,

    #[error("Title must be at most {TITLE_MAX_LENGTH} characters")]
    TooLong,
}

/// Validated post title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostTitle(String);

impl PostTitle {
    /// Create a new title with validation
    pub fn new(raw: impl Into<String>) -> Result<Self, TitleError> {
        let title = raw.into().trim().to_string();

        if title.is_empty() {
            return Err(TitleError::Empty);
        }
        if title.chars().count() > TITLE_MAX_LENGTH {
            return Err(TitleError::TooLong);
        }

        Ok(Self(title))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the title as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PostTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
