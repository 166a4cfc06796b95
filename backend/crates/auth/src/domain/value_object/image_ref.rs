//! Profile Image Reference Value Object
//!
//! Opaque reference returned by the image storage collaborator.
//! The domain never interprets it beyond checking it is a plausible
//! bare file name.

use platform::image::DEFAULT_IMAGE_REF;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Maximum stored reference length
const IMAGE_REF_MAX_LENGTH: usize = 64;

/// Image reference validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageRefError {
    #[error("Image reference cannot be empty")]
    Empty,

    #[error("Image reference must be at most {IMAGE_REF_MAX_LENGTH} characters")]
    TooLong,

    #[error("Image reference must be a bare file name")]
    NotBareName,
}

/// Stored profile image reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    /// Create from a reference produced by the image store
    pub fn new(value: impl Into<String>) -> Result<Self, ImageRefError> {
        let value = value.into();

        if value.is_empty() {
            return Err(ImageRefError::Empty);
        }
        if value.len() > IMAGE_REF_MAX_LENGTH {
            return Err(ImageRefError::TooLong);
        }
        if value.contains('/') || value.contains('\\') || value.starts_with('.') {
            return Err(ImageRefError::NotBareName);
        }

        Ok(Self(value))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Check whether this is the sentinel default image
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_IMAGE_REF
    }

    /// Get the reference as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ImageRef {
    fn default() -> Self {
        Self(DEFAULT_IMAGE_REF.to_string())
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
