//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use platform::flash::FlashMessage;

use crate::domain::entity::user::User;

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

// ============================================================================
// Sign In
// ============================================================================

/// Sign in request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

// ============================================================================
// Views
// ============================================================================

/// Payload for the sign-up / sign-in form views
///
/// Pending flash messages are taken (and cleared) when the view loads.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormViewResponse {
    pub flash: Vec<FlashMessage>,
    /// Echo of the post-sign-in redirect target, if one was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

// ============================================================================
// Account
// ============================================================================

/// Account view response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub username: String,
    pub email: String,
    pub image_file: String,
    pub created_at_ms: i64,
    pub flash: Vec<FlashMessage>,
}

impl AccountResponse {
    pub fn from_user(user: &User, flash: Vec<FlashMessage>) -> Self {
        Self {
            username: user.username.to_string(),
            email: user.email.to_string(),
            image_file: user.image.to_string(),
            created_at_ms: user.created_at.timestamp_millis(),
            flash,
        }
    }
}

/// Update account request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountRequest {
    pub username: String,
    pub email: String,
    /// New profile picture as base64, when the user picked one
    pub image_base64: Option<String>,
}
