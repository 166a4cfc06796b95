//! Flash Notification Channel
//!
//! One-shot user-facing messages carried across a redirect in a cookie.
//! The writer sets the cookie next to a redirect response; the next page
//! load reads and clears it. Fire-and-forget: nothing in the application
//! consumes a return value from this channel.
//!
//! Payload is a JSON array encoded as URL-safe Base64 so it survives
//! cookie value restrictions. Decoding is tolerant: a malformed cookie
//! yields no messages instead of an error.

use axum::http::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

use crate::cookie::{self, CookieConfig, SameSite};
use crate::crypto::{from_base64_url, to_base64_url};

/// Cookie name for flash messages
pub const FLASH_COOKIE_NAME: &str = "flash";

/// Message severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
    Info,
    Warning,
}

impl FlashLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Error => "error",
            FlashLevel::Info => "info",
            FlashLevel::Warning => "warning",
        }
    }
}

/// A single flash message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub message: String,
}

impl FlashMessage {
    pub fn new(level: FlashLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(FlashLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(FlashLevel::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(FlashLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(FlashLevel::Warning, message)
    }
}

fn flash_cookie_config() -> CookieConfig {
    CookieConfig {
        name: FLASH_COOKIE_NAME.to_string(),
        secure: false, // flash carries no secrets; must work in dev over http
        http_only: true,
        same_site: SameSite::Lax,
        path: "/".to_string(),
        // Short lifetime: the message only needs to survive one redirect
        max_age_secs: Some(60),
    }
}

/// Build a Set-Cookie header carrying the given messages
pub fn set_flash_header(messages: &[FlashMessage]) -> HeaderValue {
    let json = serde_json::to_vec(messages).unwrap_or_default();
    let value = to_base64_url(&json);
    cookie::set_cookie_header(&flash_cookie_config(), &value)
}

/// Build a Set-Cookie header for a single message
pub fn notify(level: FlashLevel, message: impl Into<String>) -> HeaderValue {
    set_flash_header(&[FlashMessage::new(level, message)])
}

/// Read pending flash messages from request headers
///
/// Malformed or absent cookies decode to an empty list.
pub fn take_flash(headers: &HeaderMap) -> Vec<FlashMessage> {
    let Some(raw) = cookie::extract_cookie(headers, FLASH_COOKIE_NAME) else {
        return Vec::new();
    };

    from_base64_url(&raw)
        .ok()
        .and_then(|bytes| serde_json::from_slice(&bytes).ok())
        .unwrap_or_default()
}

/// Build a Set-Cookie header that clears the flash cookie
pub fn clear_flash_header() -> HeaderValue {
    HeaderValue::from_str(&flash_cookie_config().build_delete_cookie())
        .unwrap_or_else(|_| HeaderValue::from_static(""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("{}={}", FLASH_COOKIE_NAME, value)).unwrap(),
        );
        headers
    }

    #[test]
    fn test_flash_roundtrip() {
        let messages = vec![
            FlashMessage::success("Account created for ada!"),
            FlashMessage::info("Nothing to update"),
        ];

        let header_value = set_flash_header(&messages);
        let cookie_value = header_value
            .to_str()
            .unwrap()
            .split(';')
            .next()
            .unwrap()
            .split_once('=')
            .unwrap()
            .1
            .to_string();

        let decoded = take_flash(&headers_with_cookie(&cookie_value));
        assert_eq!(decoded, messages);
    }

    #[test]
    fn test_take_flash_missing_cookie() {
        assert!(take_flash(&HeaderMap::new()).is_empty());
    }

    #[test]
    fn test_take_flash_malformed_cookie() {
        assert!(take_flash(&headers_with_cookie("%%%not-base64%%%")).is_empty());
        let garbage = to_base64_url(b"not json");
        assert!(take_flash(&headers_with_cookie(&garbage)).is_empty());
    }

    #[test]
    fn test_level_as_str() {
        assert_eq!(FlashLevel::Success.as_str(), "success");
        assert_eq!(FlashLevel::Error.as_str(), "error");
        assert_eq!(FlashLevel::Info.as_str(), "info");
        assert_eq!(FlashLevel::Warning.as_str(), "warning");
    }

    #[test]
    fn test_clear_header() {
        let header_value = clear_flash_header();
        let s = header_value.to_str().unwrap();
        assert!(s.starts_with("flash=;"));
        assert!(s.contains("Max-Age=0"));
    }
}
