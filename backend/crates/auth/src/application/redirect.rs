//! Post-Sign-In Redirect Target
//!
//! Validates the "next" query parameter so sign-in can only redirect
//! inside the application. Anything else falls back to the default
//! landing page.

/// Resolve where to send the browser after a successful sign-in
///
/// `next` is honored only when it is a local absolute path: it must
/// start with a single `/`. Protocol-relative (`//host`) and absolute
/// URLs are rejected, as are backslash variants some browsers
/// normalize into slashes.
pub fn redirect_target<'a>(next: Option<&'a str>, default: &'a str) -> &'a str {
    match next {
        Some(path) if is_local_path(path) => path,
        _ => default,
    }
}

fn is_local_path(path: &str) -> bool {
    if !path.starts_with('/') {
        return false;
    }
    if path.starts_with("//") || path.starts_with("/\\") {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_path_honored() {
        assert_eq!(redirect_target(Some("/posts/add"), "/home"), "/posts/add");
        assert_eq!(
            redirect_target(Some("/posts/add?draft=1"), "/home"),
            "/posts/add?draft=1"
        );
    }

    #[test]
    fn test_missing_next_falls_back() {
        assert_eq!(redirect_target(None, "/home"), "/home");
    }

    #[test]
    fn test_external_targets_rejected() {
        assert_eq!(redirect_target(Some("https://evil.test"), "/home"), "/home");
        assert_eq!(redirect_target(Some("//evil.test"), "/home"), "/home");
        assert_eq!(redirect_target(Some("/\\evil.test"), "/home"), "/home");
        assert_eq!(redirect_target(Some("evil"), "/home"), "/home");
        assert_eq!(redirect_target(Some(""), "/home"), "/home");
    }
}
