//! Terminal output sanitization.
//!
//! Document text is untrusted. Control characters are stripped before
//! anything is written so content cannot inject escape sequences, and
//! only well-formed URLs with known schemes become OSC 8 hyperlinks.

/// Sanitize a string for safe terminal output.
///
/// Removes control characters except newline and tab.
///
/// ```
/// use dast_ansi::sanitize::sanitize_for_terminal;
/// assert_eq!(sanitize_for_terminal("Hello\x1b[31mWorld"), "Hello[31mWorld");
/// ```
pub fn sanitize_for_terminal(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect()
}

/// Check if a URL is safe for OSC 8 hyperlinks.
///
/// A safe URL starts with `http://`, `https://`, `mailto:` or `file://`
/// and holds no control characters.
///
/// ```
/// use dast_ansi::sanitize::is_safe_url;
///
/// assert!(is_safe_url("https://example.com"));
/// assert!(is_safe_url("mailto:user@example.com"));
/// assert!(!is_safe_url("javascript:alert(1)"));
/// assert!(!is_safe_url("https://evil.com\x1b]0;pwned\x07"));
/// ```
pub fn is_safe_url(url: &str) -> bool {
    let lower = url.to_lowercase();
    let safe_scheme = lower.starts_with("http://")
        || lower.starts_with("https://")
        || lower.starts_with("mailto:")
        || lower.starts_with("file://");

    safe_scheme && !url.chars().any(|c| c.is_control())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_newline_and_tab() {
        assert_eq!(sanitize_for_terminal("a\tb\nc\x07d\x00"), "a\tb\ncd");
    }

    #[test]
    fn test_sanitize_strips_osc() {
        let evil = "text\x1b]0;title\x07more";
        assert_eq!(sanitize_for_terminal(evil), "text]0;titlemore");
    }

    #[test]
    fn test_is_safe_url_schemes() {
        assert!(is_safe_url("HTTP://EXAMPLE.COM"));
        assert!(is_safe_url("file:///tmp/x"));
        assert!(!is_safe_url("ftp://example.com"));
        assert!(!is_safe_url("data:text/html,<b>x</b>"));
        assert!(!is_safe_url(""));
    }

    #[test]
    fn test_is_safe_url_rejects_controls() {
        assert!(!is_safe_url("https://x\n.com"));
        assert!(!is_safe_url("https://x\x1b\\"));
    }
}
