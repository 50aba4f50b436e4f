//! ANSI text utilities.
//!
//! Visible text and display width of strings that may contain escapes.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

/// Regex pattern for the escape sequences this crate emits.
/// Matches:
/// - CSI sequences: \x1b[...letter
/// - OSC sequences: \x1b]...;;...\x1b\
pub const ANSIESCAPE: &str = r"\x1b(?:\[[0-9;?]*[a-zA-Z]|\][0-9]*;;.*?\x1b\\)";

static ANSIESCAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ANSIESCAPE).expect("ANSI escape pattern should compile"));

/// Remove all ANSI escape sequences from text.
///
/// ```
/// use dast_ansi::utils::visible;
/// assert_eq!(visible("\x1b[1mBold\x1b[0m text"), "Bold text");
/// assert_eq!(visible("\x1b]8;;https://x\x1b\\go\x1b]8;;\x1b\\"), "go");
/// ```
pub fn visible(text: &str) -> String {
    ANSIESCAPE_RE.replace_all(text, "").into_owned()
}

/// Display width of text in terminal columns, escapes excluded.
///
/// ```
/// use dast_ansi::utils::visible_length;
/// assert_eq!(visible_length("\x1b[1mHello\x1b[0m"), 5);
/// assert_eq!(visible_length("你好"), 4);
/// ```
pub fn visible_length(text: &str) -> usize {
    visible(text).width()
}

/// Display width of text known to hold no escapes.
pub fn display_width(text: &str) -> usize {
    text.width()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible() {
        assert_eq!(visible("No codes"), "No codes");
        assert_eq!(visible("\x1b[38;2;255;0;0mRed\x1b[0m"), "Red");
        assert_eq!(visible("\x1b[1;3;48;2;1;2;3mx\x1b[0m"), "x");
    }

    #[test]
    fn test_visible_hyperlink_with_params() {
        let text = "a\x1b]8;;https://example.com/?q=1\x1b\\link\x1b]8;;\x1b\\b";
        assert_eq!(visible(text), "alinkb");
    }

    #[test]
    fn test_visible_length() {
        assert_eq!(visible_length("Hello"), 5);
        assert_eq!(visible_length("• item"), 6);
        assert_eq!(display_width("──"), 2);
    }
}
