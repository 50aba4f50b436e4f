//! ANSI escape code constants.
//!
//! Raw sequences and glyphs used to draw presentation trees in a terminal.
//! SGR sequences for styled runs are built by [`crate::style::Style`].

/// Reset all attributes (colors and formatting).
pub const RESET: &str = "\x1b[0m";

/// OSC 8 hyperlink start, followed by the URL and [`ST`].
pub const LINK_START: &str = "\x1b]8;;";

/// String terminator closing an OSC sequence.
pub const ST: &str = "\x1b\\";

/// OSC 8 hyperlink end.
pub const LINK_END: &str = "\x1b]8;;\x1b\\";

/// Glyph repeated to draw a thematic break.
pub const RULE: char = '─';

/// Left border drawn before quoted lines.
pub const QUOTE_BAR: &str = "│";

/// Wrap `text` in an OSC 8 hyperlink to `url`.
///
/// The URL is not checked here; see [`crate::sanitize::is_safe_url`].
///
/// ```
/// use dast_ansi::codes::hyperlink;
/// assert_eq!(hyperlink("https://x", "go"), "\x1b]8;;https://x\x1b\\go\x1b]8;;\x1b\\");
/// ```
pub fn hyperlink(url: &str, text: &str) -> String {
    format!("{}{}{}{}{}", LINK_START, url, ST, text, LINK_END)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyperlink_empty_text() {
        assert_eq!(hyperlink("https://x", ""), "\x1b]8;;https://x\x1b\\\x1b]8;;\x1b\\");
    }

    #[test]
    fn test_link_end_is_empty_link() {
        assert_eq!(LINK_END, format!("{}{}", LINK_START, ST));
    }
}
