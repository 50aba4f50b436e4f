//! Colour parsing.
//!
//! Style colours are CSS-like strings. The terminal understands hex
//! notation and a handful of names; anything else is ignored.

use crossterm::style::Color;

/// Parse a hex color string to RGB components.
///
/// Accepts `#rgb` and `#rrggbb`, with or without the `#`.
///
/// # Example
///
/// ```
/// use dast_ansi::color::hex2rgb;
/// assert_eq!(hex2rgb("#ff8000"), Some((255, 128, 0)));
/// assert_eq!(hex2rgb("#ddd"), Some((221, 221, 221)));
/// assert_eq!(hex2rgb("#12345"), None);
/// ```
pub fn hex2rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
            Some((digit(0)?, digit(1)?, digit(2)?))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// RGB value of a few common colour names.
fn named_rgb(name: &str) -> Option<(u8, u8, u8)> {
    let rgb = match name.to_ascii_lowercase().as_str() {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "blue" => (0, 0, 255),
        "yellow" => (255, 255, 0),
        "orange" => (255, 165, 0),
        "purple" => (128, 0, 128),
        "gray" | "grey" => (128, 128, 128),
        _ => return None,
    };
    Some(rgb)
}

/// Parse a style colour into RGB.
///
/// ```
/// use dast_ansi::color::parse_rgb;
/// assert_eq!(parse_rgb("red"), Some((255, 0, 0)));
/// assert_eq!(parse_rgb("#007AFF"), Some((0, 122, 255)));
/// assert_eq!(parse_rgb("transparent"), None);
/// ```
pub fn parse_rgb(value: &str) -> Option<(u8, u8, u8)> {
    let value = value.trim();
    if value.starts_with('#') {
        hex2rgb(value)
    } else {
        named_rgb(value)
    }
}

/// Parse a style colour into a terminal colour.
pub fn parse_color(value: &str) -> Option<Color> {
    parse_rgb(value).map(|(r, g, b)| Color::Rgb { r, g, b })
}
