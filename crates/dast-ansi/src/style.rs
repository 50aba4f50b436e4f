//! Terminal text style.
//!
//! A [`Style`] is what survives of a [`TextStyle`] in a terminal: two
//! colours and a few attributes. Sizes, spacing and font families have
//! no terminal counterpart and are dropped.

use crate::codes::RESET;
use crate::color::{parse_color, parse_rgb};
use crossterm::style::{Attribute, Color};
use dast_config::{FontStyle, TextStyle};

/// Represents a complete text style with colors and attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    /// Foreground color
    pub fg: Option<Color>,
    /// Background color
    pub bg: Option<Color>,
    /// Text attributes (bold, italic, etc.)
    pub attributes: Vec<Attribute>,
}

impl Style {
    /// Create a new empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a document text style onto the terminal.
    ///
    /// A foreground equal to `base` is dropped when there is no
    /// background, leaving the terminal's own text colour in place.
    pub fn from_text_style(style: &TextStyle, base: Option<(u8, u8, u8)>) -> Self {
        let mut out = Style::new();

        if style.font_weight.is_some_and(|w| w.is_bold()) {
            out = out.bold();
        }
        if style.font_style == Some(FontStyle::Italic) {
            out = out.italic();
        }
        if let Some(line) = style.text_decoration_line {
            if line.has_underline() {
                out = out.underline();
            }
            if line.has_line_through() {
                out = out.strikethrough();
            }
        }

        out.bg = style.background_color.as_deref().and_then(parse_color);
        if let Some(color) = style.color.as_deref() {
            let is_base = base.is_some() && parse_rgb(color) == base;
            if out.bg.is_some() || !is_base {
                out.fg = parse_color(color);
            }
        }
        out
    }

    /// Set the foreground color.
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add an attribute.
    pub fn attr(mut self, attr: Attribute) -> Self {
        if !self.attributes.contains(&attr) {
            self.attributes.push(attr);
        }
        self
    }

    pub fn bold(self) -> Self {
        self.attr(Attribute::Bold)
    }

    pub fn italic(self) -> Self {
        self.attr(Attribute::Italic)
    }

    pub fn underline(self) -> Self {
        self.attr(Attribute::Underlined)
    }

    pub fn strikethrough(self) -> Self {
        self.attr(Attribute::CrossedOut)
    }

    /// Whether this style changes nothing.
    pub fn is_plain(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attributes.is_empty()
    }

    /// Convert to one SGR escape sequence.
    pub fn to_ansi(&self) -> String {
        let mut codes = Vec::new();

        for attr in &self.attributes {
            let code = match attr {
                Attribute::Bold => "1",
                Attribute::Dim => "2",
                Attribute::Italic => "3",
                Attribute::Underlined => "4",
                Attribute::Reverse => "7",
                Attribute::CrossedOut => "9",
                _ => continue,
            };
            codes.push(code.to_string());
        }

        if let Some(Color::Rgb { r, g, b }) = self.fg {
            codes.push(format!("38;2;{};{};{}", r, g, b));
        }

        if let Some(Color::Rgb { r, g, b }) = self.bg {
            codes.push(format!("48;2;{};{};{}", r, g, b));
        }

        if codes.is_empty() {
            String::new()
        } else {
            format!("\x1b[{}m", codes.join(";"))
        }
    }

    /// `text` wrapped in this style and a reset.
    pub fn paint(&self, text: &str) -> String {
        let on = self.to_ansi();
        if on.is_empty() || text.is_empty() {
            text.to_string()
        } else {
            format!("{}{}{}", on, text, RESET)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dast_config::{FontWeight, TextDecorationLine};

    const BLACK: Option<(u8, u8, u8)> = Some((0, 0, 0));

    #[test]
    fn test_style_builder() {
        let style = Style::new().bold().fg(Color::Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(style.to_ansi(), "\x1b[1;38;2;255;0;0m");
    }

    #[test]
    fn test_attr_dedup() {
        let style = Style::new().bold().bold();
        assert_eq!(style.attributes, vec![Attribute::Bold]);
    }

    #[test]
    fn test_from_text_style_attributes() {
        let text = TextStyle::new()
            .font_weight(FontWeight::W700)
            .font_style(FontStyle::Italic)
            .text_decoration_line(TextDecorationLine::UnderlineLineThrough);
        let style = Style::from_text_style(&text, BLACK);
        assert_eq!(
            style.attributes,
            vec![
                Attribute::Bold,
                Attribute::Italic,
                Attribute::Underlined,
                Attribute::CrossedOut
            ]
        );
    }

    #[test]
    fn test_light_weight_not_bold() {
        let text = TextStyle::new().font_weight(FontWeight::W300);
        assert!(Style::from_text_style(&text, BLACK).is_plain());
    }

    #[test]
    fn test_base_color_dropped_without_background() {
        let text = TextStyle::new().color("#000000");
        assert_eq!(Style::from_text_style(&text, BLACK).fg, None);

        let text = TextStyle::new().color("#000").background_color("#ffeb3b");
        let style = Style::from_text_style(&text, BLACK);
        assert_eq!(style.fg, Some(Color::Rgb { r: 0, g: 0, b: 0 }));
        assert_eq!(style.bg, Some(Color::Rgb { r: 255, g: 235, b: 59 }));
    }

    #[test]
    fn test_base_color_kept_without_base() {
        let text = TextStyle::new().color("#000000");
        assert_eq!(
            Style::from_text_style(&text, None).fg,
            Some(Color::Rgb { r: 0, g: 0, b: 0 })
        );
    }

    #[test]
    fn test_paint() {
        let style = Style::new().italic();
        assert_eq!(style.paint("x"), "\x1b[3mx\x1b[0m");
        assert_eq!(style.paint(""), "");
        assert_eq!(Style::new().paint("x"), "x");
    }
}
