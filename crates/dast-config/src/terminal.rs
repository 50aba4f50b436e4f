//! Terminal backend settings.
//!
//! Read from the `[terminal]` section of the configuration file.

use serde::{Deserialize, Serialize};

/// Settings for the ANSI terminal backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TerminalConfig {
    /// Output width in columns. 0 means detect from the terminal.
    #[serde(default)]
    pub width: usize,

    /// Wrap links in OSC 8 hyperlink escapes.
    #[serde(default = "default_true")]
    pub hyperlinks: bool,

    /// Print the target URL in parentheses after link text.
    #[serde(default)]
    pub show_urls: bool,

    /// Emit colours and text attributes.
    #[serde(default = "default_true")]
    pub color: bool,

    /// Document text colour that maps to the terminal's own foreground.
    /// Only applies to text without a background.
    #[serde(default = "default_base_color")]
    pub base_color: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            width: 0,
            hyperlinks: true,
            show_urls: false,
            color: true,
            base_color: default_base_color(),
        }
    }
}

/// A `[terminal]` section that only sets some keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TerminalOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hyperlinks: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_urls: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_color: Option<String>,
}

impl TerminalConfig {
    /// Apply the keys `other` sets, keeping the rest.
    pub fn merge(&mut self, other: &TerminalOverride) {
        if let Some(width) = other.width {
            self.width = width;
        }
        if let Some(hyperlinks) = other.hyperlinks {
            self.hyperlinks = hyperlinks;
        }
        if let Some(show_urls) = other.show_urls {
            self.show_urls = show_urls;
        }
        if let Some(color) = other.color {
            self.color = color;
        }
        if let Some(base_color) = &other.base_color {
            self.base_color = base_color.clone();
        }
    }

    /// Plain output: no colour, no escapes.
    pub fn plain() -> Self {
        Self {
            width: 0,
            hyperlinks: false,
            show_urls: false,
            color: false,
            base_color: default_base_color(),
        }
    }

    /// Width to render at, given the detected terminal width.
    pub fn effective_width(&self, detected: usize) -> usize {
        if self.width > 0 {
            self.width
        } else {
            detected.max(20)
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_base_color() -> String {
    "#000000".to_string()
}
