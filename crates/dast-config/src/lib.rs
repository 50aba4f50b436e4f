//! Dast Config
//!
//! Style records, style resolution and configuration loading for dast.
//!
//! # Overview
//!
//! - [`TextStyle`], [`ViewStyle`] - Style records with last-write-wins merge
//! - [`StructuredTextStyles`], [`StyleOverride`] - Complete and partial slot tables
//! - [`resolve_styles`] - Defaults plus an optional override
//! - [`Config`] - The TOML configuration file
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/dast/config.toml`
//! - macOS: `~/Library/Application Support/dast/config.toml`
//! - Windows: `%APPDATA%\dast\config.toml`
//!
//! # Example
//!
//! ```
//! use dast_config::{resolve_styles, StyleOverride, TextStyle};
//!
//! let over = StyleOverride::default().link(TextStyle::new().color("#ff00ff"));
//! let styles = resolve_styles(Some(&over));
//! assert_eq!(styles.link.color.as_deref(), Some("#ff00ff"));
//! assert_eq!(styles.link.text_decoration_line, None);
//! ```

mod resolver;
mod style;
mod terminal;

pub use resolver::{resolve_styles, SlotStyle, StructuredTextStyles, StyleOverride, StyleSlot};
pub use style::{FlexDirection, FontStyle, FontWeight, TextDecorationLine, TextStyle, ViewStyle};
pub use terminal::{TerminalConfig, TerminalOverride};

use dast_core::{DastError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file contents.
const DEFAULT_TOML: &str = r##"# Style slots are replaced whole. Example:
#
# [styles.link]
# color = "#ff00ff"
# textDecorationLine = "underline"

[terminal]
Width      = 0
Hyperlinks = true
ShowUrls   = false
Color      = true
BaseColor  = "#000000"
"##;

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Style slots to override
    #[serde(default)]
    pub styles: StyleOverride,

    /// Terminal backend settings
    #[serde(default)]
    pub terminal: TerminalConfig,
}

/// A configuration layered over the loaded one.
///
/// Only the style slots and terminal keys it names are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigOverride {
    #[serde(default)]
    pub styles: StyleOverride,

    #[serde(default)]
    pub terminal: TerminalOverride,
}

impl ConfigOverride {
    /// Parse an override from a TOML string.
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source)
            .map_err(|e| DastError::Config(format!("Override parse error: {}", e)))
    }

    /// Read an override file. A `.json` file is a bare style override.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        if path.extension().is_some_and(|ext| ext == "json") {
            return Ok(Self {
                styles: StyleOverride::from_json(&content)?,
                terminal: TerminalOverride::default(),
            });
        }
        toml::from_str(&content)
            .map_err(|e| DastError::Config(format!("Parse error in {}: {}", path.display(), e)))
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// ```
    /// use dast_config::Config;
    /// assert!(Config::default_toml().contains("[terminal]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "dast").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Parse a configuration from a TOML string.
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| DastError::Config(format!("Parse error: {}", e)))
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                debug!("Loading config from {}", config_path.display());
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| DastError::Config(format!("Parse error in {}: {}", path.display(), e)))
    }

    /// Load the base configuration, then merge an optional override.
    ///
    /// The override is a file path when such a file exists and an inline
    /// TOML string otherwise. A `.json` file is read as a bare style
    /// override, one object per slot.
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            let override_path = Path::new(override_str);

            let over = if override_path.is_file() {
                debug!("Applying config override {}", override_path.display());
                ConfigOverride::load_from(override_path)?
            } else {
                ConfigOverride::from_toml(override_str)?
            };

            config.merge(&over);
        }

        Ok(config)
    }

    /// Layer an override over this config.
    ///
    /// Style slots and terminal keys set in `other` replace those in `self`.
    pub fn merge(&mut self, other: &ConfigOverride) {
        self.styles.merge(&other.styles);
        self.terminal.merge(&other.terminal);
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| DastError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// The style override, or `None` when no slot is set.
    pub fn style_override(&self) -> Option<&StyleOverride> {
        (!self.styles.is_empty()).then_some(&self.styles)
    }
}
