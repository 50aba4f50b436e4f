//! Command-line interface for dast.

use clap::{Parser, ValueEnum};
use crossterm::tty::IsTty;
use std::path::PathBuf;

use dast_ansi::DEFAULT_WIDTH;

/// Dast - render DatoCMS Structured Text documents in the terminal.
///
/// Reads a DAST JSON document and prints it as styled terminal text,
/// plain text, or the rendered presentation tree.
#[derive(Parser, Debug)]
#[command(
    name = "dast",
    author = "Dast Contributors",
    version,
    about = "Render DatoCMS Structured Text documents",
    after_help = "Examples:\n  \
                  dast document.json\n  \
                  curl -s $API | jq .content.value | dast\n  \
                  dast -w 60 --format plain document.json\n  \
                  dast -c '[styles.link]\ncolor = \"#ff00ff\"' document.json"
)]
pub struct Cli {
    /// DAST JSON document to render (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file, JSON style override, or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Set the output width (0 = use the config, then the terminal)
    #[arg(short = 'w', long = "width", default_value = "0")]
    pub width: u16,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = Format::Ansi)]
    pub format: Format,

    /// Disable colours and hyperlinks
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Print link targets after link text
    #[arg(long = "show-urls")]
    pub show_urls: bool,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

/// How the rendered document is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Styled terminal text
    Ansi,
    /// Text without escape sequences
    Plain,
    /// The presentation tree as JSON
    Json,
}

impl Cli {
    /// Terminal width, or [`DEFAULT_WIDTH`] when stdout is not a terminal.
    pub fn detected_width(&self) -> usize {
        if !std::io::stdout().is_tty() {
            return DEFAULT_WIDTH;
        }
        crossterm::terminal::size()
            .map(|(cols, _)| cols as usize)
            .unwrap_or(DEFAULT_WIDTH)
    }
}

/// Show paths information.
pub fn show_paths() {
    use dast_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}
