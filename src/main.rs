//! Dast - render DatoCMS Structured Text documents in the terminal.
//!
//! This binary reads one DAST JSON document from a file or stdin and
//! prints it through the terminal backend.

mod cli;

use clap::Parser as ClapParser;
use cli::{Cli, Format};
use log::{debug, error, info, LevelFilter};
use std::io::{self, Read, Write};

use dast_ansi::{visible, TerminalRenderer};
use dast_config::{Config, TextStyle};
use dast_core::{DastError, Result};
use dast_render::{Element, Inline, Role, StructuredText};

fn main() {
    let cli = <Cli as ClapParser>::parse();

    if cli.show_paths {
        cli::show_paths();
        return;
    }

    setup_logging(&cli.log_level);
    info!("Dast v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("{}", e);
        eprintln!("dast: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::load_with_override(cli.config.as_deref())?;
    debug!("Loaded config: {:?}", config);

    let input = read_input(cli)?;
    let renderer = structured_text(&config);

    let output = renderer.render_json(&input)?;
    let Some(tree) = output.tree else {
        return Ok(());
    };

    let text = match cli.format {
        Format::Json => serde_json::to_string_pretty(&tree)?,
        Format::Ansi => terminal(cli, &config).render(&tree),
        Format::Plain => visible(&terminal(cli, &config).with_color(false).render(&tree)),
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", text)?;
    stdout.flush()?;
    Ok(())
}

/// Read the whole document from the file argument or stdin.
fn read_input(cli: &Cli) -> Result<String> {
    match &cli.file {
        Some(path) => {
            info!("Reading {}", path.display());
            std::fs::read_to_string(path).map_err(DastError::from)
        }
        None => {
            info!("Reading from stdin");
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

/// A renderer showing embedded records as placeholders.
fn structured_text(config: &Config) -> StructuredText {
    let mut renderer = StructuredText::new()
        .with_inline_item_renderer(|id: &str| {
            vec![Inline::run(format!("[inline item {}]", id), TextStyle::default())]
        })
        .with_block_renderer(|id: &str| {
            Some(Element::text(
                Role::Embedded {
                    item: id.to_string(),
                },
                TextStyle::default(),
                format!("[block {}]", id),
            ))
        });

    if let Some(styles) = config.style_override() {
        renderer = renderer.with_styles(styles.clone());
    }
    renderer
}

/// Terminal backend for the `[terminal]` settings and command-line flags.
fn terminal(cli: &Cli, config: &Config) -> TerminalRenderer {
    let mut settings = config.terminal.clone();
    if cli.width > 0 {
        settings.width = cli.width as usize;
    }
    if cli.no_color {
        settings.color = false;
        settings.hyperlinks = false;
    }
    if cli.show_urls {
        settings.show_urls = true;
    }
    TerminalRenderer::from_config(&settings, cli.detected_width())
}
