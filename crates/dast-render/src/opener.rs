//! Opening URLs outside the process.
//!
//! Used when a link is activated and the caller installed no link
//! handler. Opening never happens on the render path.

use std::process::Command;

use dast_core::{DastError, Result};

/// Hands a URL to something that can display it.
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}

/// Opens URLs with the platform's default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemUrlOpener;

impl SystemUrlOpener {
    #[cfg(target_os = "windows")]
    fn command(url: &str) -> Option<Command> {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", url]);
        Some(cmd)
    }

    #[cfg(target_os = "macos")]
    fn command(url: &str) -> Option<Command> {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        Some(cmd)
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    fn command(url: &str) -> Option<Command> {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        Some(cmd)
    }

    #[cfg(not(any(unix, target_os = "windows")))]
    fn command(_url: &str) -> Option<Command> {
        None
    }
}

impl UrlOpener for SystemUrlOpener {
    fn open(&self, url: &str) -> Result<()> {
        let mut cmd = Self::command(url).ok_or_else(|| DastError::UrlOpen {
            url: url.to_string(),
            reason: "no URL opener for this platform".to_string(),
        })?;

        let status = cmd.status().map_err(|e| DastError::UrlOpen {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(DastError::UrlOpen {
                url: url.to_string(),
                reason: status.to_string(),
            })
        }
    }
}

impl<F> UrlOpener for F
where
    F: Fn(&str) -> Result<()> + Send + Sync,
{
    fn open(&self, url: &str) -> Result<()> {
        self(url)
    }
}
