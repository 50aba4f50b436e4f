//! Error types for dast

use thiserror::Error;

/// Main error type for dast operations
#[derive(Error, Debug)]
pub enum DastError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Document or style JSON could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The external URL opener failed
    #[error("Failed to open URL {url}: {reason}")]
    UrlOpen {
        /// URL that was being opened
        url: String,
        /// Why the opener gave up
        reason: String,
    },
}

/// Result type alias for dast operations
pub type Result<T> = std::result::Result<T, DastError>;
