//! Runeseed CLI — error types.

use thiserror::Error;

/// Startup and runtime errors for the CLI.
#[derive(Debug, Error)]
pub enum AppError {
    /// A configuration environment variable is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Reading or writing the store file or output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The seed store file is not valid JSON of the expected shape.
    #[error("seed store format error: {0}")]
    Serialization(#[from] serde_json::Error),
}
