//! CLI error types

use thiserror::Error;

use crate::config::ConfigError;
use seedgen_core::GenError;

/// Errors surfaced by `seedgen` commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Generator error: {0}")]
    Generator(#[from] GenError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Uniformity check failed for {failed} of {total} ranges")]
    CheckFailed { failed: usize, total: usize },
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
