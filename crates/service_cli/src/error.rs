//! CLI error types.

use market_engine::GenerationError;
use thiserror::Error;

/// Errors surfaced by the `market_gen` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidFormat(String),

    #[error("Invalid seed: {0}. Must be an unsigned 64-bit integer")]
    InvalidSeed(String),

    #[error(transparent)]
    Market(#[from] market_core::types::ConfigError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
