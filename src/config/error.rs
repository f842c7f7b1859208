//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Delimiter must be a single ASCII character, got {0:?}")]
    InvalidDelimiter(String),

    #[error("Token separator must be a single character, got {0:?}")]
    InvalidTokenSeparator(String),

    #[error("Output column name cannot be empty")]
    EmptyColumnName,

    #[error("Score and rank columns must have different names")]
    DuplicateColumnName,

    #[error("Score precision exceeds maximum allowed (17)")]
    PrecisionTooLarge,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),
}
