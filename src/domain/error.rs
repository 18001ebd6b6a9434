//! Domain error types

use thiserror::Error;

/// Error when a notification request fails validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("message must not be empty")]
    EmptyMessage,
}

/// Error when an invalid severity level name is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid level: \"{input}\". Valid levels are: info, warning, error")]
pub struct LevelParseError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
