//! Error types for the response validator
//!
//! These cover configuration, file loading and CLI input only. Validation
//! findings are never errors; they are appended to a
//! [`ValidationOutcome`](crate::validator::ValidationOutcome).

use std::io;

use thiserror::Error;

/// Result type alias for the response validator
pub type Result<T> = std::result::Result<T, Error>;

/// Response validator errors
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unknown expectation preset
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    /// Malformed caller input (response, error or expectation file)
    #[error("Invalid input: {0}")]
    Input(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

