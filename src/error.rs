//! Error types for the fallible surfaces of the crate.
//!
//! Graph and maze algorithms report "no result" through `Option` and never
//! produce a `MazeError`. Errors only come from persistence, parsing and
//! configuration.

use thiserror::Error;

/// Errors raised by persistence, parsing and configuration.
#[derive(Error, Debug)]
pub enum MazeError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed text input.
    #[error("parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// Structurally invalid maze data.
    #[error("invalid maze data: {0}")]
    InvalidData(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MazeError {
    /// Creates a parse error for `line`.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Creates an invalid data error.
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData(message.into())
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Result alias using [`MazeError`].
pub type Result<T> = std::result::Result<T, MazeError>;
