//! # Error Types
//!
//! This module defines error types used throughout the uriage library.

use thiserror::Error;

/// Main error type for uriage operations
#[derive(Debug, Error)]
pub enum UriageError {
    /// Text or payload cannot be represented in the bound encoding
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// The printer address could not be reached
    #[error("Connection to {addr} failed: {source}")]
    Connection {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The transcript could not be fully written to an open connection
    #[error("Write to {addr} failed: {source}")]
    Write {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid command or parameter
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Printer configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed receipt or config document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
