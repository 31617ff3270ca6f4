//! Error types for foresight-core

use thiserror::Error;

/// Error type for ledger and configuration operations
#[derive(Debug, Error)]
pub enum ForesightError {
    /// Ledger store could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration file could not be parsed
    #[error("Config error: {0}")]
    Config(String),

    /// Record not found
    #[error("Record not found: {0}")]
    NotFound(String),

    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for foresight operations
pub type Result<T> = std::result::Result<T, ForesightError>;
