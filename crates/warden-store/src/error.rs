//! Error types for the store module.

use thiserror::Error;

/// Errors that can occur during cache-store or permission-source operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Permission-set serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The upstream permission source failed or is unreachable.
    #[error("permission source error: {0}")]
    Source(String),

    /// Migration error.
    #[error("migration error: {0}")]
    Migration(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
