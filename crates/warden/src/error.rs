//! Error types for the decision engine.
//!
//! None of these cross the engine's public boundary: every variant is caught
//! inside the decision methods and converted to a deny.

use thiserror::Error;
use warden_core::CoreError;
use warden_store::StoreError;

/// Errors that can occur while evaluating a decision.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Derivation error (malformed descriptor or unknown action).
    #[error("derivation error: {0}")]
    Derive(#[from] CoreError),

    /// Cache store or permission source error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The caller supplied no resource descriptor.
    ///
    /// Caller misconfiguration, logged at warning severity rather than
    /// error.
    #[error("no resource descriptor bound to the request")]
    MissingBinding,
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
