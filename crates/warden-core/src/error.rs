//! Error types for the core primitives.

use thiserror::Error;

/// Errors that can occur while deriving a required permission.
///
/// These are hard input errors: the caller handed us something malformed,
/// not something deniable.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Descriptor is not in "namespace.kind" form.
    #[error("descriptor must be in 'namespace.kind' form, got: {0}")]
    InvalidDescriptor(String),

    /// Method token or action verb not in the permission map.
    #[error("action not in permission map: {0}")]
    UnsupportedAction(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
