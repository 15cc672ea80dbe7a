//! Error types for the core module.

use thiserror::Error;

/// Errors that can occur in core settings logic.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The persisted slot value does not match any accepted encoding.
    #[error("invalid slot value: {0}")]
    InvalidSlot(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
