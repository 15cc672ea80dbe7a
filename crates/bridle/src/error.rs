//! Error types for the settings surface.

use bridle_core::CoreError;
use bridle_store::StoreError;
use thiserror::Error;

/// Errors that can occur during settings operations.
///
/// There is deliberately no "last error" state anywhere in the surface:
/// failures propagate to whatever orchestrates the UI.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Core error (slot codec, normalization).
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Storage error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;
