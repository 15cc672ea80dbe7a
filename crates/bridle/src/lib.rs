//! # Bridle
//!
//! The settings surface of a remote-signer companion: a user-editable
//! relay list with per-endpoint read/write policy, and a read-only view
//! of the permission grants issued to remote hosts, with revocation.
//!
//! ## Overview
//!
//! Two independent managers compose under one surface:
//!
//! - [`RelayListManager`] owns the in-memory editable relay list and
//!   commits it to a persisted slot on demand. Edits are unvalidated;
//!   normalization (trim, drop blanks, dedup) happens at save time.
//! - [`PermissionViewManager`] derives a display-ready view from the
//!   external grant store and issues revocations back to it, always
//!   re-reading ground truth afterwards.
//!
//! They share a transient [`Feedback`] slot and a storage backend, but
//! no data flows between them. Destructive commands pass through a
//! [`ConfirmationGate`] first.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use bridle::{Settings, SettingsConfig, SignerCapabilities};
//! use bridle::store::SqliteStore;
//!
//! async fn example() {
//!     let store = SqliteStore::open("settings.db").unwrap();
//!     let mut settings = Settings::new(
//!         store,
//!         Arc::new(SignerCapabilities),
//!         SettingsConfig::default(),
//!     );
//!
//!     settings.load().await.unwrap();
//!
//!     settings.relays_mut().set_pending_url("wss://relay.example.com");
//!     settings.relays_mut().stage_pending();
//!     settings.relays_mut().save().await.unwrap();
//! }
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `bridle::core` - core types and the slot codec
//! - `bridle::store` - storage traits and backends

pub mod confirm;
pub mod error;
pub mod feedback;
pub mod permissions;
pub mod relays;
pub mod settings;

// Re-export component crates
pub use bridle_core as core;
pub use bridle_store as store;

// Re-export main types for convenience
pub use confirm::{AutoConfirm, ConfirmationGate, DenyAll};
pub use error::{Result, SettingsError};
pub use feedback::Feedback;
pub use permissions::{GrantRow, PermissionViewManager};
pub use relays::RelayListManager;
pub use settings::{Settings, SettingsConfig};

// Re-export commonly used core types
pub use bridle_core::{
    LevelFormatter, PermissionGrant, PermissionLevel, PolicyField, RelayEntry, RelayPolicy,
    SignerCapabilities,
};
