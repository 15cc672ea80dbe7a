//! # Bridle Core
//!
//! Core types and pure logic for the bridle settings surface: relay
//! policies, permission grants, and the persisted form of the relay list.
//!
//! ## Overview
//!
//! The settings surface maintains two collections. The relay list is
//! user-editable and only gains its invariants (trimmed, non-blank,
//! unique URLs) when it is persisted; that normalization lives here in
//! [`slot`], next to the slot codec. Permission grants are a read model
//! owned by an external grant store; this crate defines their shape and
//! the [`LevelFormatter`] seam used to render levels for display.
//!
//! ## Key Types
//!
//! - [`RelayEntry`] / [`RelayPolicy`] - one row of the editable relay list
//! - [`PermissionGrant`] / [`PermissionLevel`] - the grant read model
//! - [`LevelFormatter`] - black-box rendering of permission levels
//! - [`slot::normalize_relays`] - save-time normalization
//! - [`slot::encode_relays`] / [`slot::decode_relays`] - the slot codec
//!
//! This crate does no I/O; storage backends live in `bridle-store`.

pub mod error;
pub mod format;
pub mod slot;
pub mod types;

pub use error::{CoreError, Result};
pub use format::{LevelFormatter, SignerCapabilities};
pub use slot::{decode_relays, encode_relays, normalize_relays};
pub use types::{PermissionGrant, PermissionLevel, PolicyField, RelayEntry, RelayPolicy};
