//! # Bridle Store
//!
//! Storage abstraction for the bridle settings surface. Provides
//! trait-based interfaces for the persisted relay slot and the
//! permission-grant collection, with SQLite and in-memory
//! implementations.
//!
//! ## Overview
//!
//! The settings surface talks to two collaborators: a key/value slot
//! store holding the relay configuration under a named slot, and the
//! grant store that owns permission grants. Both are modeled as async
//! traits so the managers stay backend-agnostic. The primary
//! implementation is [`SqliteStore`], with [`MemoryStore`] for testing.
//!
//! ## Key Types
//!
//! - [`SettingsStore`] - persisted key/value slots
//! - [`GrantStore`] - read/list and remove-by-host over grants
//! - [`SqliteStore`] - SQLite-based persistent storage
//! - [`MemoryStore`] - in-memory storage for tests
//!
//! ## Design Notes
//!
//! - **Absent slot is empty**: reading a never-written slot yields
//!   `None`, not an error.
//! - **Whole-value writes**: `put_slot` replaces the slot document; no
//!   partial merge.
//! - **Grants may repeat per host**: the SQLite backend keeps every
//!   grant row; listing surfaces the newest per host and removal
//!   deletes them all.

pub mod error;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::{GrantStore, SettingsStore};
