//! Store traits: the abstract interfaces for settings persistence.
//!
//! Two collaborators back the settings surface: a key/value slot store
//! for the relay configuration, and the grant store that owns permission
//! grants. Both are async to support SQLite (via `spawn_blocking`) and
//! any future async backend behind the same seam.

use std::collections::BTreeMap;

use async_trait::async_trait;
use bridle_core::PermissionGrant;

use crate::error::Result;

/// Persisted key/value slots.
///
/// A slot holds one JSON document under a stable key and survives
/// process restarts. Writes replace the whole slot value; there is no
/// partial merge.
///
/// # Design Notes
///
/// - **Absent is empty**: a missing slot reads as `None`, never an error.
/// - **All-or-nothing writes**: `put_slot` either fully replaces the
///   value or fails; callers see the failure and decide what to surface.
/// - **Last writer wins**: concurrent surfaces sharing one backend get
///   no optimistic-concurrency detection.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Read a slot's current value, `None` if the slot was never written.
    async fn get_slot(&self, key: &str) -> Result<Option<serde_json::Value>>;

    /// Replace a slot's value wholesale.
    async fn put_slot(&self, key: &str, value: serde_json::Value) -> Result<()>;
}

/// The permission-grant collection.
///
/// Grants are created by the surrounding signer when a host is first
/// authorized; the settings surface only reads them and issues
/// revocations. A backend may keep several grant rows per host;
/// [`list_grants`](GrantStore::list_grants) surfaces one record per host
/// and [`remove_grants`](GrantStore::remove_grants) removes every row.
#[async_trait]
pub trait GrantStore: Send + Sync {
    /// Read the full grant collection, keyed by host.
    ///
    /// Iteration order of the returned map (sorted by host) is the only
    /// enumeration-order guarantee this trait makes.
    async fn list_grants(&self) -> Result<BTreeMap<String, PermissionGrant>>;

    /// Record a grant for a host.
    async fn put_grant(&self, host: &str, grant: PermissionGrant) -> Result<()>;

    /// Remove all grants for a host. Returns the number of removed rows
    /// and returns only after the removal has completed or failed.
    async fn remove_grants(&self, host: &str) -> Result<u64>;
}
