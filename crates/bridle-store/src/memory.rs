//! In-memory implementation of the store traits.
//!
//! This is primarily for testing. It has the same semantics as SQLite
//! but keeps everything in memory with no persistence. It keeps at most
//! one grant row per host, so `remove_grants` reports 0 or 1.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use async_trait::async_trait;

use bridle_core::PermissionGrant;

use crate::error::Result;
use crate::traits::{GrantStore, SettingsStore};

/// In-memory store implementation.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock.
pub struct MemoryStore {
    inner: RwLock<MemoryStoreInner>,
}

struct MemoryStoreInner {
    /// Slot values by key.
    slots: HashMap<String, serde_json::Value>,

    /// Grants by host.
    grants: BTreeMap<String, PermissionGrant>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemoryStoreInner {
                slots: HashMap::new(),
                grants: BTreeMap::new(),
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SettingsStore for MemoryStore {
    async fn get_slot(&self, key: &str) -> Result<Option<serde_json::Value>> {
        let inner = self.inner.read().unwrap();
        Ok(inner.slots.get(key).cloned())
    }

    async fn put_slot(&self, key: &str, value: serde_json::Value) -> Result<()> {
        let mut inner = self.inner.write().unwrap();
        inner.slots.insert(key.to_string(), value);
        Ok(())
    }
}

#[async_trait]
impl GrantStore for MemoryStore {
    async fn list_grants(&self) -> Result<BTreeMap<String, PermissionGrant>> {
        let inner = self.inner.read().unwrap();
        Ok(inner.grants.clone())
    }

    async fn put_grant(&self, host: &str, grant: PermissionGrant) -> Result<()> {
        let mut inner = self.inner.write().unwrap();
        inner.grants.insert(host.to_string(), grant);
        Ok(())
    }

    async fn remove_grants(&self, host: &str) -> Result<u64> {
        let mut inner = self.inner.write().unwrap();
        Ok(if inner.grants.remove(host).is_some() {
            1
        } else {
            0
        })
    }
}
