//! SQLite implementation of the store traits.
//!
//! This is the primary persistent backend. It uses rusqlite with bundled
//! SQLite, wrapped in async via `tokio::task::spawn_blocking`.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};

use bridle_core::{PermissionGrant, PermissionLevel};

use crate::error::{Result, StoreError};
use crate::migration;
use crate::traits::{GrantStore, SettingsStore};

/// SQLite-based store implementation.
///
/// Thread-safe via internal Mutex. All operations use spawn_blocking
/// to avoid blocking the async runtime.
pub struct SqliteStore {
    /// The SQLite connection, protected by a mutex.
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open a SQLite database at the given path.
    ///
    /// Creates the file and runs migrations if it doesn't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut conn = Connection::open(path)?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an in-memory SQLite database.
    ///
    /// Useful for testing.
    pub fn open_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

/// Lock the connection, mapping a poisoned mutex to a store error.
fn lock_conn(conn: &Arc<Mutex<Connection>>) -> Result<MutexGuard<'_, Connection>> {
    conn.lock()
        .map_err(|e| StoreError::Backend(format!("connection mutex poisoned: {}", e)))
}

/// Map a spawn_blocking join failure to a store error.
fn join_error(e: tokio::task::JoinError) -> StoreError {
    StoreError::Backend(format!("spawn_blocking failed: {}", e))
}

/// Get current time in milliseconds.
fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_millis() as i64
}

#[async_trait]
impl SettingsStore for SqliteStore {
    async fn get_slot(&self, key: &str) -> Result<Option<serde_json::Value>> {
        let key = key.to_string();
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = lock_conn(&conn)?;

            let raw: Option<String> = conn
                .query_row(
                    "SELECT value FROM slots WHERE key = ?1",
                    params![key],
                    |row| row.get(0),
                )
                .optional()?;

            match raw {
                None => Ok(None),
                Some(text) => serde_json::from_str(&text)
                    .map(Some)
                    .map_err(|e| StoreError::Serialization(e.to_string())),
            }
        })
        .await
        .map_err(join_error)?
    }

    async fn put_slot(&self, key: &str, value: serde_json::Value) -> Result<()> {
        let key = key.to_string();
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = lock_conn(&conn)?;

            let text = serde_json::to_string(&value)
                .map_err(|e| StoreError::Serialization(e.to_string()))?;

            conn.execute(
                "INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at",
                params![key, text, now_millis()],
            )?;

            Ok(())
        })
        .await
        .map_err(join_error)?
    }
}

#[async_trait]
impl GrantStore for SqliteStore {
    async fn list_grants(&self) -> Result<BTreeMap<String, PermissionGrant>> {
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = lock_conn(&conn)?;

            // Bare-column MAX semantics: the non-aggregate columns come
            // from the newest row per host.
            let mut stmt = conn.prepare(
                "SELECT host, level, condition, MAX(created_at)
                 FROM grants GROUP BY host",
            )?;

            let grants: BTreeMap<String, PermissionGrant> = stmt
                .query_map([], |row| {
                    let host: String = row.get(0)?;
                    let level: u8 = row.get(1)?;
                    let condition: String = row.get(2)?;
                    let created_at: i64 = row.get(3)?;

                    Ok((
                        host,
                        PermissionGrant::new(PermissionLevel::new(level), condition, created_at),
                    ))
                })?
                .collect::<rusqlite::Result<BTreeMap<_, _>>>()?;

            Ok(grants)
        })
        .await
        .map_err(join_error)?
    }

    async fn put_grant(&self, host: &str, grant: PermissionGrant) -> Result<()> {
        let host = host.to_string();
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = lock_conn(&conn)?;

            conn.execute(
                "INSERT INTO grants (host, level, condition, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    host,
                    grant.level.value(),
                    grant.condition,
                    grant.created_at
                ],
            )?;

            Ok(())
        })
        .await
        .map_err(join_error)?
    }

    async fn remove_grants(&self, host: &str) -> Result<u64> {
        let host = host.to_string();
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = lock_conn(&conn)?;

            let removed = conn.execute("DELETE FROM grants WHERE host = ?1", params![host])?;

            Ok(removed as u64)
        })
        .await
        .map_err(join_error)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grant(level: u8, condition: &str, created_at: i64) -> PermissionGrant {
        PermissionGrant::new(PermissionLevel::new(level), condition, created_at)
    }

    #[tokio::test]
    async fn test_slot_roundtrip() {
        let store = SqliteStore::open_memory().unwrap();

        assert!(store.get_slot("relays").await.unwrap().is_none());

        let value =
            serde_json::json!([{"url": "wss://a", "policy": {"read": true, "write": false}}]);
        store.put_slot("relays", value.clone()).await.unwrap();

        assert_eq!(store.get_slot("relays").await.unwrap(), Some(value));
    }

    #[tokio::test]
    async fn test_put_slot_overwrites() {
        let store = SqliteStore::open_memory().unwrap();

        store
            .put_slot("relays", serde_json::json!({"wss://a": {"read": true, "write": true}}))
            .await
            .unwrap();
        store.put_slot("relays", serde_json::json!([])).await.unwrap();

        assert_eq!(
            store.get_slot("relays").await.unwrap(),
            Some(serde_json::json!([]))
        );
    }

    #[tokio::test]
    async fn test_grant_roundtrip() {
        let store = SqliteStore::open_memory().unwrap();

        store
            .put_grant("example.com", grant(10, "forever", 1_700_000_000))
            .await
            .unwrap();

        let grants = store.list_grants().await.unwrap();
        assert_eq!(grants.len(), 1);
        assert_eq!(grants["example.com"], grant(10, "forever", 1_700_000_000));
    }

    #[tokio::test]
    async fn test_list_surfaces_newest_row_per_host() {
        let store = SqliteStore::open_memory().unwrap();

        store
            .put_grant("example.com", grant(1, "single", 100))
            .await
            .unwrap();
        store
            .put_grant("example.com", grant(10, "forever", 200))
            .await
            .unwrap();

        let grants = store.list_grants().await.unwrap();
        assert_eq!(grants.len(), 1);
        assert_eq!(grants["example.com"], grant(10, "forever", 200));
    }

    #[tokio::test]
    async fn test_remove_grants_deletes_every_row() {
        let store = SqliteStore::open_memory().unwrap();

        store
            .put_grant("example.com", grant(1, "single", 100))
            .await
            .unwrap();
        store
            .put_grant("example.com", grant(10, "forever", 200))
            .await
            .unwrap();
        store
            .put_grant("other.com", grant(5, "forever", 300))
            .await
            .unwrap();

        assert_eq!(store.remove_grants("example.com").await.unwrap(), 2);

        let grants = store.list_grants().await.unwrap();
        assert_eq!(grants.len(), 1);
        assert!(grants.contains_key("other.com"));
    }

    #[tokio::test]
    async fn test_remove_grants_missing_host_is_zero() {
        let store = SqliteStore::open_memory().unwrap();
        assert_eq!(store.remove_grants("nowhere.com").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_open_on_disk_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.db");

        {
            let store = SqliteStore::open(&path).unwrap();
            store
                .put_slot("relays", serde_json::json!([]))
                .await
                .unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(
            store.get_slot("relays").await.unwrap(),
            Some(serde_json::json!([]))
        );
    }
}
