//! Strong type definitions for the settings surface.
//!
//! Relay entries are the user-editable half of the surface; permission
//! grants are the read-only half, owned by an external grant store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Read/write policy attached to a single relay endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayPolicy {
    /// Whether events may be fetched from this relay.
    pub read: bool,

    /// Whether events may be published to this relay.
    pub write: bool,
}

impl Default for RelayPolicy {
    /// A freshly staged relay starts fully enabled.
    fn default() -> Self {
        Self {
            read: true,
            write: true,
        }
    }
}

/// Which half of a [`RelayPolicy`] a toggle targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyField {
    Read,
    Write,
}

/// One entry in the editable relay list.
///
/// While the list is being edited, `url` is not guaranteed to be valid,
/// trimmed, or unique. Those invariants are enforced only when the list
/// is persisted (see [`crate::slot::normalize_relays`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayEntry {
    /// User-supplied endpoint URL, e.g. `wss://relay.example.com`.
    pub url: String,

    /// Read/write policy for this endpoint.
    pub policy: RelayPolicy,
}

impl RelayEntry {
    /// Create an entry with the default policy.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            policy: RelayPolicy::default(),
        }
    }

    /// Create an entry with an explicit policy.
    pub fn with_policy(url: impl Into<String>, policy: RelayPolicy) -> Self {
        Self {
            url: url.into(),
            policy,
        }
    }
}

/// Opaque permission level granted to a host.
///
/// The numeric value orders capabilities (a higher level implies every
/// capability of a lower one) but the core never interprets it beyond
/// ordering; rendering goes through a [`crate::format::LevelFormatter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionLevel(pub u8);

impl PermissionLevel {
    /// Create a level from its raw value.
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Get the raw value.
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A permission grant issued to a remote host.
///
/// Read model only: grants are created and destroyed by the grant store,
/// never mutated by the settings core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionGrant {
    /// What the host is allowed to request.
    pub level: PermissionLevel,

    /// Descriptive scope of the grant, e.g. session-limited.
    pub condition: String,

    /// When the grant was issued (seconds since epoch).
    pub created_at: i64,
}

impl PermissionGrant {
    /// Create a grant record.
    pub fn new(level: PermissionLevel, condition: impl Into<String>, created_at: i64) -> Self {
        Self {
            level,
            condition: condition.into(),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_fully_enabled() {
        let policy = RelayPolicy::default();
        assert!(policy.read);
        assert!(policy.write);
    }

    #[test]
    fn test_relay_entry_serde_shape() {
        let entry = RelayEntry::with_policy(
            "wss://a",
            RelayPolicy {
                read: true,
                write: false,
            },
        );
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"url": "wss://a", "policy": {"read": true, "write": false}})
        );
    }

    #[test]
    fn test_permission_level_is_transparent() {
        let level = PermissionLevel::new(10);
        assert_eq!(serde_json::to_value(level).unwrap(), serde_json::json!(10));
        assert_eq!(level.to_string(), "10");
    }

    #[test]
    fn test_permission_level_ordering() {
        assert!(PermissionLevel::new(5) < PermissionLevel::new(10));
    }
}
