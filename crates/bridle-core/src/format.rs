//! Human-readable rendering of permission levels.

use crate::types::PermissionLevel;

/// Renders an opaque permission level as a human-readable string.
///
/// The settings core treats the formatter as a black box: it never
/// inspects level values itself, it only forwards them here when
/// building display rows.
pub trait LevelFormatter: Send + Sync {
    /// Describe everything a grant at `level` allows.
    fn format(&self, level: PermissionLevel) -> String;
}

/// The stock capability table of the remote signer.
///
/// A level includes every capability at or below it; the description is
/// the comma-joined list of those capabilities.
pub struct SignerCapabilities;

/// Capability thresholds, lowest first.
const CAPABILITIES: &[(u8, &str)] = &[
    (1, "read your public key"),
    (5, "read your list of preferred relays"),
    (10, "sign events using your private key"),
    (20, "encrypt and decrypt messages"),
];

impl LevelFormatter for SignerCapabilities {
    fn format(&self, level: PermissionLevel) -> String {
        let granted: Vec<&str> = CAPABILITIES
            .iter()
            .filter(|(threshold, _)| level.value() >= *threshold)
            .map(|(_, description)| *description)
            .collect();

        if granted.is_empty() {
            "nothing".to_string()
        } else {
            granted.join(", ")
        }
    }
}
