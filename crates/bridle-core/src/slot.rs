//! Persisted form of the relay list.
//!
//! The relay collection lives in a single named storage slot. The slot
//! value is a JSON document in one of two shapes:
//!
//! - **Ordered** (current): an array of `{url, policy}` records. List
//!   order is explicit, so a load reproduces the order of the last save.
//! - **Legacy**: a bare `url -> policy` object, as older installs wrote
//!   it. Object keys carry no order, so legacy entries load in
//!   lexicographic URL order.
//!
//! Normalization happens at save time, not while editing: blank URLs are
//! dropped, surviving URLs are trimmed, and duplicates collapse.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::error::{CoreError, Result};
use crate::types::{RelayEntry, RelayPolicy};

/// The two accepted slot encodings.
#[derive(Deserialize)]
#[serde(untagged)]
enum SlotDocument {
    Ordered(Vec<RelayEntry>),
    Legacy(BTreeMap<String, RelayPolicy>),
}

/// Normalize an edit-order relay list into its persisted form.
///
/// - Entries whose trimmed URL is empty are dropped (not an error).
/// - Surviving URLs are trimmed.
/// - Duplicate trimmed URLs collapse: the first occurrence fixes the
///   position, the last occurrence fixes the policy. This matches map
///   insertion semantics, where re-assigning a key overwrites the value
///   without moving the key.
pub fn normalize_relays(entries: &[RelayEntry]) -> Vec<RelayEntry> {
    let mut order: Vec<&str> = Vec::new();
    let mut policies: HashMap<&str, RelayPolicy> = HashMap::new();

    for entry in entries {
        let url = entry.url.trim();
        if url.is_empty() {
            continue;
        }
        if !policies.contains_key(url) {
            order.push(url);
        }
        policies.insert(url, entry.policy);
    }

    order
        .into_iter()
        .map(|url| RelayEntry::with_policy(url, policies[url]))
        .collect()
}

/// Encode a normalized relay list as the slot's JSON document.
///
/// Always writes the ordered array form. Callers are expected to run
/// [`normalize_relays`] first; encoding does not normalize.
pub fn encode_relays(entries: &[RelayEntry]) -> Result<serde_json::Value> {
    serde_json::to_value(entries).map_err(|e| CoreError::Serialization(e.to_string()))
}

/// Decode a slot's JSON document into an ordered relay list.
///
/// Accepts both the ordered array form and the legacy mapping form.
/// Anything else is an [`CoreError::InvalidSlot`].
pub fn decode_relays(value: &serde_json::Value) -> Result<Vec<RelayEntry>> {
    let document: SlotDocument = serde_json::from_value(value.clone())
        .map_err(|e| CoreError::InvalidSlot(e.to_string()))?;

    Ok(match document {
        SlotDocument::Ordered(entries) => entries,
        SlotDocument::Legacy(mapping) => mapping
            .into_iter()
            .map(|(url, policy)| RelayEntry::with_policy(url, policy))
            .collect(),
    })
}
