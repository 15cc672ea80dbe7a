//! The editable relay list and its persistence.

use std::sync::Arc;

use bridle_core::{decode_relays, encode_relays, normalize_relays, PolicyField, RelayEntry};
use bridle_store::SettingsStore;

use crate::error::Result;
use crate::feedback::Feedback;

/// Owns the in-memory editable relay list and commits it on demand.
///
/// Edits accumulate in memory without validation; the list only gains
/// its invariants (trimmed, non-blank, unique URLs) when [`save`]
/// writes it to the persisted slot. Every mutation replaces the list
/// with a freshly built one, so a reader holding a snapshot never
/// observes a half-applied edit.
///
/// [`save`]: RelayListManager::save
pub struct RelayListManager<S: SettingsStore> {
    store: Arc<S>,
    slot: String,
    entries: Vec<RelayEntry>,
    pending_url: String,
    feedback: Feedback,
}

impl<S: SettingsStore> RelayListManager<S> {
    /// Create a manager over the given slot.
    pub fn new(store: Arc<S>, slot: impl Into<String>, feedback: Feedback) -> Self {
        Self {
            store,
            slot: slot.into(),
            entries: Vec::new(),
            pending_url: String::new(),
            feedback,
        }
    }

    /// The current in-memory list, in edit order.
    pub fn entries(&self) -> &[RelayEntry] {
        &self.entries
    }

    /// The scratch URL being typed for a new relay.
    pub fn pending_url(&self) -> &str {
        &self.pending_url
    }

    /// Replace the scratch URL.
    pub fn set_pending_url(&mut self, text: impl Into<String>) {
        self.pending_url = text.into();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Edit Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace the URL at `index`, leaving its policy unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds; passing an invalid index is a
    /// programmer error, not a recoverable user-facing condition.
    pub fn set_url(&mut self, index: usize, url: impl Into<String>) {
        assert!(
            index < self.entries.len(),
            "relay index {} out of bounds (len {})",
            index,
            self.entries.len()
        );

        let url = url.into();
        self.entries = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                if i == index {
                    RelayEntry::with_policy(url.clone(), entry.policy)
                } else {
                    entry.clone()
                }
            })
            .collect();
    }

    /// Flip one half of the policy at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds, as with [`set_url`](Self::set_url).
    pub fn toggle_policy(&mut self, index: usize, field: PolicyField) {
        assert!(
            index < self.entries.len(),
            "relay index {} out of bounds (len {})",
            index,
            self.entries.len()
        );

        self.entries = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let mut entry = entry.clone();
                if i == index {
                    match field {
                        PolicyField::Read => entry.policy.read = !entry.policy.read,
                        PolicyField::Write => entry.policy.write = !entry.policy.write,
                    }
                }
                entry
            })
            .collect();
    }

    /// Append a new entry built from the scratch URL, then clear the
    /// scratch.
    ///
    /// The new entry gets the default fully-enabled policy. No
    /// validation happens here: the user may still be typing, and
    /// invalid or empty URLs are filtered at save time instead.
    pub fn stage_pending(&mut self) {
        let url = std::mem::take(&mut self.pending_url);
        self.entries = self
            .entries
            .iter()
            .cloned()
            .chain(std::iter::once(RelayEntry::new(url)))
            .collect();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Persistence
    // ─────────────────────────────────────────────────────────────────────────

    /// Load the persisted relay list, replacing the in-memory list
    /// wholesale.
    ///
    /// An absent slot yields an empty list; a malformed slot value is an
    /// error.
    pub async fn load(&mut self) -> Result<()> {
        self.entries = match self.store.get_slot(&self.slot).await? {
            None => Vec::new(),
            Some(value) => decode_relays(&value)?,
        };
        Ok(())
    }

    /// Normalize and commit the list as a single slot write.
    ///
    /// Blank entries are dropped and URLs trimmed (see
    /// [`normalize_relays`]); the write replaces the slot value
    /// atomically. On success a confirmation message is emitted; a
    /// storage failure propagates without feedback and without retry.
    /// The in-memory list keeps its un-normalized edit state either way.
    pub async fn save(&mut self) -> Result<()> {
        let normalized = normalize_relays(&self.entries);
        let document = encode_relays(&normalized)?;
        self.store.put_slot(&self.slot, document).await?;

        tracing::debug!(slot = %self.slot, count = normalized.len(), "relay list saved");
        self.feedback.set("saved relays!");
        Ok(())
    }
}
