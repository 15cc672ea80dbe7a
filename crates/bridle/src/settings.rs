//! The unified settings surface.
//!
//! Brings the relay list and the permission view together over one
//! shared store and one shared feedback slot, the way the options page
//! of the signer consumes them.

use std::sync::Arc;
use std::time::Duration;

use bridle_core::LevelFormatter;
use bridle_store::{GrantStore, SettingsStore};

use crate::error::Result;
use crate::feedback::{Feedback, DEFAULT_TTL};
use crate::permissions::PermissionViewManager;
use crate::relays::RelayListManager;

/// Configuration for the settings surface.
#[derive(Debug, Clone)]
pub struct SettingsConfig {
    /// Name of the persisted slot holding the relay list.
    pub relays_slot: String,

    /// How long a feedback message stays visible.
    pub feedback_ttl: Duration,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            relays_slot: "relays".to_string(),
            feedback_ttl: DEFAULT_TTL,
        }
    }
}

/// The main settings surface.
///
/// Owns both sub-managers. They share the store and the feedback slot
/// but exchange no data with each other.
pub struct Settings<S: SettingsStore + GrantStore> {
    relays: RelayListManager<S>,
    permissions: PermissionViewManager<S>,
    feedback: Feedback,
}

impl<S: SettingsStore + GrantStore> Settings<S> {
    /// Create the surface over one backend.
    pub fn new(store: S, formatter: Arc<dyn LevelFormatter>, config: SettingsConfig) -> Self {
        let store = Arc::new(store);
        let feedback = Feedback::new(config.feedback_ttl);

        Self {
            relays: RelayListManager::new(
                Arc::clone(&store),
                config.relays_slot,
                feedback.clone(),
            ),
            permissions: PermissionViewManager::new(store, formatter, feedback.clone()),
            feedback,
        }
    }

    /// Load both collections from their backends.
    pub async fn load(&mut self) -> Result<()> {
        self.relays.load().await?;
        self.permissions.load_view().await?;
        Ok(())
    }

    /// The relay list half of the surface.
    pub fn relays(&self) -> &RelayListManager<S> {
        &self.relays
    }

    /// Mutable access to the relay list half.
    pub fn relays_mut(&mut self) -> &mut RelayListManager<S> {
        &mut self.relays
    }

    /// The permission view half of the surface.
    pub fn permissions(&self) -> &PermissionViewManager<S> {
        &self.permissions
    }

    /// Mutable access to the permission view half.
    pub fn permissions_mut(&mut self) -> &mut PermissionViewManager<S> {
        &mut self.permissions
    }

    /// The currently displayed feedback message, if any.
    pub fn message(&self) -> Option<String> {
        self.feedback.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridle_core::SignerCapabilities;
    use bridle_store::MemoryStore;

    #[tokio::test]
    async fn test_load_populates_both_halves() {
        let mut settings = Settings::new(
            MemoryStore::new(),
            Arc::new(SignerCapabilities),
            SettingsConfig::default(),
        );

        settings.load().await.unwrap();

        assert!(settings.relays().entries().is_empty());
        assert!(settings.permissions().view().is_empty());
        assert_eq!(settings.message(), None);
    }

    #[tokio::test]
    async fn test_feedback_is_shared_across_halves() {
        let mut settings = Settings::new(
            MemoryStore::new(),
            Arc::new(SignerCapabilities),
            SettingsConfig::default(),
        );

        settings.relays_mut().save().await.unwrap();

        assert_eq!(settings.message().as_deref(), Some("saved relays!"));
    }
}
