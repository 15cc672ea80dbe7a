//! Read-only view over permission grants, with revocation.

use std::sync::Arc;

use bridle_core::{LevelFormatter, PermissionLevel};
use bridle_store::GrantStore;

use crate::confirm::ConfirmationGate;
use crate::error::Result;
use crate::feedback::Feedback;

/// One display row of the permission view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrantRow {
    /// The host the grant was issued to.
    pub host: String,

    /// The raw permission level.
    pub level: PermissionLevel,

    /// The level rendered for display.
    pub permissions: String,

    /// Descriptive scope of the grant.
    pub condition: String,

    /// When the grant was issued (seconds since epoch).
    pub created_at: i64,
}

/// Maintains a display-ready view of the grant store and issues
/// revocations back to it.
///
/// The view is derived state: it never self-mutates after a destructive
/// command, it re-reads the store instead. That tolerates a grant store
/// that removes rows asynchronously or holds several rows per host
/// without the view drifting from ground truth.
pub struct PermissionViewManager<S: GrantStore> {
    store: Arc<S>,
    formatter: Arc<dyn LevelFormatter>,
    view: Vec<GrantRow>,
    feedback: Feedback,
}

impl<S: GrantStore> PermissionViewManager<S> {
    /// Create a manager over the given grant store.
    pub fn new(store: Arc<S>, formatter: Arc<dyn LevelFormatter>, feedback: Feedback) -> Self {
        Self {
            store,
            formatter,
            view: Vec::new(),
            feedback,
        }
    }

    /// The current view rows, in the store's enumeration order
    /// (host-sorted, per [`GrantStore::list_grants`]).
    pub fn view(&self) -> &[GrantRow] {
        &self.view
    }

    /// Rebuild the view from the full grant collection.
    ///
    /// Projects each grant into a flat [`GrantRow`]; no filtering, no
    /// re-sorting beyond the store's own order.
    pub async fn load_view(&mut self) -> Result<()> {
        let grants = self.store.list_grants().await?;

        self.view = grants
            .into_iter()
            .map(|(host, grant)| GrantRow {
                host,
                level: grant.level,
                permissions: self.formatter.format(grant.level),
                condition: grant.condition,
                created_at: grant.created_at,
            })
            .collect();

        Ok(())
    }

    /// Revoke every grant for `host`, gated on user confirmation.
    ///
    /// The gate is consulted first: a declined prompt short-circuits
    /// with `Ok(false)` - no store call, no feedback. On confirmation
    /// the removal runs to completion, a feedback message naming the
    /// host is emitted, and the view is reloaded from the store.
    pub async fn revoke(&mut self, host: &str, gate: &dyn ConfirmationGate) -> Result<bool> {
        if !gate.confirm(&format!("revoke all permissions from {}?", host)) {
            return Ok(false);
        }

        let removed = self.store.remove_grants(host).await?;
        tracing::debug!(host, removed, "permissions revoked");

        self.feedback.set(format!("removed permissions from {}", host));
        self.load_view().await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confirm::{AutoConfirm, DenyAll};
    use bridle_core::{PermissionGrant, SignerCapabilities};
    use bridle_store::MemoryStore;

    async fn seeded_store() -> Arc<MemoryStore> {
        let store = Arc::new(MemoryStore::new());
        store
            .put_grant(
                "alpha.example",
                PermissionGrant::new(PermissionLevel::new(1), "forever", 100),
            )
            .await
            .unwrap();
        store
            .put_grant(
                "beta.example",
                PermissionGrant::new(PermissionLevel::new(10), "forever", 200),
            )
            .await
            .unwrap();
        store
    }

    fn manager(store: Arc<MemoryStore>) -> PermissionViewManager<MemoryStore> {
        PermissionViewManager::new(store, Arc::new(SignerCapabilities), Feedback::default())
    }

    #[tokio::test]
    async fn test_load_view_projects_grants() {
        let mut permissions = manager(seeded_store().await);
        permissions.load_view().await.unwrap();

        let view = permissions.view();
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].host, "alpha.example");
        assert_eq!(view[0].permissions, "read your public key");
        assert_eq!(view[1].host, "beta.example");
        assert_eq!(view[1].created_at, 200);
    }

    #[tokio::test]
    async fn test_revoke_removes_host_and_reloads() {
        let store = seeded_store().await;
        let mut permissions = manager(Arc::clone(&store));
        permissions.load_view().await.unwrap();
        assert_eq!(permissions.view().len(), 2);

        let revoked = permissions.revoke("alpha.example", &AutoConfirm).await.unwrap();

        assert!(revoked);
        assert_eq!(permissions.view().len(), 1);
        assert!(permissions.view().iter().all(|row| row.host != "alpha.example"));
        assert!(!store.list_grants().await.unwrap().contains_key("alpha.example"));
    }

    #[tokio::test]
    async fn test_declined_revoke_is_a_noop() {
        let store = seeded_store().await;
        let feedback = Feedback::default();
        let mut permissions = PermissionViewManager::new(
            Arc::clone(&store),
            Arc::new(SignerCapabilities),
            feedback.clone(),
        );
        permissions.load_view().await.unwrap();

        let revoked = permissions.revoke("alpha.example", &DenyAll).await.unwrap();

        assert!(!revoked);
        assert_eq!(permissions.view().len(), 2);
        assert!(store.list_grants().await.unwrap().contains_key("alpha.example"));
        assert_eq!(feedback.current(), None);
    }

    #[tokio::test]
    async fn test_revoke_emits_feedback_naming_the_host() {
        let feedback = Feedback::default();
        let mut permissions = PermissionViewManager::new(
            seeded_store().await,
            Arc::new(SignerCapabilities),
            feedback.clone(),
        );

        permissions.revoke("beta.example", &AutoConfirm).await.unwrap();

        assert_eq!(
            feedback.current().as_deref(),
            Some("removed permissions from beta.example")
        );
    }
}
