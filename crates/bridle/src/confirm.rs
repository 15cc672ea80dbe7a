//! The confirmation gate in front of destructive commands.

/// Blocking yes/no gate consulted before a revocation.
///
/// Revocation is destructive and irreversible, so
/// [`PermissionViewManager::revoke`](crate::permissions::PermissionViewManager::revoke)
/// consults the gate before anything else: a `false` answer
/// short-circuits with no store call and no feedback message. The UI
/// shell supplies the real prompt; the implementations here cover
/// headless use and tests.
pub trait ConfirmationGate: Send + Sync {
    /// Ask the user to confirm. `true` means proceed.
    fn confirm(&self, prompt: &str) -> bool;
}

/// Gate that confirms everything. For headless or scripted use.
pub struct AutoConfirm;

impl ConfirmationGate for AutoConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Gate that declines everything.
pub struct DenyAll;

impl ConfirmationGate for DenyAll {
    fn confirm(&self, _prompt: &str) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_gates() {
        assert!(AutoConfirm.confirm("revoke all permissions from x?"));
        assert!(!DenyAll.confirm("revoke all permissions from x?"));
    }
}
