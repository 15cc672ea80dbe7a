//! Transient user feedback shared by both halves of the settings surface.
//!
//! A single message slot: setting a message displays it, and it clears
//! itself after a fixed delay unless a newer message took its place.
//! Each scheduled clear carries a generation number and only fires if
//! the generation still matches, so an older message's expiry can never
//! wipe a newer message.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time;

/// Default time a message stays visible.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3);

/// Clonable handle to the shared feedback slot.
///
/// Clones share the same underlying slot; both settings managers hold
/// one and the UI shell reads it via [`current`](Feedback::current).
#[derive(Clone)]
pub struct Feedback {
    inner: Arc<Mutex<FeedbackInner>>,
    ttl: Duration,
}

struct FeedbackInner {
    message: Option<String>,
    generation: u64,
}

impl Feedback {
    /// Create a feedback slot whose messages expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(FeedbackInner {
                message: None,
                generation: 0,
            })),
            ttl,
        }
    }

    /// Display a message, superseding any current one immediately.
    ///
    /// Schedules the auto-clear on the current Tokio runtime; must be
    /// called from within one.
    pub fn set(&self, message: impl Into<String>) {
        let generation = {
            let mut inner = self.inner.lock().unwrap();
            inner.generation += 1;
            inner.message = Some(message.into());
            inner.generation
        };

        let inner = Arc::clone(&self.inner);
        let ttl = self.ttl;
        tokio::spawn(async move {
            time::sleep(ttl).await;
            let mut inner = inner.lock().unwrap();
            // A newer message restarted the clock; leave it alone.
            if inner.generation == generation {
                inner.message = None;
            }
        });
    }

    /// The currently displayed message, if any.
    pub fn current(&self) -> Option<String> {
        self.inner.lock().unwrap().message.clone()
    }
}

impl Default for Feedback {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn advance(duration: Duration) {
        // Let any freshly spawned clear task poll and register its
        // timer against the current (pre-advance) clock first.
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;
        time::advance(duration).await;
        // Let the woken clear tasks run.
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_message_expires_after_ttl() {
        let feedback = Feedback::default();

        feedback.set("saved relays!");
        assert_eq!(feedback.current().as_deref(), Some("saved relays!"));

        advance(Duration::from_millis(3500)).await;
        assert_eq!(feedback.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_message_still_visible_before_ttl() {
        let feedback = Feedback::default();

        feedback.set("saved relays!");
        advance(Duration::from_millis(2500)).await;

        assert_eq!(feedback.current().as_deref(), Some("saved relays!"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_message_supersedes_immediately() {
        let feedback = Feedback::default();

        feedback.set("first");
        feedback.set("second");

        assert_eq!(feedback.current().as_deref(), Some("second"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_timer_does_not_clear_newer_message() {
        let feedback = Feedback::default();

        feedback.set("first");
        advance(Duration::from_secs(2)).await;
        feedback.set("second");

        // "first"'s timer fires here; "second" must survive it.
        advance(Duration::from_millis(1500)).await;
        assert_eq!(feedback.current().as_deref(), Some("second"));

        // "second" expires on its own clock.
        advance(Duration::from_secs(2)).await;
        assert_eq!(feedback.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clones_share_the_slot() {
        let feedback = Feedback::default();
        let other = feedback.clone();

        feedback.set("shared");
        assert_eq!(other.current().as_deref(), Some("shared"));
    }
}
