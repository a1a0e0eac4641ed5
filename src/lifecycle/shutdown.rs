//! Shutdown coordination for the service.

use std::sync::Arc;

use tokio::sync::watch;

use crate::lifecycle::phase::Phase;

/// Coordinator for the process phase and graceful shutdown.
///
/// Publishes the current [`Phase`] over a watch channel. Handlers read it
/// without locking; the server loop and signal task drive the transitions.
/// A forced shutdown cuts the drain short without waiting for the grace period.
#[derive(Clone)]
pub struct Shutdown {
    tx: Arc<watch::Sender<Phase>>,
    forced: Arc<watch::Sender<bool>>,
}

impl Shutdown {
    /// Create a new coordinator in the `Starting` phase.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(Phase::Starting);
        let (forced, _) = watch::channel(false);
        Self {
            tx: Arc::new(tx),
            forced: Arc::new(forced),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        *self.tx.borrow()
    }

    /// Move to `next` if the transition is legal. Returns whether it happened.
    pub fn transition(&self, next: Phase) -> bool {
        let mut from = None;
        let changed = self.tx.send_if_modified(|phase| {
            if phase.can_transition_to(next) {
                from = Some(*phase);
                *phase = next;
                true
            } else {
                false
            }
        });

        if let Some(from) = from {
            tracing::info!(from = %from, to = %next, "Phase changed");
        }
        changed
    }

    pub fn mark_listening(&self) -> bool {
        self.transition(Phase::Listening)
    }

    pub fn mark_stopped(&self) -> bool {
        self.transition(Phase::Stopped)
    }

    pub fn mark_failed(&self) -> bool {
        self.transition(Phase::Failed)
    }

    /// Trigger the shutdown signal. Idempotent.
    pub fn trigger(&self) {
        self.transition(Phase::Stopping);
    }

    /// Whether shutdown has been triggered.
    pub fn is_shutting_down(&self) -> bool {
        self.phase().is_shutting_down()
    }

    /// Subscribe to phase changes.
    pub fn subscribe(&self) -> watch::Receiver<Phase> {
        self.tx.subscribe()
    }

    /// Resolve once shutdown has been triggered.
    ///
    /// Returns immediately if it already was.
    pub async fn wait(&self) {
        let mut rx = self.subscribe();
        // The sender lives as long as `self`, so this cannot observe a closed channel.
        let _ = rx.wait_for(|phase| phase.is_shutting_down()).await;
    }

    /// Trigger shutdown and abandon in-flight requests immediately.
    pub fn force(&self) {
        self.trigger();
        self.forced.send_replace(true);
    }

    pub fn is_forced(&self) -> bool {
        *self.forced.borrow()
    }

    /// Resolve once a forced shutdown has been requested.
    pub async fn wait_forced(&self) {
        let mut rx = self.forced.subscribe();
        let _ = rx.wait_for(|forced| *forced).await;
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_starts_in_starting_phase() {
        let shutdown = Shutdown::new();
        assert_eq!(shutdown.phase(), Phase::Starting);
        assert!(!shutdown.is_shutting_down());
    }

    #[test]
    fn test_illegal_transition_is_ignored() {
        let shutdown = Shutdown::new();
        assert!(shutdown.mark_listening());
        assert!(!shutdown.mark_failed());
        assert!(!shutdown.mark_stopped());
        assert_eq!(shutdown.phase(), Phase::Listening);
    }

    #[test]
    fn test_trigger_is_idempotent() {
        let shutdown = Shutdown::new();
        shutdown.mark_listening();
        shutdown.trigger();
        shutdown.trigger();
        assert_eq!(shutdown.phase(), Phase::Stopping);
        assert!(shutdown.mark_stopped());
        shutdown.trigger();
        assert_eq!(shutdown.phase(), Phase::Stopped);
    }

    #[test]
    fn test_clones_share_phase() {
        let shutdown = Shutdown::new();
        let other = shutdown.clone();
        shutdown.mark_listening();
        assert_eq!(other.phase(), Phase::Listening);
    }

    #[tokio::test]
    async fn test_wait_resolves_after_trigger() {
        let shutdown = Shutdown::new();
        shutdown.mark_listening();

        let waiter = shutdown.clone();
        let handle = tokio::spawn(async move {
            waiter.wait().await;
        });

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!handle.is_finished());

        shutdown.trigger();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("wait should resolve")
            .unwrap();
    }

    #[tokio::test]
    async fn test_force_implies_trigger() {
        let shutdown = Shutdown::new();
        shutdown.mark_listening();
        assert!(!shutdown.is_forced());

        shutdown.force();
        assert!(shutdown.is_forced());
        assert_eq!(shutdown.phase(), Phase::Stopping);
        tokio::time::timeout(Duration::from_millis(100), shutdown.wait_forced())
            .await
            .expect("already forced");
    }

    #[tokio::test]
    async fn test_wait_returns_if_already_triggered() {
        let shutdown = Shutdown::new();
        shutdown.trigger();
        tokio::time::timeout(Duration::from_millis(100), shutdown.wait())
            .await
            .expect("already shutting down");
    }
}
