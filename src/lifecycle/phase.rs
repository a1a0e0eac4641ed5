//! Process phase state machine.
//!
//! # State Transitions
//! ```text
//! Starting → Listening   listener bound
//! Starting → Failed      config or bind error (exit 1)
//! Listening → Stopping   SIGTERM / SIGINT
//! Stopping → Stopped     drained or grace period elapsed (exit 0)
//! ```

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    Starting,
    Listening,
    Stopping,
    Stopped,
    Failed,
}

impl Phase {
    /// Whether moving from `self` to `next` is a legal transition.
    pub fn can_transition_to(self, next: Phase) -> bool {
        matches!(
            (self, next),
            (Phase::Starting, Phase::Listening)
                | (Phase::Starting, Phase::Failed)
                | (Phase::Starting, Phase::Stopping)
                | (Phase::Listening, Phase::Stopping)
                | (Phase::Stopping, Phase::Stopped)
        )
    }

    /// Whether the process has stopped taking new work.
    pub fn is_shutting_down(self) -> bool {
        matches!(self, Phase::Stopping | Phase::Stopped)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Starting => "starting",
            Phase::Listening => "listening",
            Phase::Stopping => "stopping",
            Phase::Stopped => "stopped",
            Phase::Failed => "failed",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_only_from_starting() {
        assert!(Phase::Starting.can_transition_to(Phase::Failed));
        assert!(!Phase::Listening.can_transition_to(Phase::Failed));
        assert!(!Phase::Stopping.can_transition_to(Phase::Failed));
    }

    #[test]
    fn test_terminal_phases_are_final() {
        for from in [Phase::Stopped, Phase::Failed] {
            for to in [
                Phase::Starting,
                Phase::Listening,
                Phase::Stopping,
                Phase::Stopped,
                Phase::Failed,
            ] {
                assert!(!from.can_transition_to(to), "{from} -> {to}");
            }
        }
    }

    #[test]
    fn test_shutdown_path() {
        assert!(Phase::Listening.can_transition_to(Phase::Stopping));
        assert!(Phase::Stopping.can_transition_to(Phase::Stopped));
        assert!(!Phase::Listening.can_transition_to(Phase::Stopped));
        assert!(Phase::Stopping.is_shutting_down());
        assert!(!Phase::Listening.is_shutting_down());
    }
}
