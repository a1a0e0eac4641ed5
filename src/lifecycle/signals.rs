//! OS signal handling.
//!
//! SIGTERM (sent by the container runtime on stop) and SIGINT both start a
//! graceful shutdown. A second signal forces it. On non-Unix targets only
//! Ctrl+C is available.
//!
//! Handlers are registered before the listener binds so a signal can never
//! hit the default disposition once the port is reachable.

use crate::lifecycle::shutdown::Shutdown;

/// Registered termination signal streams.
#[cfg(unix)]
pub struct TerminationSignals {
    terminate: tokio::signal::unix::Signal,
    interrupt: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl TerminationSignals {
    /// Register handlers. Must be called inside a Tokio runtime.
    pub fn install() -> std::io::Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};

        Ok(Self {
            terminate: signal(SignalKind::terminate())?,
            interrupt: signal(SignalKind::interrupt())?,
        })
    }

    /// Resolve with the signal name when one arrives.
    pub async fn recv(&mut self) -> &'static str {
        tokio::select! {
            _ = self.terminate.recv() => "SIGTERM",
            _ = self.interrupt.recv() => "SIGINT",
        }
    }
}

#[cfg(not(unix))]
pub struct TerminationSignals;

#[cfg(not(unix))]
impl TerminationSignals {
    pub fn install() -> std::io::Result<Self> {
        Ok(Self)
    }

    pub async fn recv(&mut self) -> &'static str {
        match tokio::signal::ctrl_c().await {
            Ok(()) => "ctrl-c",
            // No handler available; never resolve.
            Err(_) => std::future::pending().await,
        }
    }
}

/// Spawn a task that triggers `shutdown` on the first termination signal and
/// forces it on the second.
pub fn spawn_signal_listener(
    mut signals: TerminationSignals,
    shutdown: Shutdown,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let signal = signals.recv().await;
            if shutdown.is_shutting_down() {
                tracing::warn!(signal, "Second shutdown signal received; forcing shutdown");
                shutdown.force();
                break;
            }
            tracing::info!(signal, "Shutdown signal received");
            shutdown.trigger();
        }
    })
}
