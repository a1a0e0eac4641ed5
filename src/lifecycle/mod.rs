//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Init logging → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stopping → Stop accepting → Drain (bounded) → Stopped
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//!     Second signal  → Force (skip the rest of the drain)
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal (exit 1)
//! - Listener binds only after configuration is valid
//! - Shutdown has a deadline: remaining requests are abandoned after it

pub mod phase;
pub mod shutdown;
pub mod signals;
pub mod startup;

pub use phase::Phase;
pub use shutdown::Shutdown;
pub use startup::StartupError;
