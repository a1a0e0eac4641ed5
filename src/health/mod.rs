//! Health reporting subsystem.
//!
//! # Data Flow
//! ```text
//! GET /health
//!     → reporter.rs (snapshot per request)
//!     → checks.rs (run registered checks, worst status wins)
//!     → status.rs (HealthStatus body)
//! ```
//!
//! # Design Decisions
//! - No cached state: every probe is recomputed
//! - The only built-in check follows the process phase
//! - Dependency probes plug in through `HealthCheck` without changing the body

pub mod checks;
pub mod reporter;
pub mod status;

pub use checks::{HealthCheck, HealthRegistry, LifecycleCheck};
pub use reporter::HealthReporter;
pub use status::{CheckStatus, HealthStatus};
