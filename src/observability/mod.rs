//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and lifecycle emit tracing events
//!     → logging.rs (filter by LOG_LEVEL / RUST_LOG)
//!     → stdout: JSON lines, or human-readable when DEBUG is set
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Request ID recorded on every request span

pub mod logging;

pub use logging::init_logging;
