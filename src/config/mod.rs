//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (HOST, PORT, DEBUG, LOG_LEVEL, SERVICE_NAME, SERVICE_VERSION)
//!     → loader.rs (declarative table, one entry per variable)
//!     → validation.rs (typed parsers)
//!     → Settings (validated, immutable)
//!     → shared via Arc with the HTTP handlers
//! ```
//!
//! # Design Decisions
//! - Settings are immutable once loaded; changes require a restart
//! - All fields have defaults so an empty environment is valid
//! - Any invalid value is fatal at startup

pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::{load, load_from, ConfigError};
pub use settings::{LogLevel, Settings};
