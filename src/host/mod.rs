//! Host and process facts reported by `GET /`.
//!
//! # Data Flow
//! ```text
//! HttpServer::new
//!     → system.rs (hostname, OS, architecture, CPUs; collected once)
//!     → uptime.rs (process start instant, shared with health)
//! GET /
//!     → runtime snapshot (uptime, current time) per request
//! ```

pub mod system;
pub mod uptime;

pub use system::SystemInfo;
pub use uptime::{format_uptime, Uptime};
