//! DevOps Info Service Library

pub mod config;
pub mod health;
pub mod host;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::{ConfigError, Settings};
pub use http::HttpServer;
pub use lifecycle::{Phase, Shutdown, StartupError};
