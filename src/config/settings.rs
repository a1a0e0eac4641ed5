//! Settings schema.
//!
//! The resolved configuration of the service. Every field has a default so an
//! empty environment still yields a complete value.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Default bind address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listening port.
pub const DEFAULT_PORT: u16 = 5000;

/// Default service name reported by the identity endpoints.
pub const DEFAULT_SERVICE_NAME: &str = "devops-info-service";

/// Default service version reported by the identity endpoints.
pub const DEFAULT_SERVICE_VERSION: &str = "1.0.0";

/// Root configuration for the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Bind address (e.g., "0.0.0.0").
    pub host: String,

    /// Listening port, 1-65535.
    pub port: u16,

    /// Human-readable logs and verbose request tracing.
    pub debug: bool,

    /// Logging verbosity.
    pub log_level: LogLevel,

    /// Service name reported by `/health` and `/info`.
    pub service_name: String,

    /// Service version reported by `/health` and `/info`.
    pub service_version: String,
}

impl Settings {
    /// The `host:port` pair the listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            debug: false,
            log_level: LogLevel::default(),
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            service_version: DEFAULT_SERVICE_VERSION.to_string(),
        }
    }
}

/// Logging verbosity accepted in `LOG_LEVEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// All accepted values, in increasing severity.
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
            LogLevel::Critical => "critical",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a string that names no log level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLogLevel;

impl FromStr for LogLevel {
    type Err = UnknownLogLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or(UnknownLogLevel)
    }
}
