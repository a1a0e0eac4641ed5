//! Health status payloads.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::config::Settings;

/// Outcome of a single check, and of the aggregate.
///
/// Ordered by severity so the aggregate is the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Ok,
    Degraded,
    Error,
}

impl CheckStatus {
    /// Whether the service should still receive traffic.
    pub fn is_serving(self) -> bool {
        self != CheckStatus::Error
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: CheckStatus,
    pub timestamp: String,
    pub service_name: String,
    pub service_version: String,
    pub uptime_seconds: u64,
}

impl HealthStatus {
    /// Snapshot for `status` taken now.
    pub fn new(status: CheckStatus, settings: &Settings, uptime_seconds: u64) -> Self {
        Self {
            status,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            service_name: settings.service_name.clone(),
            service_version: settings.service_version.clone(),
            uptime_seconds,
        }
    }
}
