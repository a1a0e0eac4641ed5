//! Per-request health snapshot.

use std::sync::Arc;

use crate::config::Settings;
use crate::health::checks::HealthRegistry;
use crate::health::status::HealthStatus;
use crate::host::Uptime;

/// Builds a fresh [`HealthStatus`] on every probe.
#[derive(Clone)]
pub struct HealthReporter {
    registry: HealthRegistry,
    settings: Arc<Settings>,
    uptime: Uptime,
}

impl HealthReporter {
    pub fn new(registry: HealthRegistry, settings: Arc<Settings>, uptime: Uptime) -> Self {
        Self {
            registry,
            settings,
            uptime,
        }
    }

    pub async fn report(&self) -> HealthStatus {
        let status = self.registry.evaluate().await;
        HealthStatus::new(status, &self.settings, self.uptime.seconds())
    }
}
