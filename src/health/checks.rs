//! Health check registry.
//!
//! # Responsibilities
//! - Define the `HealthCheck` seam for dependency probes
//! - Aggregate individual results into one status (worst wins)

use std::sync::Arc;

use async_trait::async_trait;

use crate::health::status::CheckStatus;
use crate::lifecycle::{Phase, Shutdown};

/// A single liveness sub-check.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    fn name(&self) -> &str;
    async fn check(&self) -> CheckStatus;
}

/// Ordered list of checks evaluated on every probe.
#[derive(Clone, Default)]
pub struct HealthRegistry {
    checks: Vec<Arc<dyn HealthCheck>>,
}

impl HealthRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a check to the end of the list.
    pub fn register(&mut self, check: Arc<dyn HealthCheck>) {
        tracing::debug!(check = check.name(), "Health check registered");
        self.checks.push(check);
    }

    pub fn with_check(mut self, check: Arc<dyn HealthCheck>) -> Self {
        self.register(check);
        self
    }

    /// Run every check and return the worst result. No checks means `Ok`.
    pub async fn evaluate(&self) -> CheckStatus {
        let mut worst = CheckStatus::Ok;
        for check in &self.checks {
            let status = check.check().await;
            if status != CheckStatus::Ok {
                tracing::warn!(check = check.name(), status = ?status, "Health check not ok");
            }
            worst = worst.max(status);
        }
        worst
    }
}

/// Reports the process phase: healthy until shutdown begins.
pub struct LifecycleCheck {
    shutdown: Shutdown,
}

impl LifecycleCheck {
    pub fn new(shutdown: Shutdown) -> Self {
        Self { shutdown }
    }
}

#[async_trait]
impl HealthCheck for LifecycleCheck {
    fn name(&self) -> &str {
        "lifecycle"
    }

    async fn check(&self) -> CheckStatus {
        match self.shutdown.phase() {
            // A request reaching the handler proves the listener is serving.
            Phase::Starting | Phase::Listening => CheckStatus::Ok,
            Phase::Stopping | Phase::Stopped | Phase::Failed => CheckStatus::Error,
        }
    }
}
