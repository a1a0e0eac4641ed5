//! DevOps Info Service
//!
//! A small HTTP service that reports liveness and identity for container
//! health probes. All configuration comes from the environment.
//!
//! # Architecture Overview
//!
//! ```text
//!   environment ──▶ config::load ──▶ Settings (immutable, Arc)
//!                        │
//!                        ▼ (invalid value: exit 1, nothing bound)
//!                 lifecycle::startup
//!                        │ bind host:port (failure: exit 1)
//!                        ▼
//!   probe ──▶  http::server ──▶ /health   ──▶ health::HealthReporter
//!                           ──▶ /info     ──▶ identity from Settings
//!                           ──▶ /         ──▶ identity + host::SystemInfo, uptime, caller
//!                           ──▶ /config   ──▶ all Settings
//!
//!   SIGTERM/SIGINT ──▶ lifecycle::Shutdown ──▶ Stopping (health 503)
//!                                          ──▶ drain ≤ grace period ──▶ exit 0
//!   second signal ──▶ Shutdown::force ──▶ abandon in-flight requests ──▶ exit 0
//! ```

use std::process::ExitCode;

use devops_info_service::config;
use devops_info_service::http::DEFAULT_GRACE_PERIOD;
use devops_info_service::lifecycle::{startup, Shutdown, StartupError};
use devops_info_service::observability::init_logging;

#[tokio::main]
async fn main() -> ExitCode {
    // Logging depends on the configuration, so config errors go to stderr.
    let settings = match config::load() {
        Ok(settings) => settings,
        Err(e) => {
            let err = StartupError::from(e);
            eprintln!("devops-info-service: {err}");
            return ExitCode::from(err.exit_code());
        }
    };

    if let Err(e) = init_logging(&settings) {
        eprintln!("devops-info-service: failed to initialize logging: {e}");
    }

    tracing::info!(
        "{} v{} starting",
        settings.service_name,
        settings.service_version
    );

    match startup::run(settings, Shutdown::new(), DEFAULT_GRACE_PERIOD).await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            eprintln!("devops-info-service: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
