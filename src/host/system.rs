//! Static facts about the machine the service runs on.

use serde::Serialize;
use sysinfo::System;

/// Reported under `system` in `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemInfo {
    pub hostname: String,
    pub platform: String,
    pub platform_version: String,
    pub architecture: String,
    pub cpu_count: usize,
}

impl SystemInfo {
    /// Gather facts from the OS. Values that cannot be read are "unknown".
    pub fn collect() -> Self {
        let hostname = match hostname::get() {
            Ok(name) => name.to_string_lossy().into_owned(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read hostname");
                "unknown".to_string()
            }
        };

        let mut system = System::new();
        system.refresh_cpu();

        Self {
            hostname,
            platform: System::name().unwrap_or_else(|| std::env::consts::OS.to_string()),
            platform_version: System::kernel_version()
                .or_else(System::os_version)
                .unwrap_or_else(|| "unknown".to_string()),
            architecture: std::env::consts::ARCH.to_string(),
            // sysinfo reports no CPUs where it is unsupported; there is always one.
            cpu_count: system.cpus().len().max(1),
        }
    }
}
