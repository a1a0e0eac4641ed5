//! Process uptime.

use std::time::Instant;

/// Start instant of the service, cheap to copy into handlers.
#[derive(Debug, Clone, Copy)]
pub struct Uptime {
    started_at: Instant,
}

impl Uptime {
    pub fn start() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    pub fn seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn human(&self) -> String {
        format_uptime(self.seconds())
    }
}

impl Default for Uptime {
    fn default() -> Self {
        Self::start()
    }
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// "2 hours, 5 minutes", or just "5 minutes" under an hour.
pub fn format_uptime(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;

    if hours > 0 {
        format!("{}, {}", plural(hours, "hour"), plural(minutes, "minute"))
    } else {
        plural(minutes, "minute")
    }
}
