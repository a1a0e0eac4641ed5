//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the global tracing subscriber
//! - Map `LOG_LEVEL` onto tracing levels
//! - Choose the output format from `DEBUG`

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, registry::Registry, util::SubscriberInitExt, util::TryInitError,
    EnvFilter, Layer,
};

use crate::config::{LogLevel, Settings};

/// Tracing level for a configured log level. `critical` has no tracing
/// counterpart and maps to `ERROR`.
pub fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warning => LevelFilter::WARN,
        LogLevel::Error | LogLevel::Critical => LevelFilter::ERROR,
    }
}

/// Filter directives used when `RUST_LOG` is not set.
pub fn default_directives(level: LogLevel) -> String {
    let filter = level_filter(level).to_string().to_lowercase();
    if level == LogLevel::Debug {
        // hyper is very chatty at debug
        format!("{filter},hyper=info,hyper_util=info")
    } else {
        filter
    }
}

/// Install the global subscriber for `settings`.
///
/// `RUST_LOG`, when set and valid, takes precedence over `LOG_LEVEL`.
pub fn init_logging(settings: &Settings) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(settings.log_level)));

    let fmt_layer: Box<dyn Layer<Registry> + Send + Sync> = if settings.debug {
        fmt::layer().with_target(true).boxed()
    } else {
        fmt::layer().json().with_current_span(true).boxed()
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .try_init()
}
