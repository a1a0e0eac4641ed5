//! Configuration loading from the process environment.

use std::env;

use thiserror::Error;

use crate::config::settings::Settings;
use crate::config::validation::{parse_bool, parse_log_level, parse_non_empty, parse_port};

/// Error type for configuration loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable was present but its value could not be used.
    #[error("invalid value for {var}: {value:?} (expected {expected})")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl ConfigError {
    /// Name of the offending environment variable.
    pub fn var(&self) -> &'static str {
        match self {
            ConfigError::Invalid { var, .. } => *var,
        }
    }
}

type Apply = fn(&mut Settings, &str) -> Result<(), &'static str>;

/// One recognized environment variable and how it lands in [`Settings`].
struct EnvVar {
    name: &'static str,
    apply: Apply,
}

/// The closed set of recognized variables. Anything else in the environment
/// is ignored.
const ENV_VARS: &[EnvVar] = &[
    EnvVar { name: "HOST", apply: apply_host },
    EnvVar { name: "PORT", apply: apply_port },
    EnvVar { name: "DEBUG", apply: apply_debug },
    EnvVar { name: "LOG_LEVEL", apply: apply_log_level },
    EnvVar { name: "SERVICE_NAME", apply: apply_service_name },
    EnvVar { name: "SERVICE_VERSION", apply: apply_service_version },
];

fn apply_host(settings: &mut Settings, raw: &str) -> Result<(), &'static str> {
    settings.host = parse_non_empty(raw)?;
    Ok(())
}

fn apply_port(settings: &mut Settings, raw: &str) -> Result<(), &'static str> {
    settings.port = parse_port(raw)?;
    Ok(())
}

fn apply_debug(settings: &mut Settings, raw: &str) -> Result<(), &'static str> {
    settings.debug = parse_bool(raw)?;
    Ok(())
}

fn apply_log_level(settings: &mut Settings, raw: &str) -> Result<(), &'static str> {
    settings.log_level = parse_log_level(raw)?;
    Ok(())
}

fn apply_service_name(settings: &mut Settings, raw: &str) -> Result<(), &'static str> {
    settings.service_name = parse_non_empty(raw)?;
    Ok(())
}

fn apply_service_version(settings: &mut Settings, raw: &str) -> Result<(), &'static str> {
    settings.service_version = parse_non_empty(raw)?;
    Ok(())
}

/// Load and validate settings from the process environment.
pub fn load() -> Result<Settings, ConfigError> {
    load_from(|name| match env::var(name) {
        Ok(value) => Some(value),
        Err(env::VarError::NotPresent) => None,
        // Keep it present so validation reports it instead of defaulting.
        Err(env::VarError::NotUnicode(raw)) => Some(raw.to_string_lossy().into_owned()),
    })
}

/// Load and validate settings from an arbitrary variable lookup.
///
/// Missing variables keep their default. The first invalid variable, in table
/// order, aborts loading.
pub fn load_from<F>(lookup: F) -> Result<Settings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = Settings::default();

    for var in ENV_VARS {
        let Some(raw) = lookup(var.name) else {
            continue;
        };
        (var.apply)(&mut settings, &raw).map_err(|expected| ConfigError::Invalid {
            var: var.name,
            value: raw.clone(),
            expected,
        })?;
    }

    Ok(settings)
}
