//! Startup orchestration.
//!
//! # Responsibilities
//! - Install signal handlers
//! - Bind the listener at `host:port`
//! - Hand the listener to the HTTP server and wait for it to stop

use std::io;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{ConfigError, Settings};
use crate::http::HttpServer;
use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::signals::{spawn_signal_listener, TerminationSignals};

/// Fatal errors that end the process before or while serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to install signal handlers: {0}")]
    Signals(#[source] io::Error),

    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}

impl StartupError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

/// Bind the listener described by `settings`.
pub async fn bind(settings: &Settings) -> Result<TcpListener, StartupError> {
    let address = settings.bind_address();
    let listener = TcpListener::bind((settings.host.as_str(), settings.port))
        .await
        .map_err(|source| StartupError::Bind {
            address: address.clone(),
            source,
        })?;

    tracing::info!(address = %address, "Listener bound");
    Ok(listener)
}

/// Bind, serve, and return once the server has stopped.
///
/// A signal or bind failure moves `shutdown` to `Failed`.
pub async fn run(
    settings: Settings,
    shutdown: Shutdown,
    grace_period: Duration,
) -> Result<(), StartupError> {
    tracing::info!(
        service = %settings.service_name,
        version = %settings.service_version,
        host = %settings.host,
        port = settings.port,
        debug = settings.debug,
        log_level = %settings.log_level,
        "Configuration loaded"
    );

    let bound = match TerminationSignals::install() {
        Ok(signals) => bind(&settings).await.map(|listener| (signals, listener)),
        Err(e) => Err(StartupError::Signals(e)),
    };
    let (signals, listener) = match bound {
        Ok(bound) => bound,
        Err(e) => {
            shutdown.mark_failed();
            return Err(e);
        }
    };

    let signals = spawn_signal_listener(signals, shutdown.clone());

    let server = HttpServer::new(Arc::new(settings), shutdown).with_grace_period(grace_period);
    let result = server.run(listener).await.map_err(StartupError::Serve);

    signals.abort();
    result
}
