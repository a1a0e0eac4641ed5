//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout)
//! - Serve on a bound listener until shutdown
//! - Bound the drain after shutdown with a grace period

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, http::Request, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::Settings;
use crate::health::{HealthRegistry, HealthReporter, LifecycleCheck};
use crate::host::{SystemInfo, Uptime};
use crate::http::handlers::{self, AppState};
use crate::http::request::{propagate_request_id_layer, request_id, set_request_id_layer};
use crate::lifecycle::Shutdown;

/// Per-request deadline; exceeded requests get 408.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Time in-flight requests get to finish after shutdown is triggered.
pub const DEFAULT_GRACE_PERIOD: Duration = Duration::from_secs(10);

/// HTTP server for the info service.
pub struct HttpServer {
    router: Router,
    settings: Arc<Settings>,
    shutdown: Shutdown,
    grace_period: Duration,
}

impl HttpServer {
    /// Create a server whose health follows the lifecycle of `shutdown`.
    pub fn new(settings: Arc<Settings>, shutdown: Shutdown) -> Self {
        let registry =
            HealthRegistry::new().with_check(Arc::new(LifecycleCheck::new(shutdown.clone())));
        Self::with_registry(settings, shutdown, registry)
    }

    /// Create a server with a custom set of health checks.
    pub fn with_registry(
        settings: Arc<Settings>,
        shutdown: Shutdown,
        registry: HealthRegistry,
    ) -> Self {
        let uptime = Uptime::start();
        let state = AppState {
            settings: settings.clone(),
            health: HealthReporter::new(registry, settings.clone(), uptime),
            system: Arc::new(SystemInfo::collect()),
            uptime,
        };

        Self {
            router: Self::build_router(state),
            settings,
            shutdown,
            grace_period: DEFAULT_GRACE_PERIOD,
        }
    }

    pub fn with_grace_period(mut self, grace_period: Duration) -> Self {
        self.grace_period = grace_period;
        self
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::overview))
            .route("/info", get(handlers::info))
            .route("/health", get(handlers::health))
            .route("/config", get(handlers::config))
            .fallback(handlers::not_found)
            .with_state(state)
            .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    path = %request.uri().path(),
                    request_id = %request_id(request),
                )
            }))
            .layer(set_request_id_layer())
    }

    /// The router, for serving on a custom transport or testing in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn shutdown(&self) -> &Shutdown {
        &self.shutdown
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns once shutdown was triggered and connections drained, once the
    /// grace period elapsed, or once shutdown was forced.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            service = %self.settings.service_name,
            version = %self.settings.service_version,
            "HTTP server starting"
        );
        self.shutdown.mark_listening();

        let drain = self.shutdown.clone();
        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();
        let serve = axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                drain.wait().await;
                tracing::info!("Shutting down; no longer accepting connections");
            })
            .into_future();

        let deadline = {
            let shutdown = self.shutdown.clone();
            let grace_period = self.grace_period;
            async move {
                shutdown.wait().await;
                tokio::select! {
                    _ = tokio::time::sleep(grace_period) => "grace period elapsed",
                    _ = shutdown.wait_forced() => "forced",
                }
            }
        };

        let result = tokio::select! {
            result = serve => result,
            reason = deadline => {
                tracing::warn!(
                    reason,
                    grace_period_secs = self.grace_period.as_secs_f64(),
                    "Abandoning in-flight requests"
                );
                Ok(())
            }
        };

        // The accept loop may also end on an I/O error before any signal.
        self.shutdown.trigger();
        self.shutdown.mark_stopped();

        match &result {
            Ok(()) => tracing::info!("HTTP server stopped"),
            Err(e) => tracing::error!(error = %e, "HTTP server failed"),
        }
        result
    }
}
