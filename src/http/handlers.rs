use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    Json,
};

use crate::config::Settings;
use crate::health::{HealthReporter, HealthStatus};
use crate::host::{SystemInfo, Uptime};
use crate::http::response::{
    RequestError, RequestInfo, RuntimeInfo, ServiceInfo, ServiceOverview, ENDPOINTS,
};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub health: HealthReporter,
    pub system: Arc<SystemInfo>,
    pub uptime: Uptime,
}

/// `GET /health`: 200 while serving, 503 once shutdown has begun.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthStatus>) {
    let report = state.health.report().await;
    let code = if report.status.is_serving() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(report))
}

/// `GET /`: identity plus host, runtime and caller details.
pub async fn overview(State(state): State<AppState>, request: Request) -> Json<ServiceOverview> {
    Json(ServiceOverview {
        service: ServiceInfo::from(state.settings.as_ref()),
        system: state.system.as_ref().clone(),
        runtime: RuntimeInfo::now(state.uptime),
        request: RequestInfo::from_request(&request),
        endpoints: ENDPOINTS,
    })
}

/// `GET /info`: identity only.
pub async fn info(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo::from(state.settings.as_ref()))
}

/// `GET /config`: every resolved setting.
pub async fn config(State(state): State<AppState>) -> Json<Settings> {
    Json(state.settings.as_ref().clone())
}

pub async fn not_found() -> RequestError {
    RequestError::NotFound
}
