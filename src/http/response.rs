//! Response bodies for the service endpoints.

use std::net::SocketAddr;

use axum::{
    extract::ConnectInfo,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::config::Settings;
use crate::host::{SystemInfo, Uptime};

/// Body of `GET /info`, and the top-level fields of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceInfo {
    pub service_name: String,
    pub service_version: String,
    pub host: String,
    pub port: u16,
}

impl From<&Settings> for ServiceInfo {
    fn from(settings: &Settings) -> Self {
        Self {
            service_name: settings.service_name.clone(),
            service_version: settings.service_version.clone(),
            host: settings.host.clone(),
            port: settings.port,
        }
    }
}

/// Body of `GET /`: service identity plus host, runtime and request facts.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceOverview {
    #[serde(flatten)]
    pub service: ServiceInfo,
    pub system: SystemInfo,
    pub runtime: RuntimeInfo,
    pub request: RequestInfo,
    pub endpoints: &'static [EndpointInfo],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuntimeInfo {
    pub uptime_seconds: u64,
    pub uptime_human: String,
    pub current_time: String,
    pub timezone: &'static str,
}

impl RuntimeInfo {
    pub fn now(uptime: Uptime) -> Self {
        let uptime_seconds = uptime.seconds();
        Self {
            uptime_seconds,
            uptime_human: crate::host::format_uptime(uptime_seconds),
            current_time: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            timezone: "UTC",
        }
    }
}

/// What the service saw of the caller's request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestInfo {
    pub client_ip: String,
    pub user_agent: String,
    pub method: String,
    pub path: String,
}

impl RequestInfo {
    /// The client address comes from the accepted connection; it is
    /// "unknown" when the router is driven without one.
    pub fn from_request<B>(request: &Request<B>) -> Self {
        let client_ip = request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let user_agent = request
            .headers()
            .get(header::USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("Unknown")
            .to_string();

        Self {
            client_ip,
            user_agent,
            method: request.method().to_string(),
            path: request.uri().path().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EndpointInfo {
    pub path: &'static str,
    pub method: &'static str,
    pub description: &'static str,
}

/// Routes served by the service, listed in `GET /`.
pub const ENDPOINTS: &[EndpointInfo] = &[
    EndpointInfo {
        path: "/",
        method: "GET",
        description: "Service, system and request information",
    },
    EndpointInfo {
        path: "/info",
        method: "GET",
        description: "Service identity",
    },
    EndpointInfo {
        path: "/health",
        method: "GET",
        description: "Health check",
    },
    EndpointInfo {
        path: "/config",
        method: "GET",
        description: "Resolved configuration",
    },
];

/// JSON error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: &'static str,
}

/// Error responses for unsupported requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    NotFound,
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            RequestError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: "Not Found",
                    message: "Endpoint does not exist",
                },
            ),
        };
        (status, Json(body)).into_response()
    }
}
