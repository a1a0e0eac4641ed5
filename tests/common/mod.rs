//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use devops_info_service::config::Settings;
use devops_info_service::health::HealthRegistry;
use devops_info_service::http::HttpServer;
use devops_info_service::lifecycle::Shutdown;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A server running in the background on an ephemeral local port.
#[allow(dead_code)]
pub struct RunningServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

impl RunningServer {
    #[allow(dead_code)]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start a server with the default health checks.
#[allow(dead_code)]
pub async fn start_server(settings: Settings) -> RunningServer {
    let shutdown = Shutdown::new();
    let server = HttpServer::new(Arc::new(settings), shutdown.clone())
        .with_grace_period(Duration::from_secs(2));
    spawn(server, shutdown).await
}

/// Start a server with a custom health registry.
#[allow(dead_code)]
pub async fn start_server_with_registry(
    settings: Settings,
    shutdown: Shutdown,
    registry: HealthRegistry,
) -> RunningServer {
    start_server_with_grace_period(settings, shutdown, registry, Duration::from_secs(2)).await
}

/// Start a server with a custom health registry and drain deadline.
#[allow(dead_code)]
pub async fn start_server_with_grace_period(
    settings: Settings,
    shutdown: Shutdown,
    registry: HealthRegistry,
    grace_period: Duration,
) -> RunningServer {
    let server = HttpServer::with_registry(Arc::new(settings), shutdown.clone(), registry)
        .with_grace_period(grace_period);
    spawn(server, shutdown).await
}

async fn spawn(server: HttpServer, shutdown: Shutdown) -> RunningServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(server.run(listener));

    // Wait for the server to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    RunningServer {
        addr,
        shutdown,
        handle,
    }
}

/// Client that never reuses connections or goes through a proxy.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .timeout(Duration::from_secs(3))
        .build()
        .unwrap()
}

/// Reserve a free local port. The port is released before returning.
#[allow(dead_code)]
pub fn free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}
