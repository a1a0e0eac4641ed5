//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, graceful shutdown)
//!     → request.rs (request ID)
//!     → handlers.rs (/health, / overview, /info, /config, fallback 404)
//!     → response.rs (JSON bodies)
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use handlers::AppState;
pub use request::X_REQUEST_ID;
pub use response::{
    EndpointInfo, ErrorBody, RequestError, RequestInfo, RuntimeInfo, ServiceInfo, ServiceOverview,
    ENDPOINTS,
};
pub use server::{HttpServer, DEFAULT_GRACE_PERIOD, REQUEST_TIMEOUT};
