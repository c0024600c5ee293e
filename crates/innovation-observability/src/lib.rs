//! # Innovation Observability
//!
//! Logging, distributed tracing and metrics for the Innovation API:
//!
//! - Console, rolling-file and JSON logging via `tracing-subscriber`
//! - OpenTelemetry OTLP export of spans
//! - Prometheus metrics for HTTP traffic and domain events
//!
//! Everything beyond console logging sits behind the `observability` feature
//! (on by default). At runtime it can be switched off with
//! `OBSERVABILITY_ENABLED=false`, in which case only console logging is
//! installed and the middleware pass requests straight through.
//!
//! # Example
//!
//! ```no_run
//! use innovation_observability::{init_tracing, shutdown_tracer};
//!
//! #[tokio::main]
//! async fn main() {
//!     init_tracing();
//!     // ... application code ...
//!     shutdown_tracer().await;
//! }
//! ```

mod basic_logging;

pub use basic_logging::init_basic_console_logging;

#[cfg(feature = "observability")]
pub mod logging;
#[cfg(feature = "observability")]
pub mod metrics;

#[cfg(feature = "observability")]
pub use metrics_exporter_prometheus::PrometheusHandle;

#[cfg(feature = "observability")]
pub use logging::{init_tracing, is_observability_enabled, logging_middleware, shutdown_tracer};
#[cfg(feature = "observability")]
pub use metrics::{
    init_metrics, metrics_app, metrics_middleware, track_auth_failure, track_product_created,
    track_role_updated, track_token_issued, track_user_created,
};

// No-op stubs when observability is disabled
#[cfg(not(feature = "observability"))]
pub mod stubs {
    use axum::{Router, extract::Request, middleware::Next, response::Response};

    /// Placeholder for the Prometheus handle; never constructed.
    #[derive(Debug, Clone)]
    pub struct PrometheusHandle;

    pub fn is_observability_enabled() -> bool {
        false
    }

    pub async fn logging_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    pub async fn metrics_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    /// Console logging only
    pub fn init_tracing() {
        super::init_basic_console_logging();
    }

    pub async fn shutdown_tracer() {}

    pub fn init_metrics() -> Option<PrometheusHandle> {
        None
    }

    pub fn metrics_app(_handle: PrometheusHandle) -> Router {
        Router::new()
    }

    pub fn track_token_issued() {}
    pub fn track_user_created() {}
    pub fn track_role_updated(_role: &str) {}
    pub fn track_product_created(_id_kind: &str) {}
    pub fn track_auth_failure(_reason: &str) {}
}

#[cfg(not(feature = "observability"))]
pub use stubs::*;
