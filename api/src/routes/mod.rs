//! HTTP entry points.
//!
//! - `/api/health` → liveness probe
//! - `/api/metrics` → metric queries
//! - `/stream` → one-shot SSE push of the configured company's metrics
//!
//! [`app`] assembles the full router with request logging and CORS, so `main`
//! and the router tests serve exactly the same stack.

use crate::middleware::log_request;
use crate::state::AppState;
use axum::{Router, middleware::from_fn, routing::get};
use tower_http::cors::CorsLayer;

pub mod common;
pub mod health;
pub mod metrics;
pub mod stream;

use health::health_routes;
use metrics::metric_routes;
use stream::stream_metrics;

/// Routes mounted under `/api`.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/metrics", metric_routes())
        .with_state(app_state)
}

/// The complete application router.
pub fn app(app_state: AppState) -> Router {
    let cors = CorsLayer::very_permissive();

    Router::new()
        .nest("/api", routes(app_state.clone()))
        .route("/stream", get(stream_metrics).with_state(app_state))
        .layer(from_fn(log_request))
        .layer(cors)
}
