use crate::state::AppState;
use axum::{Router, routing::get};

pub mod get;

use get::{get_metric, get_metrics_by_category, list_metrics};

/// Builds the `/metrics` route group.
pub fn metric_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_metrics))
        .route("/{metric_id}", get(get_metric))
        .route("/category/{category}", get(get_metrics_by_category))
}
