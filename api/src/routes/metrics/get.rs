//! Metric query handlers.
//!
//! All three endpoints are read-only and wrap their payload in [`ApiResponse`].
//! Timestamps are RFC 3339 strings and every metric carries a
//! `formattedValue` rendered from its unit.

use crate::response::ApiResponse;
use crate::routes::common::{format_validation_errors, status_for};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use services::metric_view::MetricView;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct ListMetricsQuery {
    #[serde(default, alias = "companyName")]
    #[validate(length(min = 1, message = "company_name is required"))]
    pub company_name: String,
}

/// GET `/api/metrics?company_name={company_name}`
///
/// Current value of each enabled metric for the company. Older snapshots and
/// snapshots whose status reads as disabled are left out, so each
/// `(category, name)` appears at most once. Order is not guaranteed.
///
/// ### Responses
/// - `200 OK` with the list (possibly empty)
/// - `400 Bad Request` when `company_name` is missing or empty
/// - `500 Internal Server Error` when the store query fails
///
/// ```json
/// {
///   "success": true,
///   "data": [
///     {
///       "id": 1,
///       "companyName": "Lumopath",
///       "name": "Annual Recurring Revenue (ARR)",
///       "category": "revenue",
///       "value": 2850000.0,
///       "unit": "USD",
///       "formattedValue": "$2850000.00",
///       "recordedAt": "2025-06-01T00:00:00.000Z",
///       ...
///     }
///   ],
///   "message": "Metrics retrieved"
/// }
/// ```
pub async fn list_metrics(
    State(app_state): State<AppState>,
    Query(params): Query<ListMetricsQuery>,
) -> impl IntoResponse {
    if let Err(validation_errors) = params.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Vec<MetricView>>::error(error_message)),
        );
    }

    match app_state.metrics().list_for_company(&params.company_name).await {
        Ok(metrics) => (
            StatusCode::OK,
            Json(ApiResponse::success(metrics, "Metrics retrieved")),
        ),
        Err(e) => {
            tracing::error!("Failed to list metrics for '{}': {e}", params.company_name);
            (status_for(&e), Json(ApiResponse::error(e.to_string())))
        }
    }
}

/// GET `/api/metrics/{metric_id}`
///
/// One metric exactly as stored, whatever its status.
///
/// ### Responses
/// - `200 OK`
/// - `400 Bad Request` when `metric_id` is not an integer
/// - `404 Not Found` when no metric has that id
/// - `500 Internal Server Error` when the store query fails
pub async fn get_metric(
    State(app_state): State<AppState>,
    Path(metric_id): Path<String>,
) -> impl IntoResponse {
    match app_state.metrics().get_by_id(&metric_id).await {
        Ok(Some(metric)) => (
            StatusCode::OK,
            Json(ApiResponse::success(Some(metric), "Metric retrieved")),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Option<MetricView>>::error("Metric not found")),
        ),
        Err(e) => {
            tracing::warn!("Failed to fetch metric '{metric_id}': {e}");
            (status_for(&e), Json(ApiResponse::error(e.to_string())))
        }
    }
}

/// GET `/api/metrics/category/{category}`
///
/// Every stored snapshot in the category, newest first. No status filtering
/// and no collapsing of history, unlike `GET /api/metrics`.
pub async fn get_metrics_by_category(
    State(app_state): State<AppState>,
    Path(category): Path<String>,
) -> impl IntoResponse {
    match app_state.metrics().list_by_category(&category).await {
        Ok(metrics) => (
            StatusCode::OK,
            Json(ApiResponse::success(metrics, "Metrics retrieved")),
        ),
        Err(e) => {
            tracing::error!("Failed to list metrics in category '{category}': {e}");
            (status_for(&e), Json(ApiResponse::error(e.to_string())))
        }
    }
}
