//! Shared fixtures for the router integration tests.
#![allow(dead_code)]

use api::state::AppState;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use chrono::{Duration, TimeZone, Utc};
use db::models::metric::{Model as Metric, NewMetric};
use db::repositories::metric_repository::{MetricStore, StoreFuture};
use db::test_utils::setup_test_db;
use sea_orm::{DbErr, RuntimeErr};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn snapshot(
    company: &str,
    category: &str,
    name: &str,
    value: f64,
    unit: &str,
    status: &str,
    hours: i64,
) -> NewMetric {
    NewMetric {
        company_name: company.into(),
        name: name.into(),
        category: category.into(),
        value,
        unit: Some(unit.into()),
        description: None,
        status: status.into(),
        recorded_at: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap() + Duration::hours(hours),
    }
}

const ENABLED: &str = "The status of the metric is Enabled";
const ACTIVE: &str = "The status of the metric is Active";

/// In-memory store holding, by id:
///
/// 1. Lumopath revenue/ARR 1000 USD, enabled, 01:00
/// 2. Lumopath revenue/ARR 2000 USD, enabled, 02:00
/// 3. Lumopath revenue/ARR 3000 USD, `Disabled`, 04:00
/// 4. Lumopath revenue/MRR 500 USD, `Disabled`, 03:00
/// 5. Lumopath customers/Churn 3.2 percentage, enabled, 01:00
/// 6. Othercorp growth/NRR 112.8 percentage, enabled, 01:00
pub async fn seeded_state() -> AppState {
    let db = setup_test_db().await;

    let rows = [
        snapshot("Lumopath", "revenue", "ARR", 1_000.0, "USD", ENABLED, 1),
        snapshot("Lumopath", "revenue", "ARR", 2_000.0, "USD", ENABLED, 2),
        snapshot("Lumopath", "revenue", "ARR", 3_000.0, "USD", "Disabled", 4),
        snapshot("Lumopath", "revenue", "MRR", 500.0, "USD", "Disabled", 3),
        snapshot("Lumopath", "customers", "Churn", 3.2, "percentage", ACTIVE, 1),
        snapshot("Othercorp", "growth", "NRR", 112.8, "percentage", "active", 1),
    ];
    for row in rows {
        Metric::create(&db, row).await.unwrap();
    }

    AppState::new(db).with_stream("Lumopath", std::time::Duration::ZERO)
}

struct UnavailableStore;

fn unavailable() -> DbErr {
    DbErr::Conn(RuntimeErr::Internal("connection refused".into()))
}

impl MetricStore for UnavailableStore {
    fn find_all(&self) -> StoreFuture<'_, Vec<Metric>> {
        Box::pin(async { Err(unavailable()) })
    }

    fn find_by_id(&self, _id: i64) -> StoreFuture<'_, Option<Metric>> {
        Box::pin(async { Err(unavailable()) })
    }

    fn find_all_by_category<'a>(&'a self, _category: &'a str) -> StoreFuture<'a, Vec<Metric>> {
        Box::pin(async { Err(unavailable()) })
    }
}

/// State whose store fails every query.
pub async fn unavailable_state() -> AppState {
    let db = setup_test_db().await;
    AppState::with_store(db, Arc::new(UnavailableStore))
        .with_stream("Lumopath", std::time::Duration::ZERO)
}

pub async fn get_raw(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get_raw(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}
