//! Application state container shared across Axum route handlers.
//!
//! Cloned into every handler via Axum's `State<T>` extractor. The connection
//! is opened once in `main` and handed in here; nothing in this crate creates
//! its own.

use db::repositories::metric_repository::{MetricRepository, MetricStore};
use sea_orm::DatabaseConnection;
use services::metric_service::MetricService;
use std::sync::Arc;
use std::time::Duration;
use util::config;

#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    metrics: MetricService,
    stream_company: String,
    stream_delay: Duration,
}

impl AppState {
    /// Builds state whose metric queries run against `db`.
    pub fn new(db: DatabaseConnection) -> Self {
        let store = Arc::new(MetricRepository::new(db.clone()));
        Self::with_store(db, store)
    }

    /// Builds state with a caller-supplied metric store.
    ///
    /// Push settings start from `STREAM_COMPANY` / `STREAM_DELAY_MS`.
    pub fn with_store(db: DatabaseConnection, store: Arc<dyn MetricStore>) -> Self {
        Self {
            db,
            metrics: MetricService::new(store),
            stream_company: config::stream_company(),
            stream_delay: Duration::from_millis(config::stream_delay_ms()),
        }
    }

    /// Overrides which company `/stream` pushes and how long it waits first.
    pub fn with_stream(mut self, company: impl Into<String>, delay: Duration) -> Self {
        self.stream_company = company.into();
        self.stream_delay = delay;
        self
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn metrics(&self) -> &MetricService {
        &self.metrics
    }

    pub fn stream_company(&self) -> &str {
        &self.stream_company
    }

    pub fn stream_delay(&self) -> Duration {
        self.stream_delay
    }
}
