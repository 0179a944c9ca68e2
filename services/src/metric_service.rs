use crate::metric::resolve_latest;
use crate::metric_view::MetricView;
use crate::service::{AppError, AppResult};
use db::repositories::metric_repository::MetricStore;
use std::sync::Arc;

/// Read operations over stored metrics.
///
/// Stateless apart from the injected store, so clones can be used from any
/// number of tasks at once.
#[derive(Clone)]
pub struct MetricService {
    store: Arc<dyn MetricStore>,
}

impl MetricService {
    pub fn new(store: Arc<dyn MetricStore>) -> Self {
        Self { store }
    }

    /// Current enabled value of every metric a company has, one per
    /// `(category, name)`. Order is unspecified.
    pub async fn list_for_company(&self, company_name: &str) -> AppResult<Vec<MetricView>> {
        let all = self.store.find_all().await?;
        let total = all.len();

        let company = all.into_iter().filter(|m| m.company_name == company_name);
        let resolved = resolve_latest(company);

        log::debug!(
            "Resolved {} of {} stored metrics for company '{}'",
            resolved.len(),
            total,
            company_name
        );

        Ok(resolved.into_iter().map(MetricView::from).collect())
    }

    /// Single metric by id, exactly as stored.
    ///
    /// `id` is the raw client-supplied identifier; text that is not an integer
    /// is rejected with [`AppError::InvalidId`]. A well-formed id with no row
    /// behind it is `Ok(None)`.
    pub async fn get_by_id(&self, id: &str) -> AppResult<Option<MetricView>> {
        let id: i64 = id
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidId(id.to_string()))?;

        let metric = self.store.find_by_id(id).await?;
        Ok(metric.map(MetricView::from))
    }

    /// Every stored snapshot in a category, newest first.
    ///
    /// Unlike [`list_for_company`](Self::list_for_company) this neither checks
    /// status nor collapses history.
    pub async fn list_by_category(&self, category: &str) -> AppResult<Vec<MetricView>> {
        let rows = self.store.find_all_by_category(category).await?;
        Ok(rows.into_iter().map(MetricView::from).collect())
    }
}
