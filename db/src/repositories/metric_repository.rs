use crate::models::metric::{Column, Entity, Model};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::future::Future;
use std::pin::Pin;

pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, DbErr>> + Send + 'a>>;

/// Read contract the query surface needs from metric storage.
///
/// Both list operations return rows newest first by `recorded_at`.
pub trait MetricStore: Send + Sync {
    fn find_all(&self) -> StoreFuture<'_, Vec<Model>>;

    fn find_by_id(&self, id: i64) -> StoreFuture<'_, Option<Model>>;

    fn find_all_by_category<'a>(&'a self, category: &'a str) -> StoreFuture<'a, Vec<Model>>;
}

/// `MetricStore` backed by a SeaORM connection.
#[derive(Clone)]
pub struct MetricRepository {
    db: DatabaseConnection,
}

impl MetricRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl MetricStore for MetricRepository {
    fn find_all(&self) -> StoreFuture<'_, Vec<Model>> {
        Box::pin(async move {
            Entity::find()
                .order_by_desc(Column::RecordedAt)
                .all(&self.db)
                .await
        })
    }

    fn find_by_id(&self, id: i64) -> StoreFuture<'_, Option<Model>> {
        Box::pin(async move { Entity::find_by_id(id).one(&self.db).await })
    }

    fn find_all_by_category<'a>(&'a self, category: &'a str) -> StoreFuture<'a, Vec<Model>> {
        Box::pin(async move {
            Entity::find()
                .filter(Column::Category.eq(category))
                .order_by_desc(Column::RecordedAt)
                .all(&self.db)
                .await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::metric::{Model as Metric, NewMetric};
    use crate::test_utils::setup_test_db;
    use chrono::{Duration, TimeZone, Utc};

    fn snapshot(name: &str, category: &str, hours: i64) -> NewMetric {
        NewMetric {
            company_name: "Lumopath".into(),
            name: name.into(),
            category: category.into(),
            value: 1.0,
            unit: None,
            description: None,
            status: "The status of the metric is Active".into(),
            recorded_at: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
                + Duration::hours(hours),
        }
    }

    #[tokio::test]
    async fn find_all_orders_newest_first() {
        let db = setup_test_db().await;
        Metric::create(&db, snapshot("ARR", "revenue", 1)).await.unwrap();
        Metric::create(&db, snapshot("ARR", "revenue", 3)).await.unwrap();
        Metric::create(&db, snapshot("Churn", "customers", 2)).await.unwrap();

        let repo = MetricRepository::new(db);
        let rows = repo.find_all().await.unwrap();

        let hours: Vec<u32> = rows
            .iter()
            .map(|m| chrono::Timelike::hour(&m.recorded_at))
            .collect();
        assert_eq!(hours, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn find_all_by_category_filters_and_orders() {
        let db = setup_test_db().await;
        Metric::create(&db, snapshot("ARR", "revenue", 1)).await.unwrap();
        Metric::create(&db, snapshot("MRR", "revenue", 5)).await.unwrap();
        Metric::create(&db, snapshot("Churn", "customers", 9)).await.unwrap();

        let repo = MetricRepository::new(db);
        let rows = repo.find_all_by_category("revenue").await.unwrap();

        let names: Vec<&str> = rows.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["MRR", "ARR"]);
        assert!(repo.find_all_by_category("growth").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_by_id_returns_none_when_absent() {
        let db = setup_test_db().await;
        let created = Metric::create(&db, snapshot("ARR", "revenue", 1)).await.unwrap();

        let repo = MetricRepository::new(db);
        assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(created));
        assert_eq!(repo.find_by_id(9_999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn upsert_overwrites_existing_row_in_place() {
        let db = setup_test_db().await;
        let first = Metric::upsert(&db, 1, snapshot("ARR", "revenue", 1)).await.unwrap();

        let mut changed = snapshot("ARR", "revenue", 2);
        changed.value = 42.0;
        let second = Metric::upsert(&db, 1, changed).await.unwrap();

        assert_eq!(second.id, 1);
        assert_eq!(second.value, 42.0);
        assert_eq!(second.created_at, first.created_at);

        let repo = MetricRepository::new(db);
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }
}
