use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One timestamped snapshot of a business metric.
///
/// `(company_name, category, name)` is not unique: every measurement is its
/// own row and readers resolve the history down to one current value.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "metrics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub company_name: String,
    pub name: String,
    pub category: String,

    #[sea_orm(column_type = "Double")]
    pub value: f64,
    pub unit: Option<String>,
    pub description: Option<String>,

    /// Free text; enablement is derived from substrings of it.
    pub status: String,

    pub recorded_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Fields supplied when recording a new snapshot.
#[derive(Debug, Clone)]
pub struct NewMetric {
    pub company_name: String,
    pub name: String,
    pub category: String,
    pub value: f64,
    pub unit: Option<String>,
    pub description: Option<String>,
    pub status: String,
    pub recorded_at: DateTime<Utc>,
}

impl NewMetric {
    fn into_active_model(self, now: DateTime<Utc>) -> ActiveModel {
        ActiveModel {
            company_name: Set(self.company_name),
            name: Set(self.name),
            category: Set(self.category),
            value: Set(self.value),
            unit: Set(self.unit),
            description: Set(self.description),
            status: Set(self.status),
            recorded_at: Set(self.recorded_at),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
    }
}

impl Model {
    pub async fn create(db: &DbConn, metric: NewMetric) -> Result<Model, DbErr> {
        metric.into_active_model(Utc::now()).insert(db).await
    }

    /// Inserts the snapshot under `id`, or overwrites the row that already has it.
    ///
    /// `created_at` is kept on overwrite.
    pub async fn upsert(db: &DbConn, id: i64, metric: NewMetric) -> Result<Model, DbErr> {
        let now = Utc::now();
        match Entity::find_by_id(id).one(db).await? {
            Some(existing) => {
                let mut active = metric.into_active_model(now);
                active.id = Set(id);
                active.created_at = Set(existing.created_at);
                active.update(db).await
            }
            None => {
                let mut active = metric.into_active_model(now);
                active.id = Set(id);
                active.insert(db).await
            }
        }
    }
}
