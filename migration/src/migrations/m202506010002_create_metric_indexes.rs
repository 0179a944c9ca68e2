use sea_orm_migration::prelude::*;

use super::m202506010001_create_metrics::Metrics;

const IDX_METRIC_KEY: &str = "idx_metrics_company_category_name";
const IDX_RECORDED_AT: &str = "idx_metrics_recorded_at";

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202506010002_create_metric_indexes"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Not unique: several snapshots of the same logical metric coexist.
        manager
            .create_index(
                Index::create()
                    .name(IDX_METRIC_KEY)
                    .table(Metrics::Table)
                    .col(Metrics::CompanyName)
                    .col(Metrics::Category)
                    .col(Metrics::Name)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RECORDED_AT)
                    .table(Metrics::Table)
                    .col(Metrics::RecordedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RECORDED_AT)
                    .table(Metrics::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_METRIC_KEY)
                    .table(Metrics::Table)
                    .to_owned(),
            )
            .await
    }
}
