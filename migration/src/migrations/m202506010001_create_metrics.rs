// migrations/m202506010001_create_metrics.rs
use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
pub enum Metrics {
    Table,
    Id,
    CompanyName,
    Name,
    Category,
    Value,
    Unit,
    Description,
    Status,
    RecordedAt,
    CreatedAt,
    UpdatedAt,
}

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202506010001_create_metrics"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Metrics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Metrics::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Metrics::CompanyName).text().not_null())
                    .col(ColumnDef::new(Metrics::Name).text().not_null())
                    .col(ColumnDef::new(Metrics::Category).text().not_null())
                    .col(ColumnDef::new(Metrics::Value).double().not_null())
                    .col(ColumnDef::new(Metrics::Unit).text().null())
                    .col(ColumnDef::new(Metrics::Description).text().null())
                    .col(
                        ColumnDef::new(Metrics::Status)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Metrics::RecordedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Metrics::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("CURRENT_TIMESTAMP")),
                    )
                    .col(
                        ColumnDef::new(Metrics::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("CURRENT_TIMESTAMP")),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Metrics::Table).to_owned())
            .await
    }
}
