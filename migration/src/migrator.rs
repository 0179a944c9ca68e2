use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202506010001_create_metrics::Migration),
            Box::new(migrations::m202506010002_create_metric_indexes::Migration),
        ]
    }
}
