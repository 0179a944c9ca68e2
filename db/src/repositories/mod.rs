pub mod metric_repository;
