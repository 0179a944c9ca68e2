pub mod m202506010001_create_metrics;
pub mod m202506010002_create_metric_indexes;
