pub mod metric;
pub mod metric_service;
pub mod metric_view;
pub mod service;
