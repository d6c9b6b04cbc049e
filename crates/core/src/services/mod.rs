pub mod chart_service;
pub mod format_service;
pub mod metrics_service;
pub mod panel_service;
pub mod query_service;
