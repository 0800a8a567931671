//! Observability infrastructure - Prometheus metrics

mod config;
mod metrics;

pub use config::{MetricsConfig, ObservabilityConfig};
pub use metrics::{
    create_metrics_router, init_metrics, record_directory_search, record_http_request,
    record_userlink_lookup, PrometheusMetrics,
};
