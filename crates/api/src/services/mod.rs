//! Application services.

pub mod metrics;

pub use metrics::MetricsService;
