//! Domain models for the Aquarium Manager backend.

pub mod metrics;

pub use metrics::{
    AquariumMetrics, InvalidRangeError, MeasurementMetrics, MetricsSnapshot, ReportingRange,
    TaskMetrics, UserMetrics, UserRole, UserSummary,
};
