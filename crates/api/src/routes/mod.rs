//! HTTP route handlers.

pub mod admin_metrics;
pub mod health;
