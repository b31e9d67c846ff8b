//! Domain layer for the Aquarium Manager backend.
//!
//! This crate contains:
//! - Reporting range and time boundary resolution
//! - Metrics snapshot models returned by the admin dashboard
//! - Domain error types

pub mod models;
