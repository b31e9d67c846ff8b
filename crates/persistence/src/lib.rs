//! Persistence layer for the Aquarium Manager backend.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings)
//! - Repository implementations for the metrics counting queries

pub mod db;
pub mod entities;
pub mod error;
pub mod repositories;
