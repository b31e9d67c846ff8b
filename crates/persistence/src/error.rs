//! Repository error taxonomy.

use thiserror::Error;

/// Errors surfaced by the counting repositories.
///
/// A capability gap is a schema limitation, not a query failure: callers
/// recover it locally (the affected aggregate degrades to `null` plus a
/// note) while `Database` errors fail the whole aggregation.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The current schema lacks the column required for this aggregate.
    #[error("Capability not supported by the current schema: {0}")]
    UnsupportedCapability(&'static str),

    /// Any underlying query failure.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl RepositoryError {
    /// Whether this error is a schema capability gap.
    pub fn is_capability_gap(&self) -> bool {
        matches!(self, RepositoryError::UnsupportedCapability(_))
    }
}
