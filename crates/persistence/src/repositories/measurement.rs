//! Water measurement counting repository.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Repository for water measurement metrics queries.
#[derive(Clone)]
pub struct MeasurementRepository {
    pool: PgPool,
}

impl MeasurementRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Unconditional measurement count.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM water_measurements")
            .fetch_one(&self.pool)
            .await
    }

    /// Count measurements recorded at or after the boundary (all rows when
    /// `None`).
    pub async fn count_created_since(
        &self,
        boundary: Option<DateTime<Utc>>,
    ) -> Result<i64, sqlx::Error> {
        match boundary {
            Some(since) => {
                sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM water_measurements WHERE created_at >= $1",
                )
                .bind(since)
                .fetch_one(&self.pool)
                .await
            }
            None => self.count().await,
        }
    }
}
