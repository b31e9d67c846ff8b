//! Aquarium counting repository.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Repository for aquarium metrics queries.
#[derive(Clone)]
pub struct AquariumRepository {
    pool: PgPool,
}

impl AquariumRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Unconditional aquarium count.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM aquariums")
            .fetch_one(&self.pool)
            .await
    }

    /// Count aquariums created at or after the boundary (all rows when `None`).
    pub async fn count_created_since(
        &self,
        boundary: Option<DateTime<Utc>>,
    ) -> Result<i64, sqlx::Error> {
        match boundary {
            Some(since) => {
                sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM aquariums WHERE created_at >= $1",
                )
                .bind(since)
                .fetch_one(&self.pool)
                .await
            }
            None => self.count().await,
        }
    }
}
