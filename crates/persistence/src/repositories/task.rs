//! Maintenance task counting repository.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Repository for task metrics queries.
///
/// "Created in range" is keyed on `created_at`, "done in range" on
/// `completed_at`. The two windows are measured on different clocks and
/// must not be conflated.
#[derive(Clone)]
pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Unconditional task count.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tasks")
            .fetch_one(&self.pool)
            .await
    }

    /// Count tasks created at or after the boundary (all rows when `None`).
    pub async fn count_created_since(
        &self,
        boundary: Option<DateTime<Utc>>,
    ) -> Result<i64, sqlx::Error> {
        match boundary {
            Some(since) => {
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tasks WHERE created_at >= $1")
                    .bind(since)
                    .fetch_one(&self.pool)
                    .await
            }
            None => self.count().await,
        }
    }

    /// Unconditional count of completed tasks.
    pub async fn count_done(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tasks WHERE completed_at IS NOT NULL")
            .fetch_one(&self.pool)
            .await
    }

    /// Count tasks whose completion timestamp falls at or after the
    /// boundary (all completed tasks when `None`).
    pub async fn count_done_since(
        &self,
        boundary: Option<DateTime<Utc>>,
    ) -> Result<i64, sqlx::Error> {
        match boundary {
            Some(since) => {
                sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM tasks WHERE completed_at >= $1",
                )
                .bind(since)
                .fetch_one(&self.pool)
                .await
            }
            None => self.count_done().await,
        }
    }
}
