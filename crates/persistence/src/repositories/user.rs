//! User counting and sampling repository.

use chrono::{DateTime, Utc};
use domain::models::UserSummary;
use sqlx::PgPool;
use tokio::sync::OnceCell;

use crate::entities::{UserCountRow, UserSummaryRow};
use crate::error::RepositoryError;

/// Process-lifetime cache of the users.created_at capability probe.
///
/// The missing column is a permanent schema property, so a single probe
/// per process is sufficient; a restart picks up schema changes.
static CREATED_AT_CAPABILITY: OnceCell<bool> = OnceCell::const_new();

/// Repository for user metrics queries.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Unconditional user counts: total rows and rows with role ADMIN.
    pub async fn count(&self) -> Result<UserCountRow, sqlx::Error> {
        sqlx::query_as::<_, UserCountRow>(
            r#"
            SELECT
                COUNT(*) as total,
                COUNT(*) FILTER (WHERE role = 'ADMIN') as admins
            FROM users
            "#,
        )
        .fetch_one(&self.pool)
        .await
    }

    /// Whether the users table carries a creation timestamp.
    ///
    /// Probed once against `information_schema` and cached for the process
    /// lifetime.
    pub async fn supports_created_at(&self) -> Result<bool, sqlx::Error> {
        let supported = CREATED_AT_CAPABILITY
            .get_or_try_init(|| async {
                let exists = sqlx::query_scalar::<_, bool>(
                    r#"
                    SELECT EXISTS (
                        SELECT 1 FROM information_schema.columns
                        WHERE table_name = 'users' AND column_name = 'created_at'
                    )
                    "#,
                )
                .fetch_one(&self.pool)
                .await?;

                if !exists {
                    tracing::warn!(
                        "users table has no created_at column; new-user counts will be unavailable"
                    );
                }
                Ok::<_, sqlx::Error>(exists)
            })
            .await?;
        Ok(*supported)
    }

    /// Count users created at or after the boundary (all rows when `None`).
    ///
    /// Fails with `UnsupportedCapability` when the schema records no
    /// creation timestamp for users.
    pub async fn count_created_since(
        &self,
        boundary: Option<DateTime<Utc>>,
    ) -> Result<i64, RepositoryError> {
        if !self.supports_created_at().await? {
            return Err(RepositoryError::UnsupportedCapability("users.created_at"));
        }

        let count = match boundary {
            Some(since) => {
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE created_at >= $1")
                    .bind(since)
                    .fetch_one(&self.pool)
                    .await?
            }
            None => {
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
                    .fetch_one(&self.pool)
                    .await?
            }
        };
        Ok(count)
    }

    /// Count users with login activity at or after the boundary.
    ///
    /// With no boundary this counts users that have *any* recorded login,
    /// not the static total: "active" stays range-scoped even for `all`.
    pub async fn count_active_since(
        &self,
        boundary: Option<DateTime<Utc>>,
    ) -> Result<i64, sqlx::Error> {
        match boundary {
            Some(since) => {
                sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM users WHERE last_login_at >= $1",
                )
                .bind(since)
                .fetch_one(&self.pool)
                .await
            }
            None => {
                sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM users WHERE last_login_at IS NOT NULL",
                )
                .fetch_one(&self.pool)
                .await
            }
        }
    }

    /// The most recently created users, newest first, id descending as the
    /// tie-break. Ignores the reporting range.
    ///
    /// Without a creation timestamp in the schema the sample falls back to
    /// id-descending order. An empty table yields an empty vec.
    pub async fn latest(&self, limit: i64) -> Result<Vec<UserSummary>, RepositoryError> {
        let order = if self.supports_created_at().await? {
            "ORDER BY created_at DESC, id DESC"
        } else {
            "ORDER BY id DESC"
        };
        let sql = format!(
            "SELECT id, full_name, email, role FROM users {} LIMIT $1",
            order
        );

        let rows = sqlx::query_as::<_, UserSummaryRow>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
