//! User row mappings for the metrics queries.

use domain::models::{UserRole, UserSummary};
use sqlx::FromRow;
use uuid::Uuid;

/// Aggregate counts over the users table.
#[derive(Debug, Clone, FromRow)]
pub struct UserCountRow {
    pub total: i64,
    pub admins: i64,
}

/// Row mapping for the "latest users" sample.
#[derive(Debug, Clone, FromRow)]
pub struct UserSummaryRow {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub role: String,
}

impl From<UserSummaryRow> for UserSummary {
    fn from(row: UserSummaryRow) -> Self {
        Self {
            id: row.id,
            full_name: row.full_name,
            email: row.email,
            role: UserRole::from_db(&row.role),
        }
    }
}
