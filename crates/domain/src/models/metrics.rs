//! Admin dashboard metrics domain models.
//!
//! Reporting ranges, time boundary resolution, and the snapshot shape
//! returned by the metrics endpoint.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Raised when a reporting range token is not recognized.
///
/// An unknown token is a client error, never silently treated as `all`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized reporting range: {0}")]
pub struct InvalidRangeError(pub String);

/// Caller-selected reporting window for "in range" counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportingRange {
    #[serde(rename = "1d")]
    LastDay,
    #[serde(rename = "7d")]
    Last7Days,
    #[serde(rename = "30d")]
    Last30Days,
    #[serde(rename = "365d")]
    Last365Days,
    #[serde(rename = "all")]
    All,
}

impl ReportingRange {
    /// Window length in days, or `None` for the unbounded range.
    pub fn window_days(&self) -> Option<i64> {
        match self {
            ReportingRange::LastDay => Some(1),
            ReportingRange::Last7Days => Some(7),
            ReportingRange::Last30Days => Some(30),
            ReportingRange::Last365Days => Some(365),
            ReportingRange::All => None,
        }
    }

    /// Resolve the absolute lower bound of the window.
    ///
    /// Returns `None` for `all` (no lower bound), otherwise `now - N days`
    /// in UTC. Deterministic given `now`: a shorter range always yields a
    /// boundary at or after a longer range's boundary.
    pub fn boundary(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.window_days().map(|days| now - Duration::days(days))
    }
}

impl FromStr for ReportingRange {
    type Err = InvalidRangeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "1d" => Ok(ReportingRange::LastDay),
            "7d" => Ok(ReportingRange::Last7Days),
            "30d" => Ok(ReportingRange::Last30Days),
            "365d" => Ok(ReportingRange::Last365Days),
            "all" => Ok(ReportingRange::All),
            other => Err(InvalidRangeError(other.to_string())),
        }
    }
}

impl fmt::Display for ReportingRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            ReportingRange::LastDay => "1d",
            ReportingRange::Last7Days => "7d",
            ReportingRange::Last30Days => "30d",
            ReportingRange::Last365Days => "365d",
            ReportingRange::All => "all",
        };
        write!(f, "{}", token)
    }
}

/// User role within the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    /// Map a stored role value; unknown values fall back to `User`.
    pub fn from_db(role: &str) -> Self {
        match role {
            "ADMIN" => UserRole::Admin,
            _ => UserRole::User,
        }
    }
}

/// One entry of the "latest users" sample shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct UserSummary {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
}

/// User counts for the selected window.
///
/// `new_in_range` is `None` when the schema exposes no creation timestamp
/// for users. That is a capability gap, not an empty result, so it
/// serializes as an explicit `null` (distinct from `0`) and `note` carries
/// the explanation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct UserMetrics {
    pub total: i64,
    pub admins: i64,
    pub new_in_range: Option<i64>,
    pub active_in_range: i64,
    pub latest: Vec<UserSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Aquarium counts for the selected window.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AquariumMetrics {
    pub total: i64,
    pub created_in_range: i64,
}

/// Task counts for the selected window.
///
/// `created_in_range` is keyed on creation time, `done_in_range` on
/// completion time. The two clocks are intentionally different.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TaskMetrics {
    pub total: i64,
    pub created_in_range: i64,
    pub done_total: i64,
    pub done_in_range: i64,
}

/// Water measurement counts for the selected window.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MeasurementMetrics {
    pub total: i64,
    pub created_in_range: i64,
}

/// Complete metrics snapshot returned for one dashboard request.
///
/// Computed on demand and never persisted. The counters run as independent
/// read queries against a live store, so the snapshot is read-committed
/// rather than an atomic point-in-time view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MetricsSnapshot {
    pub generated_at: DateTime<Utc>,
    pub range: ReportingRange,
    pub users: UserMetrics,
    pub aquariums: AquariumMetrics,
    pub tasks: TaskMetrics,
    pub measurements: MeasurementMetrics,
}
