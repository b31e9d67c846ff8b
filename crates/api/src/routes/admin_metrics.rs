//! Admin dashboard metrics routes.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::services::MetricsService;
use domain::models::ReportingRange;

/// Query parameters for the metrics endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MetricsQuery {
    /// Reporting range token; the dashboard's initial view when absent.
    pub range: Option<String>,
}

/// GET /api/v1/admin/metrics
///
/// Build and return a metrics snapshot for the requested reporting range.
/// An unrecognized range token is a 400; any counting-query failure is a
/// 500 with no partial snapshot.
pub async fn get_admin_metrics(
    State(state): State<AppState>,
    Query(query): Query<MetricsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let range = match query.range.as_deref() {
        Some(token) => token.parse::<ReportingRange>()?,
        None => ReportingRange::Last7Days,
    };

    let service = MetricsService::new(
        state.pool.clone(),
        state.config.dashboard.latest_users_limit,
    );
    let snapshot = service.build_snapshot(range).await?;

    info!(
        range = %range,
        user_total = snapshot.users.total,
        aquarium_total = snapshot.aquariums.total,
        task_total = snapshot.tasks.total,
        measurement_total = snapshot.measurements.total,
        "Built admin metrics snapshot"
    );

    Ok((StatusCode::OK, Json(snapshot)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_query_deserializes_range() {
        let query: MetricsQuery = serde_json::from_str(r#"{"range":"30d"}"#).unwrap();
        assert_eq!(query.range.as_deref(), Some("30d"));
    }

    #[test]
    fn test_metrics_query_range_is_optional() {
        let query: MetricsQuery = serde_json::from_str("{}").unwrap();
        assert!(query.range.is_none());
    }

    #[test]
    fn test_default_range_is_seven_days() {
        // Mirrors the handler's fallback for an absent range parameter.
        let range = None::<String>
            .as_deref()
            .map(str::parse::<ReportingRange>)
            .transpose()
            .unwrap()
            .unwrap_or(ReportingRange::Last7Days);
        assert_eq!(range, ReportingRange::Last7Days);
    }
}
