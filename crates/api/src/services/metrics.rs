//! Admin dashboard snapshot assembly.
//!
//! Fans the independent counting queries out concurrently and joins them
//! into one fixed-shape snapshot. The queries run without a transaction
//! against a live store, so counts may reflect slightly different instants
//! under concurrent writes (read-committed, not snapshot-isolated).

use chrono::{DateTime, Utc};
use domain::models::{
    AquariumMetrics, MeasurementMetrics, MetricsSnapshot, ReportingRange, TaskMetrics, UserMetrics,
};
use persistence::error::RepositoryError;
use persistence::repositories::{
    AquariumRepository, MeasurementRepository, TaskRepository, UserRepository,
};
use sqlx::PgPool;
use std::time::Instant;

/// Explanation attached to the snapshot when new-user counts cannot be
/// computed.
const USERS_CREATED_AT_NOTE: &str =
    "User creation timestamps are not recorded in this schema; new-user counts are unavailable";

/// Builds metrics snapshots for the admin dashboard.
#[derive(Clone)]
pub struct MetricsService {
    users: UserRepository,
    aquariums: AquariumRepository,
    tasks: TaskRepository,
    measurements: MeasurementRepository,
    latest_users_limit: i64,
}

impl MetricsService {
    pub fn new(pool: PgPool, latest_users_limit: i64) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            aquariums: AquariumRepository::new(pool.clone()),
            tasks: TaskRepository::new(pool.clone()),
            measurements: MeasurementRepository::new(pool),
            latest_users_limit,
        }
    }

    /// Build one complete snapshot for the given reporting range.
    ///
    /// `generated_at` is stamped before the queries are issued and doubles
    /// as the `now` the boundary is resolved against. A capability gap in
    /// the new-users counter degrades that one field to `null` plus a note;
    /// any other query failure fails the whole build, never yielding a
    /// partial snapshot.
    pub async fn build_snapshot(
        &self,
        range: ReportingRange,
    ) -> Result<MetricsSnapshot, RepositoryError> {
        let generated_at = Utc::now();
        let boundary = range.boundary(generated_at);
        let started = Instant::now();

        let (users, aquariums, tasks, measurements) = tokio::try_join!(
            self.user_metrics(boundary),
            self.aquarium_metrics(boundary),
            self.task_metrics(boundary),
            self.measurement_metrics(boundary),
        )?;

        crate::middleware::metrics::record_snapshot_build(
            &range.to_string(),
            started.elapsed().as_secs_f64(),
        );

        Ok(MetricsSnapshot {
            generated_at,
            range,
            users,
            aquariums,
            tasks,
            measurements,
        })
    }

    async fn user_metrics(
        &self,
        boundary: Option<DateTime<Utc>>,
    ) -> Result<UserMetrics, RepositoryError> {
        let (counts, active_in_range, latest, new_users) = tokio::try_join!(
            async { self.users.count().await.map_err(RepositoryError::from) },
            async {
                self.users
                    .count_active_since(boundary)
                    .await
                    .map_err(RepositoryError::from)
            },
            self.users.latest(self.latest_users_limit),
            async { downgrade_capability_gap(self.users.count_created_since(boundary).await) },
        )?;

        let note = new_users
            .is_none()
            .then(|| USERS_CREATED_AT_NOTE.to_string());

        Ok(UserMetrics {
            total: counts.total,
            admins: counts.admins,
            new_in_range: new_users,
            active_in_range,
            latest,
            note,
        })
    }

    async fn aquarium_metrics(
        &self,
        boundary: Option<DateTime<Utc>>,
    ) -> Result<AquariumMetrics, RepositoryError> {
        let (total, created_in_range) = tokio::try_join!(
            self.aquariums.count(),
            self.aquariums.count_created_since(boundary),
        )?;
        Ok(AquariumMetrics {
            total,
            created_in_range,
        })
    }

    async fn task_metrics(
        &self,
        boundary: Option<DateTime<Utc>>,
    ) -> Result<TaskMetrics, RepositoryError> {
        let (total, created_in_range, done_total, done_in_range) = tokio::try_join!(
            self.tasks.count(),
            self.tasks.count_created_since(boundary),
            self.tasks.count_done(),
            self.tasks.count_done_since(boundary),
        )?;
        Ok(TaskMetrics {
            total,
            created_in_range,
            done_total,
            done_in_range,
        })
    }

    async fn measurement_metrics(
        &self,
        boundary: Option<DateTime<Utc>>,
    ) -> Result<MeasurementMetrics, RepositoryError> {
        let (total, created_in_range) = tokio::try_join!(
            self.measurements.count(),
            self.measurements.count_created_since(boundary),
        )?;
        Ok(MeasurementMetrics {
            total,
            created_in_range,
        })
    }
}

/// Recover a capability gap as "unknown" while letting real failures
/// propagate. `None` means the aggregate cannot be computed, which is
/// distinct from a computed zero.
fn downgrade_capability_gap(
    result: Result<i64, RepositoryError>,
) -> Result<Option<i64>, RepositoryError> {
    match result {
        Ok(count) => Ok(Some(count)),
        Err(err) if err.is_capability_gap() => Ok(None),
        Err(err) => Err(err),
    }
}
