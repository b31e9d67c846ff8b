//! Integration tests for snapshot assembly against a schema that does
//! record user creation timestamps.
//!
//! Column detection is cached per process, so this suite lives in its
//! own test binary: it extends the schema before the first snapshot is
//! built and restores the stock shape when done.
//!
//! Requires a running PostgreSQL instance; the test skips itself when
//! TEST_DATABASE_URL is not set.

mod common;

use aquarium_manager_api::services::MetricsService;
use chrono::{Duration, Utc};
use domain::models::ReportingRange;
use uuid::Uuid;

fn user_id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

#[tokio::test]
async fn test_snapshot_with_user_creation_timestamps() {
    let Some(pool) = common::try_create_test_pool().await else {
        eprintln!("Skipping: TEST_DATABASE_URL not set");
        return;
    };
    common::add_users_created_at(&pool).await;
    common::cleanup_all_test_data(&pool).await;

    // Ten users, two admins. Three created within the last day; users 8
    // and 9 share a timestamp to exercise the id tie-break.
    let now = Utc::now();
    for n in 1..=10u128 {
        let role = if n <= 2 { "ADMIN" } else { "USER" };
        let created_at = match n {
            10 => now - Duration::minutes(30),
            8 | 9 => now - Duration::hours(1),
            _ => now - Duration::days(10),
        };
        common::insert_user_created_at(
            &pool,
            user_id(n),
            &format!("User {}", n),
            &format!("user{}@example.com", n),
            role,
            created_at,
        )
        .await;
    }

    let service = MetricsService::new(pool.clone(), 3);

    // With the column present, new-user counts are real numbers and the
    // degradation note is absent.
    let daily = service
        .build_snapshot(ReportingRange::LastDay)
        .await
        .expect("Failed to build 1d snapshot");
    assert_eq!(daily.users.total, 10);
    assert_eq!(daily.users.admins, 2);
    assert_eq!(daily.users.new_in_range, Some(3));
    assert_eq!(daily.users.note, None);

    // Unbounded range counts every user as new.
    let all = service
        .build_snapshot(ReportingRange::All)
        .await
        .expect("Failed to build all snapshot");
    assert_eq!(all.users.new_in_range, Some(10));

    // Sample ordering: newest creation first, id descending on ties,
    // capped at the configured limit.
    let sampled: Vec<Uuid> = all.users.latest.iter().map(|u| u.id).collect();
    assert_eq!(sampled, vec![user_id(10), user_id(9), user_id(8)]);

    // Put the schema back so suites running against the stock shape see
    // the column absent again.
    common::cleanup_all_test_data(&pool).await;
    common::drop_users_created_at(&pool).await;
}
