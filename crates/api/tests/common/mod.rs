//! Shared helpers for integration tests.
//!
//! These tests run against a real PostgreSQL instance addressed by the
//! TEST_DATABASE_URL environment variable. Each suite skips itself when
//! the variable is not set, so `cargo test` stays green without a
//! database.

#![allow(dead_code)]

use aquarium_manager_api::config::{
    Config, DashboardConfig, DatabaseConfig, LoggingConfig, SecurityConfig, ServerConfig,
};
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use uuid::Uuid;

/// Connect to the test database and apply migrations.
///
/// Returns `None` when TEST_DATABASE_URL is not set; callers skip the
/// test in that case.
pub async fn try_create_test_pool() -> Option<PgPool> {
    let database_url = std::env::var("TEST_DATABASE_URL").ok()?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("../persistence/src/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    Some(pool)
}

/// Configuration for exercising the router without config files.
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            request_timeout_secs: 30,
        },
        database: DatabaseConfig {
            url: String::new(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout_secs: 10,
            idle_timeout_secs: 600,
        },
        logging: LoggingConfig {
            level: "info".to_string(),
            format: "pretty".to_string(),
        },
        security: SecurityConfig {
            cors_origins: vec![],
        },
        dashboard: DashboardConfig {
            latest_users_limit: 5,
        },
    }
}

/// Remove every row from the metric source tables.
pub async fn cleanup_all_test_data(pool: &PgPool) {
    sqlx::query("TRUNCATE water_measurements, tasks, aquariums, users CASCADE")
        .execute(pool)
        .await
        .expect("Failed to truncate test tables");
}

/// Restore the stock schema shape: no creation timestamp on users.
pub async fn drop_users_created_at(pool: &PgPool) {
    sqlx::query("ALTER TABLE users DROP COLUMN IF EXISTS created_at")
        .execute(pool)
        .await
        .expect("Failed to drop users.created_at");
}

/// Extend the schema with a creation timestamp on users.
pub async fn add_users_created_at(pool: &PgPool) {
    sqlx::query(
        "ALTER TABLE users ADD COLUMN IF NOT EXISTS created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()",
    )
    .execute(pool)
    .await
    .expect("Failed to add users.created_at");
}

pub async fn insert_user(
    pool: &PgPool,
    id: Uuid,
    full_name: &str,
    email: &str,
    role: &str,
    last_login_at: Option<DateTime<Utc>>,
) {
    sqlx::query(
        "INSERT INTO users (id, full_name, email, role, last_login_at) VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(id)
    .bind(full_name)
    .bind(email)
    .bind(role)
    .bind(last_login_at)
    .execute(pool)
    .await
    .expect("Failed to insert user");
}

/// Insert a user with an explicit creation timestamp. Requires the schema
/// extended by [`add_users_created_at`].
pub async fn insert_user_created_at(
    pool: &PgPool,
    id: Uuid,
    full_name: &str,
    email: &str,
    role: &str,
    created_at: DateTime<Utc>,
) {
    sqlx::query(
        "INSERT INTO users (id, full_name, email, role, created_at) VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(id)
    .bind(full_name)
    .bind(email)
    .bind(role)
    .bind(created_at)
    .execute(pool)
    .await
    .expect("Failed to insert user");
}

pub async fn insert_aquarium(
    pool: &PgPool,
    id: Uuid,
    owner_id: Uuid,
    name: &str,
    created_at: DateTime<Utc>,
) {
    sqlx::query("INSERT INTO aquariums (id, owner_id, name, created_at) VALUES ($1, $2, $3, $4)")
        .bind(id)
        .bind(owner_id)
        .bind(name)
        .bind(created_at)
        .execute(pool)
        .await
        .expect("Failed to insert aquarium");
}

pub async fn insert_task(
    pool: &PgPool,
    aquarium_id: Uuid,
    title: &str,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
) {
    sqlx::query(
        "INSERT INTO tasks (aquarium_id, title, created_at, completed_at) VALUES ($1, $2, $3, $4)",
    )
    .bind(aquarium_id)
    .bind(title)
    .bind(created_at)
    .bind(completed_at)
    .execute(pool)
    .await
    .expect("Failed to insert task");
}

pub async fn insert_measurement(pool: &PgPool, aquarium_id: Uuid, created_at: DateTime<Utc>) {
    sqlx::query(
        "INSERT INTO water_measurements (aquarium_id, temperature_celsius, ph, created_at) \
         VALUES ($1, 24.5, 7.0, $2)",
    )
    .bind(aquarium_id)
    .bind(created_at)
    .execute(pool)
    .await
    .expect("Failed to insert measurement");
}
