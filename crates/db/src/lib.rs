//! Persistence layer: pool management, the scoped query builder, entity
//! models and repositories.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod scope;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Create a connection pool, retrying up to `attempts` times with a fixed
/// `backoff` between failures. The last error is returned when every
/// attempt fails.
pub async fn connect_with_retry(
    database_url: &str,
    attempts: u32,
    backoff: Duration,
) -> Result<DbPool, sqlx::Error> {
    let attempts = attempts.max(1);
    let mut attempt = 1;
    loop {
        match create_pool(database_url).await {
            Ok(pool) => return Ok(pool),
            Err(err) if attempt < attempts => {
                tracing::warn!(
                    attempt,
                    max_attempts = attempts,
                    error = %err,
                    "Database connection failed, retrying",
                );
                tokio::time::sleep(backoff).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

/// Round-trip a trivial query to confirm the pool can reach the server.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
