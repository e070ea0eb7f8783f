use crate::config::DatabaseConfig;
use crate::error::Result;
use sqlx::{postgres::PgPoolOptions, PgPool};

/// Opens the connection pool and verifies the database answers with an
/// immediate round-trip. No retry or backoff; a failure here is startup
/// fatal for the caller.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(50)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(&config.connection_url())
        .await?;

    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(pool)
}
