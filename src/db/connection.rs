//! Postgres pool setup

use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Open the admin store pool
pub async fn create_pool(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(url)
        .await?;

    tracing::debug!(max_connections, "Database pool created");
    Ok(pool)
}

/// Round-trip a trivial query to prove the pool is usable
pub async fn test_connection(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool).await?;
    Ok(())
}
