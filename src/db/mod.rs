//! Admin and user storage
//!
//! Repositories are traits with a Postgres implementation for deployments
//! and an in-memory one for local runs and tests.

pub mod connection;
pub mod memory;
pub mod repositories;

use sqlx::PgPool;

pub use connection::{create_pool, test_connection};

/// Apply the `admins` and `users` schema
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
