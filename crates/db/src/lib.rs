//! PostgreSQL access to the postal and address master tables.
//!
//! Provides pool bootstrap, migrations, repositories over the reference
//! tables, and [`PgReferenceStore`], the sqlx-backed
//! [`ReferenceLookup`](jusho_core::ReferenceLookup) implementation.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod reference_store;
pub mod repositories;

pub use reference_store::PgReferenceStore;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
///
/// `acquire_timeout` bounds how long a caller waits for a free connection.
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
