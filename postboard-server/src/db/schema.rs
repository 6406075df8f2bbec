//! Schema bootstrap, run once at startup

use sqlx::SqlitePool;

const SCHEMA: &str = include_str!("schema.sql");

/// Create the `users` and `posts` tables if they do not exist yet.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring database schema");
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}
