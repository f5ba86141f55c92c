//! Database pool and migrations.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::DatabaseConfig;
use crate::error::Result;

/// Connect to `config.url` and bring the schema up to date.
pub async fn create_pool_and_migrate(config: &DatabaseConfig) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;
    run_migrations(&pool).await?;
    tracing::info!(
        max_connections = config.max_connections,
        "database connection established"
    );
    Ok(pool)
}

/// Run embedded migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
