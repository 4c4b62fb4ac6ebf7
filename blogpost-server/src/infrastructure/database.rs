use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::infrastructure::settings::Settings;

fn pool_options(settings: &Settings) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(settings.database_max_connections)
        .acquire_timeout(Duration::from_secs(settings.database_acquire_timeout_secs))
}

pub(crate) async fn create_pool(settings: &Settings) -> Result<PgPool> {
    let pool = pool_options(settings)
        .connect(&settings.database_url)
        .await
        .context("failed to connect to database")?;

    info!(
        max_connections = settings.database_max_connections,
        "database pool created"
    );
    Ok(pool)
}

pub(crate) async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("failed to run database migrations")?;

    info!("database migrations applied");
    Ok(())
}

/// Pool that connects on first use; lets the server start without a reachable database.
#[cfg(test)]
pub(crate) fn lazy_pool(settings: &Settings) -> Result<PgPool> {
    pool_options(settings)
        .connect_lazy(&settings.database_url)
        .context("invalid DATABASE_URL")
}
