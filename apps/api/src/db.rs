use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::config::Config;

/// Creates the PostgreSQL connection pool. Connections are opened on first
/// use so the service still starts, and serves fallback roles, while the
/// database is unreachable.
pub fn create_pool(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(config.database_timeout)
        .connect_lazy(&config.database_url)?;

    info!(
        max_connections = config.database_max_connections,
        "PostgreSQL connection pool configured"
    );
    Ok(pool)
}
