use crate::config::{ConfigError, DatabaseConfig};
use sqlx::{PgPool, postgres::PgPoolOptions};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PoolError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to connect to postgres")]
    Connect(#[source] sqlx::Error),

    #[error("failed to run database migrations")]
    Migrate(#[source] sqlx::migrate::MigrateError),
}

/// Opens a connection pool sized by `config`
///
/// The minimum is clamped to the maximum. Connections are pinged before they
/// are handed out and closed after `idle_timeout` of inactivity.
///
/// # Errors
/// - Config: `DATABASE_URL` does not parse
/// - Connect: the initial connections could not be opened
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, PoolError> {
    let options = config.connect_options()?;

    PgPoolOptions::new()
        .min_connections(config.effective_min_connections())
        .max_connections(config.max_connections)
        .idle_timeout(config.idle_timeout)
        .test_before_acquire(true)
        .connect_with(options)
        .await
        .map_err(PoolError::Connect)
}

/// Applies the embedded migrations from `./migrations`
pub async fn migrate(pool: &PgPool) -> Result<(), PoolError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(PoolError::Migrate)
}
