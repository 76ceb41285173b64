use crate::ports::store_probe::StoreProbe;
use crate::ports::Result;
use async_trait::async_trait;
use sqlx::PgPool;

/// Readiness probe backed by the connection pool
pub struct Probe {
    pool: PgPool,
}

impl Probe {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreProbe for Probe {
    /// Round-trips a trivial query through the pool
    async fn check(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
