use async_trait::async_trait;

use super::error::Result;

/// Connectivity check used by the readiness endpoint
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreProbe: Send + Sync {
    /// Succeeds when the store answers a trivial request.
    async fn check(&self) -> Result<()>;
}
