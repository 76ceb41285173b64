use crate::ports::store_probe::StoreProbe;
use crate::ports::{Result, StoreError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};

/// Readiness probe for the in-memory stores
///
/// Always ready unless switched off, which lets tests exercise an outage.
pub struct Probe {
    available: AtomicBool,
}

impl Probe {
    pub fn new() -> Self {
        Self {
            available: AtomicBool::new(true),
        }
    }

    /// Makes `check` fail with a backend error while `available` is false.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }
}

impl Default for Probe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StoreProbe for Probe {
    async fn check(&self) -> Result<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::backend(std::io::Error::new(
                std::io::ErrorKind::NotConnected,
                "in-memory store marked unavailable",
            )))
        }
    }
}
