pub mod bookings;
pub mod classes;
pub mod health;
pub mod members;

use crate::application::ServiceDependencies;
use crate::ports::StoreProbe;
use std::sync::Arc;

/// Application state shared by the handlers
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
    /// Used by the readiness endpoint only
    pub store_probe: Arc<dyn StoreProbe>,
}

impl AppState {
    pub fn new(service_deps: ServiceDependencies, store_probe: Arc<dyn StoreProbe>) -> Self {
        Self {
            service_deps,
            store_probe,
        }
    }
}
