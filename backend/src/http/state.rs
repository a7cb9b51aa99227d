//! Application state for the HTTP server.

use std::sync::Arc;

use crate::directory::AirportFinder;
use crate::services::LocationService;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Lookup service over the loaded airport directory
    pub service: Arc<LocationService>,
}

impl AppState {
    /// Create a new application state around a lookup service.
    pub fn new(service: LocationService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// State with the default ranking policy over `finder`.
    pub fn from_finder(finder: Arc<dyn AirportFinder>) -> Self {
        Self::new(LocationService::new(finder))
    }
}
