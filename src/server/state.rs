//! Server shared state
//!
//! Holds configuration and the nearby service with its injected
//! collaborators.

use crate::config::Config;
use crate::geo::GeocodeProvider;
use crate::service::NearbyService;
use crate::store::{ListingStore, UomStore};
use std::sync::Arc;

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration
    pub config: Config,

    /// The nearby pipeline and listing intake
    pub service: NearbyService,
}

impl AppState {
    /// Create new application state from injected collaborators
    pub fn new(
        config: Config,
        listings: Arc<dyn ListingStore>,
        uoms: Arc<dyn UomStore>,
        geocoder: Arc<dyn GeocodeProvider>,
    ) -> Self {
        Self {
            config,
            service: NearbyService::new(listings, uoms, geocoder),
        }
    }
}
