//! Centralized constants for the kost-service crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// External API endpoints
pub mod api {
    /// positionstack reverse-geocoding API
    pub const POSITIONSTACK_URL: &str = "http://api.positionstack.com/v1/reverse";
}

/// Pagination defaults
pub mod paging {
    /// Listings per page in nearby results
    pub const DEFAULT_PAGE_SIZE: usize = 10;

    /// Listings per display carousel
    pub const DEFAULT_CAROUSEL_SIZE: usize = 3;

    /// Ranked listings fetched for the carousel view
    pub const DEFAULT_CAROUSEL_LIMIT: usize = 20;
}
