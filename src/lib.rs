//! kost-service: REST backend for a kost rental listing platform
//!
//! The core is the nearby-listing pipeline: reverse-geocode the
//! requester's coordinates into an administrative region, rank that
//! region's active listings by great-circle distance, attach each
//! listing's cheapest-room price, and slice the result into pages or
//! display carousels.
//!
//! ## Quick Start
//!
//! ```rust
//! use kost_service::geo::distance::{distance_between, DistanceUnit};
//!
//! // Jakarta to Bandung, roughly 116 km
//! let km = distance_between(-6.2088, 106.8456, -6.9175, 107.6191, DistanceUnit::Kilometers);
//! assert!(km > 100.0 && km < 150.0);
//! ```
//!
//! Storage and geocoding sit behind the [`store::ListingStore`],
//! [`store::UomStore`], and [`geo::GeocodeProvider`] traits, so the
//! pipeline runs the same against the bundled in-memory store as
//! against a relational one.

pub mod config;
pub mod constants;
pub mod error;
pub mod geo;
pub mod model;
pub mod paging;
pub mod pricing;
pub mod ranking;
pub mod server;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use model::{Listing, Room, UnitOfMeasure};
pub use ranking::RankedListing;
pub use service::{NearbyPage, NearbyService};
