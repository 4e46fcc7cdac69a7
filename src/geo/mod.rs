//! Geocoding module
//!
//! Coordinate parsing/validation, the reverse-geocoding seam, and the
//! great-circle distance calculation used by the proximity ranker.

pub mod distance;
pub mod positionstack;

use crate::error::{Error, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A geographic coordinate (latitude, longitude) in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Parse coordinates from the decimal-degree strings the schema stores
    pub fn parse(lat: &str, lng: &str) -> Result<Self> {
        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| Error::InvalidCoordinates(format!("Invalid latitude: {}", lat)))?;
        let lng: f64 = lng
            .trim()
            .parse()
            .map_err(|_| Error::InvalidCoordinates(format!("Invalid longitude: {}", lng)))?;

        let coords = Self { lat, lng };
        coords.validate()?;
        Ok(coords)
    }

    /// Validate that coordinates are within valid ranges
    ///
    /// Latitude: -90 to 90
    /// Longitude: -180 to 180
    pub fn validate(&self) -> Result<()> {
        if self.lat < -90.0 || self.lat > 90.0 {
            return Err(Error::InvalidCoordinates(format!(
                "Latitude {} is out of range [-90, 90]",
                self.lat
            )));
        }
        if self.lng < -180.0 || self.lng > 180.0 {
            return Err(Error::InvalidCoordinates(format!(
                "Longitude {} is out of range [-180, 180]",
                self.lng
            )));
        }
        Ok(())
    }
}

/// Reverse-geocoding response: a list of candidate address matches
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Geolocation {
    #[serde(rename = "data", default)]
    pub matches: Vec<GeoMatch>,
}

impl Geolocation {
    /// The administrative region used to prefilter candidate listings
    ///
    /// Taken from the first match's county. An empty match list is a
    /// `NoGeolocationMatch` error, never an out-of-bounds access.
    pub fn region(&self) -> Result<&str> {
        self.matches
            .first()
            .map(|m| m.county.as_str())
            .ok_or(Error::NoGeolocationMatch)
    }
}

/// One candidate address match from the geocoder
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeoMatch {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub county: String,
    #[serde(default)]
    pub locality: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub label: String,
}

/// Trait for reverse-geocoding providers
#[async_trait]
pub trait GeocodeProvider: Send + Sync {
    /// Resolve coordinates to candidate address matches
    ///
    /// One attempt, no retry; upstream failures surface to the caller.
    async fn reverse(&self, lat: &str, lng: &str) -> Result<Geolocation>;
}
