//! Error types for the kost service

use thiserror::Error;

/// Main error type for kost-service operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Geocoder unavailable: {0}")]
    GeocodeUnavailable(String),

    #[error("No geolocation match for the given coordinates")]
    NoGeolocationMatch,

    #[error("Invalid page number: {0}")]
    InvalidPage(i64),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid unit of measure: {0}")]
    InvalidUom(String),

    #[error("Kost {0} not found")]
    NotFound(u32),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for kost-service operations
pub type Result<T> = std::result::Result<T, Error>;
