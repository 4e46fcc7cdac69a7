//! Domain model for kost listings
//!
//! Mirrors the relational schema: a listing owns rooms, and room price/area
//! units reference the read-only unit-of-measure table. Rooms and facilities
//! are reached through the store, not embedded in the listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a listing
///
/// Created as `New`, moved to `Approved` or `Rejected` by a single admin
/// action. The nearby pipeline only ever reads this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    New,
    Approved,
    Rejected,
}

impl Default for ListingStatus {
    fn default() -> Self {
        Self::New
    }
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::New => write!(f, "new"),
            Self::Approved => write!(f, "approved"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

/// Category of a unit of measure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UomCategory {
    Currency,
    Length,
    Other,
}

impl std::fmt::Display for UomCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Currency => write!(f, "currency"),
            Self::Length => write!(f, "length"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Gender restriction on a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenderPolicy {
    Any,
    Male,
    Female,
}

impl Default for GenderPolicy {
    fn default() -> Self {
        Self::Any
    }
}

/// A boarding-house property available for rent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: u32,
    pub owner_id: u32,
    pub code: String,
    pub name: String,
    pub country: String,
    pub city: String,
    pub address: String,
    /// Decimal-degree string, as stored by the schema
    pub latitude: String,
    /// Decimal-degree string, as stored by the schema
    pub longitude: String,
    pub status: ListingStatus,
    pub is_verified: bool,
    pub is_active: bool,
    /// Derived from the first room's first picture at publication
    pub thumbnail_url: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

/// A rentable unit within a listing
///
/// `price_uom` must reference a currency unit and `area_uom` a length
/// unit; room intake enforces both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: u32,
    pub listing_id: u32,
    pub description: String,
    pub price: f64,
    pub price_uom: u32,
    pub area: f64,
    pub area_uom: u32,
    pub capacity: u32,
    pub floor_level: u32,
    pub gender: GenderPolicy,
    pub is_active: bool,
}

/// Read-only reference data describing a price or area unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitOfMeasure {
    pub id: u32,
    pub category: UomCategory,
    pub description: String,
    /// Conversion rate relative to the category's base unit
    pub rate: f64,
    pub is_active: bool,
}

/// Intake payload for a new listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewListing {
    pub owner_id: u32,
    pub name: String,
    pub country: String,
    pub city: String,
    pub address: String,
    pub latitude: String,
    pub longitude: String,
    #[serde(default)]
    pub thumbnail_url: String,
}

/// Intake payload for a new room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRoom {
    pub description: String,
    pub price: f64,
    pub price_uom: u32,
    pub length: f64,
    pub width: f64,
    pub area_uom: u32,
    pub capacity: u32,
    #[serde(default)]
    pub floor_level: u32,
    #[serde(default)]
    pub gender: GenderPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_status_serialization() {
        let json = serde_json::to_string(&ListingStatus::Approved).unwrap();
        assert_eq!(json, "\"approved\"");

        let parsed: ListingStatus = serde_json::from_str("\"rejected\"").unwrap();
        assert_eq!(parsed, ListingStatus::Rejected);
    }

    #[test]
    fn test_listing_status_default_is_new() {
        assert_eq!(ListingStatus::default(), ListingStatus::New);
    }

    #[test]
    fn test_uom_category_display() {
        assert_eq!(UomCategory::Currency.to_string(), "currency");
        assert_eq!(UomCategory::Length.to_string(), "length");
    }

    #[test]
    fn test_new_room_defaults() {
        let json = r#"{
            "description": "single bed",
            "price": 500000.0,
            "price_uom": 1,
            "length": 3.0,
            "width": 4.0,
            "area_uom": 2,
            "capacity": 1
        }"#;

        let room: NewRoom = serde_json::from_str(json).unwrap();
        assert_eq!(room.floor_level, 0);
        assert_eq!(room.gender, GenderPolicy::Any);
    }
}
