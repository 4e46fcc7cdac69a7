//! Storage seams
//!
//! The listing and unit-of-measure tables sit behind injected trait
//! objects; nothing in the crate reaches a process-global database
//! handle. `memory::MemoryStore` is the bundled implementation.

pub mod memory;

use crate::error::Result;
use crate::model::{Listing, Room, UnitOfMeasure};
use async_trait::async_trait;

/// Access to listings and their rooms
#[async_trait]
pub trait ListingStore: Send + Sync {
    /// Active listings whose city matches the region
    /// (case-insensitive equality)
    async fn find_active_by_region(&self, region: &str) -> Result<Vec<Listing>>;

    async fn find_by_id(&self, id: u32) -> Result<Option<Listing>>;

    async fn find_rooms_by_listing(&self, listing_id: u32) -> Result<Vec<Room>>;

    /// Insert a listing, assigning its id
    async fn insert_listing(&self, listing: Listing) -> Result<Listing>;

    /// Insert a room, assigning its id
    async fn insert_room(&self, room: Room) -> Result<Room>;
}

/// Access to the read-only unit-of-measure reference table
#[async_trait]
pub trait UomStore: Send + Sync {
    async fn find_by_id(&self, id: u32) -> Result<Option<UnitOfMeasure>>;

    /// Human-readable description for a UOM id
    ///
    /// An unknown id yields an empty string, mirroring how the display
    /// layer renders a missing unit.
    async fn describe(&self, id: u32) -> Result<String>;
}
