//! In-memory store
//!
//! Backs the default wiring and the test suite. A relational store can
//! implement the same traits without touching the pipeline.

use crate::error::Result;
use crate::model::{Listing, Room, UnitOfMeasure};
use crate::store::{ListingStore, UomStore};
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    listings: Vec<Listing>,
    rooms: Vec<Room>,
    uoms: Vec<UnitOfMeasure>,
    next_listing_id: u32,
    next_room_id: u32,
}

/// In-memory implementation of both store traits
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_listing_id: 1,
                next_room_id: 1,
                ..Inner::default()
            }),
        }
    }

    /// Add a unit of measure to the reference table
    pub async fn insert_uom(&self, uom: UnitOfMeasure) {
        let mut inner = self.inner.write().await;
        inner.uoms.push(uom);
    }
}

#[async_trait]
impl ListingStore for MemoryStore {
    async fn find_active_by_region(&self, region: &str) -> Result<Vec<Listing>> {
        let inner = self.inner.read().await;
        Ok(inner
            .listings
            .iter()
            .filter(|l| l.is_active && l.city.eq_ignore_ascii_case(region))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: u32) -> Result<Option<Listing>> {
        let inner = self.inner.read().await;
        Ok(inner.listings.iter().find(|l| l.id == id).cloned())
    }

    async fn find_rooms_by_listing(&self, listing_id: u32) -> Result<Vec<Room>> {
        let inner = self.inner.read().await;
        Ok(inner
            .rooms
            .iter()
            .filter(|r| r.listing_id == listing_id)
            .cloned()
            .collect())
    }

    async fn insert_listing(&self, mut listing: Listing) -> Result<Listing> {
        let mut inner = self.inner.write().await;
        listing.id = inner.next_listing_id;
        inner.next_listing_id += 1;
        inner.listings.push(listing.clone());
        Ok(listing)
    }

    async fn insert_room(&self, mut room: Room) -> Result<Room> {
        let mut inner = self.inner.write().await;
        room.id = inner.next_room_id;
        inner.next_room_id += 1;
        inner.rooms.push(room.clone());
        Ok(room)
    }
}

#[async_trait]
impl UomStore for MemoryStore {
    async fn find_by_id(&self, id: u32) -> Result<Option<UnitOfMeasure>> {
        let inner = self.inner.read().await;
        Ok(inner.uoms.iter().find(|u| u.id == id).cloned())
    }

    async fn describe(&self, id: u32) -> Result<String> {
        let inner = self.inner.read().await;
        Ok(inner
            .uoms
            .iter()
            .find(|u| u.id == id)
            .map(|u| u.description.clone())
            .unwrap_or_default())
    }
}
