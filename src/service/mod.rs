//! Nearby-listing pipeline and listing intake
//!
//! `NearbyService` owns the steps behind the nearby endpoints: reverse-
//! geocode the origin into an administrative region, pull the active
//! listings for that region, rank them by distance, attach each
//! listing's cheapest-room price, then slice into pages or carousels.
//! Intake (listing and room creation) lives here too because it shares
//! the stores and the unit-of-measure invariants.

use std::sync::Arc;

use chrono::{Datelike, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::geo::{Coordinates, GeocodeProvider};
use crate::model::{Listing, ListingStatus, NewListing, NewRoom, Room, UomCategory};
use crate::paging;
use crate::pricing::{self, PriceTag};
use crate::ranking::{self, RankedListing};
use crate::store::{ListingStore, UomStore};

/// One listing in a nearby response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyListing {
    pub id: u32,
    pub name: String,
    pub city: String,
    pub thumbnail_url: String,
    pub distance_km: f64,
    pub price: f64,
    pub currency: String,
}

/// A page of ranked nearby listings
///
/// `total_count` is the size of the rankable candidate set before
/// pagination, so clients can render page controls. Listings skipped
/// for unparseable coordinates are not counted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyPage {
    pub items: Vec<NearbyListing>,
    pub total_count: usize,
}

/// Orchestrates the nearby pipeline over injected collaborators
pub struct NearbyService {
    listings: Arc<dyn ListingStore>,
    uoms: Arc<dyn UomStore>,
    geocoder: Arc<dyn GeocodeProvider>,
}

impl NearbyService {
    pub fn new(
        listings: Arc<dyn ListingStore>,
        uoms: Arc<dyn UomStore>,
        geocoder: Arc<dyn GeocodeProvider>,
    ) -> Self {
        Self {
            listings,
            uoms,
            geocoder,
        }
    }

    /// Ranked listings near the origin, one page at a time
    ///
    /// A region with no active listings is a valid empty page, not an
    /// error; a geocoder with no match for the origin is
    /// `NoGeolocationMatch`.
    pub async fn list_nearby(
        &self,
        lat: &str,
        lng: &str,
        page_number: i64,
        page_size: usize,
    ) -> Result<NearbyPage> {
        if page_number <= 0 {
            return Err(Error::InvalidPage(page_number));
        }
        let page_number = page_number as usize;

        let origin = Coordinates::parse(lat, lng)?;
        let region = self.resolve_region(lat, lng).await?;
        debug!(region = %region, "resolved origin region");

        let candidates = self.listings.find_active_by_region(&region).await?;
        let measured = ranking::measure_distances(origin, candidates);
        // listings skipped for bad coordinates do not count towards the total
        let total_count = measured.len();
        if measured.is_empty() {
            return Ok(NearbyPage {
                items: Vec::new(),
                total_count: 0,
            });
        }

        // rank only as deep as the requested page reaches
        let limit = page_number * page_size;
        let ranked = ranking::extract_nearest(measured, limit);
        let enriched = self.enrich(ranked).await?;
        let items = paging::page(&enriched, page_number, page_size).to_vec();

        Ok(NearbyPage { items, total_count })
    }

    /// Ranked nearby listings grouped into display carousels
    pub async fn nearby_carousels(
        &self,
        lat: &str,
        lng: &str,
        limit: usize,
        carousel_size: usize,
    ) -> Result<Vec<Vec<NearbyListing>>> {
        let origin = Coordinates::parse(lat, lng)?;
        let region = self.resolve_region(lat, lng).await?;

        let candidates = self.listings.find_active_by_region(&region).await?;
        let ranked = ranking::rank_by_proximity(origin, candidates, limit);
        let enriched = self.enrich(ranked).await?;

        Ok(paging::bucket(&enriched, carousel_size))
    }

    /// Cheapest-room price tag for one listing
    pub async fn cheapest_room_price(&self, listing_id: u32) -> Result<PriceTag> {
        if self.listings.find_by_id(listing_id).await?.is_none() {
            return Err(Error::NotFound(listing_id));
        }

        let rooms = self.listings.find_rooms_by_listing(listing_id).await?;
        pricing::price_tag(&rooms, self.uoms.as_ref()).await
    }

    /// Fetch one listing
    pub async fn get_listing(&self, listing_id: u32) -> Result<Listing> {
        self.listings
            .find_by_id(listing_id)
            .await?
            .ok_or(Error::NotFound(listing_id))
    }

    /// Fetch a listing's rooms
    pub async fn get_rooms(&self, listing_id: u32) -> Result<Vec<Room>> {
        if self.listings.find_by_id(listing_id).await?.is_none() {
            return Err(Error::NotFound(listing_id));
        }
        self.listings.find_rooms_by_listing(listing_id).await
    }

    /// Create a listing; status starts as `New` pending admin review
    pub async fn create_listing(&self, new: NewListing) -> Result<Listing> {
        Coordinates::parse(&new.latitude, &new.longitude)?;

        let now = Utc::now();
        let listing = Listing {
            id: 0,
            owner_id: new.owner_id,
            code: generate_code("KOST", &new.country, &new.city),
            name: new.name,
            country: new.country,
            city: new.city,
            address: new.address,
            latitude: new.latitude,
            longitude: new.longitude,
            status: ListingStatus::New,
            is_verified: false,
            is_active: true,
            thumbnail_url: new.thumbnail_url,
            created: now,
            modified: now,
        };

        let listing = self.listings.insert_listing(listing).await?;
        info!(id = listing.id, city = %listing.city, "created listing");
        Ok(listing)
    }

    /// Add a room to a listing, validating its unit references
    ///
    /// The price unit must be a currency and the area unit a length;
    /// either violation fails the whole operation.
    pub async fn add_room(&self, listing_id: u32, new: NewRoom) -> Result<Room> {
        if self.listings.find_by_id(listing_id).await?.is_none() {
            return Err(Error::NotFound(listing_id));
        }

        let price_uom = self
            .uoms
            .find_by_id(new.price_uom)
            .await?
            .ok_or_else(|| Error::InvalidUom(format!("unknown price UOM {}", new.price_uom)))?;
        if price_uom.category != UomCategory::Currency {
            return Err(Error::InvalidUom(format!(
                "price UOM {} is not a currency",
                new.price_uom
            )));
        }

        let area_uom = self
            .uoms
            .find_by_id(new.area_uom)
            .await?
            .ok_or_else(|| Error::InvalidUom(format!("unknown area UOM {}", new.area_uom)))?;
        if area_uom.category != UomCategory::Length {
            return Err(Error::InvalidUom(format!(
                "area UOM {} is not a length",
                new.area_uom
            )));
        }

        let room = Room {
            id: 0,
            listing_id,
            description: new.description,
            price: new.price,
            price_uom: new.price_uom,
            area: new.length * new.width,
            area_uom: new.area_uom,
            capacity: new.capacity,
            floor_level: new.floor_level,
            gender: new.gender,
            is_active: true,
        };

        let room = self.listings.insert_room(room).await?;
        info!(id = room.id, listing_id, "added room");
        Ok(room)
    }

    async fn resolve_region(&self, lat: &str, lng: &str) -> Result<String> {
        let geolocation = self.geocoder.reverse(lat, lng).await?;
        Ok(geolocation.region()?.to_string())
    }

    async fn enrich(&self, ranked: Vec<RankedListing>) -> Result<Vec<NearbyListing>> {
        let mut items = Vec::with_capacity(ranked.len());

        for entry in ranked {
            let rooms = self
                .listings
                .find_rooms_by_listing(entry.listing.id)
                .await?;
            let tag = pricing::price_tag(&rooms, self.uoms.as_ref()).await?;

            items.push(NearbyListing {
                id: entry.listing.id,
                name: entry.listing.name,
                city: entry.listing.city,
                thumbnail_url: entry.listing.thumbnail_url,
                distance_km: entry.distance_km,
                price: tag.price,
                currency: tag.unit,
            });
        }

        Ok(items)
    }
}

/// Generate a listing code: `KOST/<country>-<city>/<year>-<month initial>/<8 digits>`
fn generate_code(prefix: &str, country: &str, city: &str) -> String {
    let mut rng = rand::thread_rng();
    let digits: String = (0..8).map(|_| rng.gen_range(0..10).to_string()).collect();

    let now = Utc::now();
    let month_initial = now
        .format("%B")
        .to_string()
        .chars()
        .next()
        .unwrap_or('X');

    format!(
        "{}/{}-{}/{}-{}/{}",
        prefix,
        country,
        city,
        now.year(),
        month_initial,
        digits
    )
}
