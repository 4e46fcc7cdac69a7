//! Cheapest-room price enrichment
//!
//! Each nearby result carries the price of its listing's cheapest room
//! together with the unit description ("IDR / month" and the like).

use crate::error::Result;
use crate::model::Room;
use crate::store::UomStore;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Display price for a listing: the cheapest room and its unit description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceTag {
    pub price: f64,
    pub unit: String,
}

impl PriceTag {
    /// Sentinel for a listing with no rooms
    pub fn none() -> Self {
        Self {
            price: 0.0,
            unit: String::new(),
        }
    }

    pub fn is_none(&self) -> bool {
        self.price == 0.0 && self.unit.is_empty()
    }
}

/// Room with the lowest raw price
///
/// Prices are compared as stored, not currency-normalized: a listing
/// mixing currency units would compare across them. That matches the
/// legacy data, where every room of a listing shares one currency.
pub fn cheapest_room(rooms: &[Room]) -> Option<&Room> {
    rooms
        .iter()
        .min_by(|a, b| a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal))
}

/// Price tag for a room set, resolving the winner's unit description
///
/// An empty room set returns the explicit `PriceTag::none()` sentinel,
/// never an error.
pub async fn price_tag(rooms: &[Room], uoms: &dyn UomStore) -> Result<PriceTag> {
    match cheapest_room(rooms) {
        Some(room) => Ok(PriceTag {
            price: room.price,
            unit: uoms.describe(room.price_uom).await?,
        }),
        None => Ok(PriceTag::none()),
    }
}
