//! Proximity ranking
//!
//! Orders candidate listings by great-circle distance from an origin
//! using repeated minimum extraction: each pass scans the remaining set
//! for the smallest distance and emits every listing at that distance,
//! so exact ties always travel together.

use crate::geo::distance::{distance_between, DistanceUnit};
use crate::geo::Coordinates;
use crate::model::Listing;
use serde::Serialize;
use tracing::warn;

/// A candidate listing with its computed distance from the origin
#[derive(Debug, Clone, Serialize)]
pub struct RankedListing {
    pub listing: Listing,
    pub distance_km: f64,
}

/// Measure each candidate's distance from `origin`, in kilometers
///
/// Candidates whose stored coordinates fail to parse are skipped with a
/// warning. The output length is the rankable candidate count, which the
/// nearby service reports as the result total.
pub fn measure_distances(origin: Coordinates, candidates: Vec<Listing>) -> Vec<RankedListing> {
    let mut measured = Vec::with_capacity(candidates.len());
    for listing in candidates {
        match Coordinates::parse(&listing.latitude, &listing.longitude) {
            Ok(coords) => {
                let distance_km = distance_between(
                    origin.lat,
                    origin.lng,
                    coords.lat,
                    coords.lng,
                    DistanceUnit::Kilometers,
                );
                measured.push(RankedListing {
                    listing,
                    distance_km,
                });
            }
            Err(e) => {
                warn!(listing_id = listing.id, error = %e, "skipping listing with bad coordinates");
            }
        }
    }
    measured
}

/// Order measured candidates by ascending distance
///
/// Ties are never split: the pass that reaches `limit` still emits its
/// whole tie group, so the output may exceed `limit` when the cut would
/// fall inside one. Callers slice to the page afterwards. Entries with a
/// non-finite distance can never be the minimum, so the loop stops as
/// soon as the smallest remaining distance is not finite.
pub fn extract_nearest(mut remaining: Vec<RankedListing>, limit: usize) -> Vec<RankedListing> {
    let mut ranked = Vec::with_capacity(remaining.len().min(limit));

    while !remaining.is_empty() && ranked.len() < limit {
        let smallest = remaining
            .iter()
            .map(|r| r.distance_km)
            .fold(f64::INFINITY, f64::min);
        if !smallest.is_finite() {
            warn!(dropped = remaining.len(), "dropping candidates with non-finite distance");
            break;
        }

        let (hits, rest): (Vec<_>, Vec<_>) = remaining
            .into_iter()
            .partition(|r| r.distance_km == smallest);

        ranked.extend(hits);
        remaining = rest;
    }

    ranked
}

/// Rank candidates by ascending distance from `origin`, in kilometers
pub fn rank_by_proximity(
    origin: Coordinates,
    candidates: Vec<Listing>,
    limit: usize,
) -> Vec<RankedListing> {
    extract_nearest(measure_distances(origin, candidates), limit)
}
