//! Great-circle distance (spherical law of cosines)
//!
//! This is the distance the proximity ranker sorts by. Accurate enough
//! for comparing listings within a city, not for high-precision geodesy.

use std::f64::consts::PI;

/// Output unit for `distance_between`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceUnit {
    /// Statute miles
    #[default]
    Miles,
    Kilometers,
    NauticalMiles,
}

/// Distance between two points, in the requested unit
///
/// Inputs are decimal degrees. The intermediate cosine is clamped to
/// [-1.0, 1.0] before `acos`: floating-point overshoot at identical or
/// antipodal points would otherwise yield NaN and poison every comparison
/// downstream. Identical points return exactly 0.0.
pub fn distance_between(lat1: f64, lng1: f64, lat2: f64, lng2: f64, unit: DistanceUnit) -> f64 {
    let rad_lat1 = PI * lat1 / 180.0;
    let rad_lat2 = PI * lat2 / 180.0;
    let rad_theta = PI * (lng1 - lng2) / 180.0;

    let dist = (rad_lat1.sin() * rad_lat2.sin()
        + rad_lat1.cos() * rad_lat2.cos() * rad_theta.cos())
    .clamp(-1.0, 1.0);

    // central angle in degrees -> minutes of arc -> statute miles
    let miles = dist.acos() * 180.0 / PI * 60.0 * 1.1515;

    match unit {
        DistanceUnit::Miles => miles,
        DistanceUnit::Kilometers => miles * 1.609344,
        DistanceUnit::NauticalMiles => miles * 0.8684,
    }
}
