//! Great-circle math on a spherical Earth.
//!
//! All distances are in statute miles — the unit the rated-range data and
//! every user-facing figure use.  The sphere radius matches the value the
//! mapping stack assumes (6 371 008.8 m), so rings produced here line up
//! with distances measured on the rendered map.

use crate::Coordinate;

/// Mean Earth radius in statute miles (6 371 008.8 m).
pub const EARTH_RADIUS_MI: f64 = 3_958.7613;

/// Haversine great-circle distance between two coordinates, in miles.
pub fn distance_mi(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = (d_lat * 0.5).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_MI * c
}

/// Project the point `distance_mi` miles from `origin` along `bearing_deg`
/// (compass degrees, 0 = north, 90 = east).
///
/// Standard great-circle destination formula; the resulting longitude is
/// wrapped back into `[-180, 180]`.
pub fn destination(origin: Coordinate, distance_mi: f64, bearing_deg: f64) -> Coordinate {
    let delta = distance_mi / EARTH_RADIUS_MI;
    let theta = bearing_deg.to_radians();

    let phi1 = origin.lat.to_radians();
    let lambda1 = origin.lon.to_radians();

    let phi2 = (phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos()).asin();
    let lambda2 = lambda1
        + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * phi2.sin());

    Coordinate::new(wrap_longitude(lambda2.to_degrees()), phi2.to_degrees())
}

/// Wrap a longitude in degrees into `[-180, 180]`.
#[inline]
pub fn wrap_longitude(lon: f64) -> f64 {
    let wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid maps 180 to -180; keep the positive antimeridian.
    if wrapped == -180.0 && lon > 0.0 { 180.0 } else { wrapped }
}
