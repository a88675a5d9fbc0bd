#[cfg(test)]
#[path = "../../../tests/unit/algorithms/geometry/haversine_test.rs"]
mod haversine_test;

use crate::models::common::{Coordinate, Distance, Duration};
use crate::utils::Float;

/// Mean Earth radius in miles.
pub const EARTH_RADIUS_MILES: Float = 3958.8;

/// An average speed, in miles per hour, which is used to estimate travel time from distance.
pub const FALLBACK_SPEED_MPH: Float = 50.;

/// Gets great-circle distance in miles between two coordinates using haversine formula.
pub fn get_distance(a: &Coordinate, b: &Coordinate) -> Distance {
    let (lng1, lat1) = (degree_rad(a.lng), degree_rad(a.lat));
    let (lng2, lat2) = (degree_rad(b.lng), degree_rad(b.lat));

    let d_lng = lng2 - lng1;
    let d_lat = lat2 - lat1;

    let h = (d_lat / 2.).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.).sin().powi(2);

    EARTH_RADIUS_MILES * 2. * h.sqrt().asin()
}

/// Estimates travel time in minutes between two coordinates assuming constant average speed.
pub fn get_fallback_duration(a: &Coordinate, b: &Coordinate) -> Duration {
    get_distance(a, b) / FALLBACK_SPEED_MPH * 60.
}

/// Converts degrees to radians.
#[inline(always)]
fn degree_rad(degrees: Float) -> Float {
    degrees.to_radians()
}
