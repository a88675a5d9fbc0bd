#[cfg(test)]
#[path = "../../../tests/unit/models/common/domain_test.rs"]
mod domain_test;

use crate::utils::Float;
use std::fmt;

/// Specifies cost value, in currency per year.
pub type Cost = Float;

/// Specifies geodesic distance, in miles.
pub type Distance = Float;

/// Specifies travel duration, in minutes.
pub type Duration = Float;

/// Specifies demand (shipment weight), in pounds per year.
pub type Demand = Float;

/// Represents a WGS84 geocoordinate in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    /// Longitude.
    pub lng: Float,
    /// Latitude.
    pub lat: Float,
}

impl Coordinate {
    /// Creates a new instance of `Coordinate`.
    pub fn new(lng: Float, lat: Float) -> Self {
        Self { lng, lat }
    }

    /// Returns a key which is equal for bit-identical coordinates, signed zeros are treated as one value.
    pub fn bits_key(&self) -> (u64, u64) {
        (normalize_zero(self.lng).to_bits(), normalize_zero(self.lat).to_bits())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "lng={}, lat={}", self.lng, self.lat)
    }
}

fn normalize_zero(value: Float) -> Float {
    if value == 0. { 0. } else { value }
}

/// Represents a store with known annual shipment weight.
#[derive(Clone, Debug, PartialEq)]
pub struct DemandPoint {
    /// A store location.
    pub coordinate: Coordinate,
    /// Annual shipment weight, non-negative.
    pub demand: Demand,
}

impl DemandPoint {
    /// Creates a new instance of `DemandPoint`.
    pub fn new(coordinate: Coordinate, demand: Demand) -> Self {
        Self { coordinate, demand }
    }
}
