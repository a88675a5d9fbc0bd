//! Geometry related algorithms.

mod haversine;
pub use self::haversine::*;
