//! Coordinate handling for geospatial data
//!
//! This module provides structures and functionality for handling
//! different coordinate systems and transformations.

pub mod errors;
mod bbox;
mod point;
mod transform;
mod crs;
mod registry;

#[cfg(test)]
mod tests;

// Re-export key types
pub use self::bbox::BoundingBox;
pub use self::point::Point;
pub use self::transform::{CoordinateTransformer, EARTH_RADIUS, MAX_LATITUDE, WEB_MERCATOR_EXTENT};
pub use self::crs::{CoordinateSystem, CoordinateSystemFactory};
pub use self::errors::{ProjectionError, ProjResult};
pub use self::registry::{canonical_code, get_crs_kind, get_crs_name, get_crs_unit, is_registered};
