//! Coordinate transformation functionality
//!
//! Implements the spherical Web Mercator mapping between WGS84 (EPSG:4326)
//! and Web Mercator (EPSG:3857).

use std::f64::consts::PI;
use log::debug;

use super::bbox::BoundingBox;
use super::crs::CoordinateSystem;
use super::point::Point;
use crate::coordinate::errors::{ProjectionError, ProjResult};

/// Earth radius in meters used by the spherical Web Mercator projection
pub const EARTH_RADIUS: f64 = 6378137.0;

/// Largest latitude representable in Web Mercator, atan(sinh(pi)) in degrees
pub const MAX_LATITUDE: f64 = 85.05112877980659;

/// Half-width of the Web Mercator plane in meters (pi * EARTH_RADIUS)
pub const WEB_MERCATOR_EXTENT: f64 = PI * EARTH_RADIUS;

// Slack for extent checks on inverse input, in meters
const EXTENT_SLACK: f64 = 1e-6;

/// Transformer for converting between coordinate systems
pub struct CoordinateTransformer;

impl CoordinateTransformer {
    /// Convert from WGS84 (EPSG:4326) to Web Mercator (EPSG:3857)
    ///
    /// # Arguments
    /// * `lon` - Longitude in degrees
    /// * `lat` - Latitude in degrees
    ///
    /// # Returns
    /// A point with x and y in meters, or a domain error when the input
    /// lies outside the projection domain (the Mercator formula diverges
    /// towards the poles)
    pub fn wgs84_to_web_mercator(&self, lon: f64, lat: f64) -> ProjResult<Point> {
        if !lon.is_finite() || lon.abs() > 180.0 {
            return Err(ProjectionError::OutsideProjectionDomain {
                axis: "longitude", value: lon, limit: 180.0,
            });
        }
        if !lat.is_finite() || lat.abs() > MAX_LATITUDE {
            return Err(ProjectionError::OutsideProjectionDomain {
                axis: "latitude", value: lat, limit: MAX_LATITUDE,
            });
        }

        let x = lon.to_radians() * EARTH_RADIUS;
        let lat_rad = lat.to_radians();
        let y = EARTH_RADIUS * f64::ln(f64::tan(PI / 4.0 + lat_rad / 2.0));

        debug!("Transformed WGS84 ({}, {}) to Web Mercator ({}, {})", lon, lat, x, y);

        Ok(Point::new(x, y))
    }

    /// Convert from Web Mercator (EPSG:3857) to WGS84 (EPSG:4326)
    ///
    /// # Arguments
    /// * `x` - X coordinate in meters
    /// * `y` - Y coordinate in meters
    ///
    /// # Returns
    /// A point with longitude and latitude in degrees, or a domain error
    /// when the input lies outside the Web Mercator plane
    pub fn web_mercator_to_wgs84(&self, x: f64, y: f64) -> ProjResult<Point> {
        if !x.is_finite() || x.abs() > WEB_MERCATOR_EXTENT + EXTENT_SLACK {
            return Err(ProjectionError::OutsideProjectionDomain {
                axis: "x", value: x, limit: WEB_MERCATOR_EXTENT,
            });
        }
        if !y.is_finite() || y.abs() > WEB_MERCATOR_EXTENT + EXTENT_SLACK {
            return Err(ProjectionError::OutsideProjectionDomain {
                axis: "y", value: y, limit: WEB_MERCATOR_EXTENT,
            });
        }

        let lon = (x / EARTH_RADIUS).to_degrees();
        let lat = (2.0 * f64::atan(f64::exp(y / EARTH_RADIUS)) - PI / 2.0).to_degrees();

        debug!("Transformed Web Mercator ({}, {}) to WGS84 ({}, {})", x, y, lon, lat);

        Ok(Point::new(lon, lat))
    }

    /// Transform a point between coordinate systems
    ///
    /// The transform is a deterministic, pure mapping: identical inputs
    /// always produce identical outputs. A Z coordinate, when present,
    /// passes through unchanged.
    pub fn transform_point(&self, point: &Point, from_crs: &CoordinateSystem, to_crs: &CoordinateSystem) -> ProjResult<Point> {
        if from_crs == to_crs {
            return Ok(*point);
        }

        let mut transformed = match (from_crs, to_crs) {
            (CoordinateSystem::WGS84, CoordinateSystem::WebMercator) => {
                self.wgs84_to_web_mercator(point.x, point.y)?
            },
            (CoordinateSystem::WebMercator, CoordinateSystem::WGS84) => {
                self.web_mercator_to_wgs84(point.x, point.y)?
            },
            _ => return Err(ProjectionError::UnsupportedTransform(
                from_crs.description(), to_crs.description())),
        };

        transformed.z = point.z;
        Ok(transformed)
    }

    /// Transform a bounding box between coordinate systems
    ///
    /// Projects the min and max corners and returns a box tagged with the
    /// target EPSG code.
    pub fn transform_bbox(&self, bbox: &BoundingBox, from_crs: &CoordinateSystem, to_crs: &CoordinateSystem) -> ProjResult<BoundingBox> {
        if from_crs == to_crs {
            return Ok(*bbox);
        }

        let min_point = Point::new(bbox.min_x, bbox.min_y);
        let max_point = Point::new(bbox.max_x, bbox.max_y);

        let transformed_min = self.transform_point(&min_point, from_crs, to_crs)?;
        let transformed_max = self.transform_point(&max_point, from_crs, to_crs)?;

        Ok(BoundingBox::new_with_crs(
            transformed_min.x,
            transformed_min.y,
            transformed_max.x,
            transformed_max.y,
            to_crs.epsg_code(),
        ))
    }
}
