//! Coordinate Reference System handling

use lazy_static::lazy_static;
use regex::Regex;

use crate::coordinate::errors::{ProjectionError, ProjResult};
use crate::coordinate::registry;

lazy_static! {
    // Accepts "4326", "EPSG:4326" and "urn:ogc:def:crs:EPSG::4326"
    static ref CRS_PATTERN: Regex =
        Regex::new(r"(?i)^(?:urn:ogc:def:crs:epsg::|epsg:)?([0-9]{1,7})$").unwrap();
}

/// Identifier for the coordinate systems supported by the transformer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateSystem {
    /// WGS 84 (EPSG:4326), longitude/latitude in degrees
    WGS84,
    /// Web Mercator (EPSG:3857), x/y in meters
    WebMercator,
}

impl CoordinateSystem {
    /// Get the canonical EPSG code for this coordinate system
    pub fn epsg_code(&self) -> u32 {
        match self {
            CoordinateSystem::WGS84 => 4326,
            CoordinateSystem::WebMercator => 3857,
        }
    }

    /// Whether coordinates in this system are angular (degrees)
    pub fn is_geographic(&self) -> bool {
        matches!(registry::get_crs_kind(self.epsg_code()).as_deref(), Some("geographic"))
    }

    /// Unit name for this coordinate system ("degree" or "metre")
    pub fn unit(&self) -> String {
        registry::get_crs_unit(self.epsg_code())
            .unwrap_or_else(|| "unknown".to_string())
    }

    /// Get a description of this coordinate system
    pub fn description(&self) -> String {
        format!("{} (EPSG:{})", registry::get_crs_name(self.epsg_code()), self.epsg_code())
    }
}

/// Factory for creating coordinate systems
pub struct CoordinateSystemFactory;

impl CoordinateSystemFactory {
    /// Create a coordinate system from an EPSG code
    ///
    /// Deprecated aliases (3785, 900913) resolve to their canonical code.
    /// Codes missing from the registry are rejected.
    pub fn from_epsg(epsg: u32) -> ProjResult<CoordinateSystem> {
        if !registry::is_registered(epsg) {
            return Err(ProjectionError::UnregisteredEpsg(epsg));
        }

        match registry::canonical_code(epsg) {
            4326 => Ok(CoordinateSystem::WGS84),
            3857 => Ok(CoordinateSystem::WebMercator),
            // Registered but not known to the transformer
            code => Err(ProjectionError::UnregisteredEpsg(code)),
        }
    }

    /// Parse a coordinate system from a string (e.g. "EPSG:4326")
    pub fn from_string(crs_str: &str) -> ProjResult<CoordinateSystem> {
        let trimmed = crs_str.trim();

        match CRS_PATTERN.captures(trimmed) {
            Some(caps) => {
                let code = caps[1].parse::<u32>()
                    .map_err(|_| ProjectionError::InvalidCrsFormat(trimmed.to_string()))?;
                Self::from_epsg(code)
            }
            None => Err(ProjectionError::InvalidCrsFormat(trimmed.to_string())),
        }
    }
}
