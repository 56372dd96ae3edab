use log::info;

use crate::coordinate::errors::ProjResult;
use crate::coordinate::{BoundingBox, CoordinateSystemFactory, CoordinateTransformer, Point};
use crate::coordinate;
use crate::utils::logger::Logger;

/// Main interface to the CoordKit library
pub struct CoordKit {
    logger: Logger,
}

impl CoordKit {
    /// Create a new CoordKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "coordkit.log"
    ///
    /// # Returns
    /// A CoordKit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> ProjResult<Self> {
        let log_path = log_file.unwrap_or("coordkit.log");
        let logger = Logger::new(log_path)?;
        Ok(CoordKit { logger })
    }

    /// Transform a coordinate between two EPSG reference systems
    ///
    /// Coordinate order follows the source system convention: longitude
    /// then latitude for geographic systems, x then y for projected ones.
    ///
    /// # Arguments
    /// * `source_epsg` - EPSG code of the system the input is expressed in
    /// * `target_epsg` - EPSG code of the system to transform into
    /// * `x` - First coordinate in source order
    /// * `y` - Second coordinate in source order
    ///
    /// # Returns
    /// The transformed (x, y) pair in target order and units, or an error
    pub fn transform(&self, source_epsg: u32, target_epsg: u32, x: f64, y: f64) -> ProjResult<(f64, f64)> {
        let source = CoordinateSystemFactory::from_epsg(source_epsg)?;
        let target = CoordinateSystemFactory::from_epsg(target_epsg)?;

        info!("Transforming ({}, {}) from {} to {}",
              x, y, source.description(), target.description());

        let transformer = CoordinateTransformer;
        let result = transformer.transform_point(&Point::new(x, y), &source, &target)?;

        self.logger.log(&format!("Transformed ({}, {}) -> ({}, {})", x, y, result.x, result.y))?;

        Ok((result.x, result.y))
    }

    /// Transform a bounding box between two EPSG reference systems
    ///
    /// # Arguments
    /// * `source_epsg` - EPSG code of the system the box is expressed in
    /// * `target_epsg` - EPSG code of the system to transform into
    /// * `bbox` - Bounding box as "minx,miny,maxx,maxy"
    ///
    /// # Returns
    /// The transformed box in the same string format, or an error
    pub fn transform_bbox(&self, source_epsg: u32, target_epsg: u32, bbox: &str) -> ProjResult<String> {
        let source = CoordinateSystemFactory::from_epsg(source_epsg)?;
        let target = CoordinateSystemFactory::from_epsg(target_epsg)?;

        let parsed = BoundingBox::from_string(bbox)?;
        let transformer = CoordinateTransformer;
        let result = transformer.transform_bbox(&parsed, &source, &target)?;

        self.logger.log(&format!("Transformed bbox {} from EPSG:{} to EPSG:{}",
                                 bbox, source_epsg, target_epsg))?;

        Ok(format!("{},{},{},{}", result.min_x, result.min_y, result.max_x, result.max_y))
    }

    /// Describe a registered EPSG reference system
    ///
    /// # Arguments
    /// * `epsg` - EPSG code to describe
    ///
    /// # Returns
    /// A human-readable description, or an error for unregistered codes
    pub fn describe_crs(&self, epsg: u32) -> ProjResult<String> {
        let crs = CoordinateSystemFactory::from_epsg(epsg)?;
        let kind = coordinate::get_crs_kind(crs.epsg_code())
            .unwrap_or_else(|| "unknown".to_string());
        Ok(format!("{}, {}, unit: {}", crs.description(), kind, crs.unit()))
    }
}
