//! Coordinate projection command
//!
//! This module implements the command that projects the built-in sample
//! coordinate from WGS84 (EPSG:4326) to Web Mercator (EPSG:3857) and
//! prints the result.

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::coordinate::errors::ProjResult;
use crate::coordinate::{CoordinateSystemFactory, CoordinateTransformer, Point};
use crate::utils::logger::Logger;

/// Sample coordinate (St Lucia campus, Brisbane), longitude then latitude
const INPUT_LONGITUDE: f64 = 153.0184252962559;
const INPUT_LATITUDE: f64 = -27.489617778602657;

/// EPSG codes of the source and target reference systems
const SOURCE_EPSG: u32 = 4326;
const TARGET_EPSG: u32 = 3857;

/// Command for projecting the sample coordinate
pub struct ProjectCommand<'a> {
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ProjectCommand<'a> {
    /// Create a new project command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ProjectCommand instance or an error
    pub fn new(_args: &ArgMatches, logger: &'a Logger) -> ProjResult<Self> {
        Ok(ProjectCommand { logger })
    }
}

impl<'a> Command for ProjectCommand<'a> {
    fn execute(&self) -> ProjResult<()> {
        let source = CoordinateSystemFactory::from_epsg(SOURCE_EPSG)?;
        let target = CoordinateSystemFactory::from_epsg(TARGET_EPSG)?;

        info!("Projecting ({}, {}) from {} to {}",
              INPUT_LONGITUDE, INPUT_LATITUDE,
              source.description(), target.description());

        let input = Point::new(INPUT_LONGITUDE, INPUT_LATITUDE);
        let transformer = CoordinateTransformer;
        let result = transformer.transform_point(&input, &source, &target)?;

        debug!("Projection result: x={}, y={} ({})", result.x, result.y, target.unit());

        // The single line of program output
        println!("Transformed: {}, {}", result.x, result.y);

        self.logger.log("Projection completed successfully")?;

        Ok(())
    }
}
