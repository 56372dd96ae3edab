//! CLI command implementations
//!
//! This module contains implementations of the commands supported
//! by the CLI application using the Command pattern.

pub mod command_traits;
pub mod project_command;

pub use command_traits::{Command, CommandFactory};
pub use project_command::ProjectCommand;

use clap::ArgMatches;
use crate::coordinate::errors::ProjResult;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// The binary exposes a single fixed operation, so the factory always
/// produces the projection command.
pub struct CoordkitCommandFactory;

impl CoordkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        CoordkitCommandFactory
    }
}

impl<'a> CommandFactory<'a> for CoordkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> ProjResult<Box<dyn Command + 'a>> {
        Ok(Box::new(ProjectCommand::new(args, logger)?))
    }
}
