//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod reproject_command;
pub mod distance_command;
pub mod lookup_command;

pub use command_traits::{Command, CommandFactory};
pub use reproject_command::ReprojectCommand;
pub use distance_command::DistanceCommand;
pub use lookup_command::LookupCommand;

use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};
use crate::errors::{GeoError, GeoResult};
use crate::utils::config::Settings;

/// Build the clap definition of the `geokit` command line
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("geokit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Geodesic distances and coordinate reprojection")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE")
                .global(true)
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            ClapCommand::new("reproject")
                .about("Reproject points between well-known coordinate systems")
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source SRID (e.g. 4326 or EPSG:2272)")
                        .value_name("SRID"),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target SRID")
                        .value_name("SRID"),
                )
                .arg(
                    Arg::new("point")
                        .long("point")
                        .help("Single coordinate in 'x,y' format")
                        .value_name("X,Y")
                        .allow_hyphen_values(true)
                        .conflicts_with("input"),
                )
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .help("File with one 'x,y' pair per line")
                        .value_name("FILE"),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Output file (stdout when omitted)")
                        .value_name("FILE"),
                ),
        )
        .subcommand(
            ClapCommand::new("distance")
                .about("Distance in meters between two lon,lat points")
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("First point as 'lon,lat'")
                        .value_name("LON,LAT")
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Second point as 'lon,lat'")
                        .value_name("LON,LAT")
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("method")
                        .long("method")
                        .help("Distance formula (haversine or vincenty)")
                        .value_name("METHOD"),
                ),
        )
        .subcommand(
            ClapCommand::new("lookup")
                .about("Show a well-known coordinate system")
                .arg(
                    Arg::new("srid")
                        .help("SRID to look up (e.g. 2272 or EPSG:2272)")
                        .required(true)
                        .index(1),
                ),
        )
}

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the selected subcommand and creates
/// the appropriate command instance for execution.
pub struct GeokitCommandFactory;

impl GeokitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        GeokitCommandFactory
    }
}

impl Default for GeokitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for GeokitCommandFactory {
    fn create_command(&self, args: &ArgMatches, settings: &'a Settings) -> GeoResult<Box<dyn Command + 'a>> {
        match args.subcommand() {
            Some(("reproject", sub)) => Ok(Box::new(ReprojectCommand::new(sub, settings)?)),
            Some(("distance", sub)) => Ok(Box::new(DistanceCommand::new(sub, settings)?)),
            Some(("lookup", sub)) => Ok(Box::new(LookupCommand::new(sub)?)),
            Some((other, _)) => Err(GeoError::InvalidInput(format!("Unknown command: {}", other))),
            None => Err(GeoError::InvalidInput("No command given".to_string())),
        }
    }
}
