//! Well-known coordinate system lookup command

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::coordinate::Reprojector;
use crate::errors::{GeoError, GeoResult};
use crate::utils::coordinate_utils::parse_srid;

/// Command printing the definition of a well-known coordinate system
pub struct LookupCommand {
    srid: u32,
}

impl LookupCommand {
    pub fn new(args: &ArgMatches) -> GeoResult<Self> {
        let srid = args.get_one::<String>("srid")
            .ok_or_else(|| GeoError::InvalidInput("Missing SRID".to_string()))
            .and_then(|s| parse_srid(s))?;
        Ok(LookupCommand { srid })
    }

    /// Text shown for the SRID; a miss is reported, not raised
    pub fn describe(&self) -> String {
        match Reprojector::new().get_coordinate_system_by_srid(self.srid) {
            Some(cs) => format!(
                "Name: {}\nAuthority: {}\nCode: {}\nDefinition: {}",
                cs.name, cs.authority, cs.code, cs.definition
            ),
            None => format!("SRID {} not found among well-known coordinate systems", self.srid),
        }
    }
}

impl Command for LookupCommand {
    fn execute(&self) -> GeoResult<()> {
        info!("Looking up SRID {}", self.srid);
        println!("{}", self.describe());
        Ok(())
    }
}
