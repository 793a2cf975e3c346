//! Point reprojection command
//!
//! Converts a single point given on the command line, or a file of points
//! (one "x,y" per line), from one well-known coordinate system to another.

use std::fs;
use std::io::{self, Write};
use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::coordinate::{find_by_srid, CoordinateSystem, Point, Reprojector};
use crate::errors::{GeoError, GeoResult};
use crate::utils::chronometer::Chronometer;
use crate::utils::config::Settings;
use crate::utils::coordinate_utils::{parse_coordinate, parse_point_lines, resolve_coordinate_system};
use crate::utils::progress::ProgressTracker;

/// Where the points to reproject come from
#[derive(Debug, Clone, PartialEq)]
pub enum PointSource {
    /// A single point from `--point`
    Single(Point),
    /// A batch file from `--input`
    File(String),
}

/// Command for reprojecting points between coordinate systems
pub struct ReprojectCommand<'a> {
    /// Source coordinate system
    from: &'static CoordinateSystem,
    /// Target coordinate system
    to: &'static CoordinateSystem,
    /// Input points
    source: PointSource,
    /// Optional output file; stdout when absent
    output_file: Option<String>,
    /// Settings the command was created with
    settings: &'a Settings,
    reprojector: Reprojector,
}

impl<'a> ReprojectCommand<'a> {
    /// Create a new reproject command
    ///
    /// # Arguments
    /// * `args` - Matches of the `reproject` subcommand
    /// * `settings` - Settings supplying default SRIDs
    ///
    /// # Returns
    /// A new ReprojectCommand instance or an error
    pub fn new(args: &ArgMatches, settings: &'a Settings) -> GeoResult<Self> {
        let from = match args.get_one::<String>("from") {
            Some(s) => resolve_coordinate_system(s)?,
            None => find_by_srid(settings.default_from_srid)
                .ok_or(GeoError::UnknownSrid(settings.default_from_srid))?,
        };
        let to = match args.get_one::<String>("to") {
            Some(s) => resolve_coordinate_system(s)?,
            None => find_by_srid(settings.default_to_srid)
                .ok_or(GeoError::UnknownSrid(settings.default_to_srid))?,
        };

        let source = if let Some(point) = args.get_one::<String>("point") {
            PointSource::Single(parse_coordinate(point)?)
        } else if let Some(input) = args.get_one::<String>("input") {
            PointSource::File(input.clone())
        } else {
            return Err(GeoError::InvalidInput("Missing input: use --point or --input".to_string()));
        };

        let output_file = args.get_one::<String>("output").cloned();

        Ok(ReprojectCommand {
            from,
            to,
            source,
            output_file,
            settings,
            reprojector: Reprojector::new(),
        })
    }

    /// Reproject every input point
    pub fn run(&self) -> GeoResult<Vec<Point>> {
        match &self.source {
            PointSource::Single(point) => {
                Ok(vec![self.reprojector.reproject_point(self.from, self.to, point)?])
            }
            PointSource::File(path) => {
                let content = fs::read_to_string(path)?;
                let points = parse_point_lines(&content)?;
                info!("Read {} points from {}", points.len(), path);

                let progress = if self.output_file.is_some() {
                    ProgressTracker::new(points.len() as u64, "Reprojecting")
                } else {
                    ProgressTracker::hidden()
                };

                let mut results = Vec::with_capacity(points.len());
                for (index, point) in points.iter().enumerate() {
                    let projected = self.reprojector
                        .reproject_point(self.from, self.to, point)
                        .map_err(|e| GeoError::InvalidInput(format!("point {} ({}): {}", index + 1, point, e)))?;
                    results.push(projected);
                    progress.increment(1);
                }
                progress.finish();
                Ok(results)
            }
        }
    }

    fn write_results(&self, results: &[Point]) -> GeoResult<()> {
        let mut out: Box<dyn Write> = match &self.output_file {
            Some(path) => Box::new(fs::File::create(path)?),
            None => Box::new(io::stdout().lock()),
        };
        for p in results {
            writeln!(out, "{}", p)?;
        }
        out.flush()?;
        Ok(())
    }
}

impl<'a> Command for ReprojectCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        info!("Reprojecting from {} to {}", self.from, self.to);
        debug!("Default SRIDs from settings: {} -> {}",
               self.settings.default_from_srid, self.settings.default_to_srid);

        let mut chrono = Chronometer::start("reproject");
        let results = self.run()?;
        chrono.lap("transform");

        self.write_results(&results)?;
        chrono.lap("write");

        if let Some(path) = &self.output_file {
            info!("Wrote {} points to {}", results.len(), path);
        }
        chrono.stop();
        Ok(())
    }
}
