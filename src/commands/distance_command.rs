//! Geodesic distance command

use clap::ArgMatches;
use log::{info, warn};

use crate::commands::command_traits::Command;
use crate::coordinate::{DistanceFormula, Point};
use crate::errors::{GeoError, GeoResult};
use crate::utils::config::Settings;
use crate::utils::coordinate_utils::parse_coordinate;

/// Command for measuring the distance between two lon/lat points
pub struct DistanceCommand {
    from: Point,
    to: Point,
    formula: DistanceFormula,
}

impl DistanceCommand {
    /// Create a new distance command
    ///
    /// `--method` overrides the formula configured in `settings`.
    pub fn new(args: &ArgMatches, settings: &Settings) -> GeoResult<Self> {
        let from = args.get_one::<String>("from")
            .ok_or_else(|| GeoError::InvalidInput("Missing --from coordinate".to_string()))
            .and_then(|s| parse_coordinate(s))?;
        let to = args.get_one::<String>("to")
            .ok_or_else(|| GeoError::InvalidInput("Missing --to coordinate".to_string()))
            .and_then(|s| parse_coordinate(s))?;

        let formula = match args.get_one::<String>("method") {
            Some(method) => method.parse()?,
            None => settings.distance_formula,
        };

        Ok(DistanceCommand { from, to, formula })
    }

    /// Distance in meters, `NaN` when Vincenty does not converge
    pub fn compute(&self) -> f64 {
        self.formula.distance_meters(self.from.x, self.from.y, self.to.x, self.to.y)
    }
}

impl Command for DistanceCommand {
    fn execute(&self) -> GeoResult<()> {
        info!("Measuring {} distance from {} to {}", self.formula, self.from, self.to);

        let meters = self.compute();
        if meters.is_nan() {
            warn!("{} iteration did not converge for {} -> {}", self.formula, self.from, self.to);
            println!("{} did not converge; try --method haversine", self.formula);
        } else {
            println!("{:.3} m", meters);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::build_cli;
    use approx::assert_abs_diff_eq;

    fn distance_matches(argv: &[&str]) -> ArgMatches {
        let matches = build_cli().try_get_matches_from(argv).unwrap();
        matches.subcommand_matches("distance").unwrap().clone()
    }

    #[test]
    fn test_configured_formula_is_default() {
        let settings = Settings {
            distance_formula: DistanceFormula::Haversine,
            ..Settings::default()
        };
        let args = distance_matches(&["geokit", "distance", "--from", "0,0", "--to", "1,0"]);
        let cmd = DistanceCommand::new(&args, &settings).unwrap();
        assert_eq!(cmd.formula, DistanceFormula::Haversine);
        assert_abs_diff_eq!(cmd.compute(), 111_319.49, epsilon = 0.01);
    }

    #[test]
    fn test_method_flag_overrides() {
        let args = distance_matches(&[
            "geokit", "distance", "--from", "-75.17,39.95", "--to", "-75.17,39.95", "--method", "vincenty",
        ]);
        let cmd = DistanceCommand::new(&args, &Settings::default()).unwrap();
        assert_eq!(cmd.formula, DistanceFormula::Vincenty);
        assert_eq!(cmd.compute(), 0.0);
    }

    #[test]
    fn test_non_convergence_is_nan() {
        let args = distance_matches(&["geokit", "distance", "--from", "0,0", "--to", "180,0"]);
        let cmd = DistanceCommand::new(&args, &Settings::default()).unwrap();
        assert!(cmd.compute().is_nan());
        assert!(cmd.execute().is_ok());
    }

    #[test]
    fn test_missing_argument() {
        let args = distance_matches(&["geokit", "distance", "--from", "0,0"]);
        assert!(DistanceCommand::new(&args, &Settings::default()).is_err());
    }
}
