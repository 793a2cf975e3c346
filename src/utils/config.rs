//! Configuration file loading
//!
//! Settings are read from a TOML file with two optional tables:
//!
//! ```toml
//! [logging]
//! level = "info"
//! file = "geokit.log"
//!
//! [defaults]
//! from_srid = 4326
//! to_srid = 3857
//! distance_method = "vincenty"
//! ```
//!
//! Missing keys keep their defaults.

use std::fs;
use std::str::FromStr;
use log::{debug, LevelFilter};

use crate::coordinate::geomath::DistanceFormula;
use crate::coordinate::{WEB_MERCATOR_SRID, WGS84_SRID};
use crate::errors::{GeoError, GeoResult};

/// Runtime settings for the CLI
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Most verbose log level recorded
    pub log_level: LevelFilter,
    /// Optional log file; console logging is used when absent
    pub log_file: Option<String>,
    /// SRID assumed when `--from` is not given
    pub default_from_srid: u32,
    /// SRID assumed when `--to` is not given
    pub default_to_srid: u32,
    /// Formula used when `--method` is not given
    pub distance_formula: DistanceFormula,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_level: LevelFilter::Info,
            log_file: None,
            default_from_srid: WGS84_SRID,
            default_to_srid: WEB_MERCATOR_SRID,
            distance_formula: DistanceFormula::Vincenty,
        }
    }
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_str(content: &str) -> GeoResult<Self> {
        let toml_value: toml::Value = content
            .parse()
            .map_err(|e| GeoError::Config(format!("Failed to parse TOML: {}", e)))?;

        let mut settings = Settings::default();

        if let Some(logging) = toml_value.get("logging") {
            if let Some(level) = Self::get_str(logging, "logging", "level")? {
                settings.log_level = LevelFilter::from_str(level)
                    .map_err(|_| GeoError::Config(format!("Invalid log level: {}", level)))?;
            }
            if let Some(file) = Self::get_str(logging, "logging", "file")? {
                settings.log_file = Some(file.to_string());
            }
        }

        if let Some(defaults) = toml_value.get("defaults") {
            if let Some(srid) = Self::get_srid(defaults, "from_srid")? {
                settings.default_from_srid = srid;
            }
            if let Some(srid) = Self::get_srid(defaults, "to_srid")? {
                settings.default_to_srid = srid;
            }
            if let Some(method) = Self::get_str(defaults, "defaults", "distance_method")? {
                settings.distance_formula = method
                    .parse()
                    .map_err(|e: GeoError| GeoError::Config(e.to_string()))?;
            }
        }

        debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &str) -> GeoResult<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| GeoError::Config(format!("Cannot read {}: {}", path, e)))?;

        Self::from_str(&contents)
    }

    /// Helper to read an optional string key from a table
    fn get_str<'v>(table: &'v toml::Value, table_name: &str, key: &str) -> GeoResult<Option<&'v str>> {
        match table.get(key) {
            None => Ok(None),
            Some(v) => v
                .as_str()
                .map(Some)
                .ok_or_else(|| GeoError::Config(format!("{}.{} must be a string", table_name, key))),
        }
    }

    /// Helper to read an optional SRID key from the defaults table
    fn get_srid(table: &toml::Value, key: &str) -> GeoResult<Option<u32>> {
        match table.get(key) {
            None => Ok(None),
            Some(v) => v
                .as_integer()
                .and_then(|i| u32::try_from(i).ok())
                .map(Some)
                .ok_or_else(|| GeoError::Config(format!("defaults.{} must be a positive integer", key))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(Settings::from_str("").unwrap(), Settings::default());
    }

    #[test]
    fn test_full_config() {
        let content = r#"
            [logging]
            level = "debug"
            file = "geo.log"

            [defaults]
            from_srid = 2272
            to_srid = 4326
            distance_method = "haversine"
        "#;
        let settings = Settings::from_str(content).unwrap();
        assert_eq!(settings.log_level, LevelFilter::Debug);
        assert_eq!(settings.log_file.as_deref(), Some("geo.log"));
        assert_eq!(settings.default_from_srid, 2272);
        assert_eq!(settings.default_to_srid, 4326);
        assert_eq!(settings.distance_formula, DistanceFormula::Haversine);
    }

    #[test]
    fn test_partial_config() {
        let settings = Settings::from_str("[defaults]\nto_srid = 2193\n").unwrap();
        assert_eq!(settings.default_to_srid, 2193);
        assert_eq!(settings.default_from_srid, WGS84_SRID);
        assert_eq!(settings.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(Settings::from_str("[logging]\nlevel = \"loud\"\n"), Err(GeoError::Config(_))));
        assert!(matches!(Settings::from_str("[defaults]\nfrom_srid = -4\n"), Err(GeoError::Config(_))));
        assert!(matches!(Settings::from_str("[defaults]\nto_srid = \"x\"\n"), Err(GeoError::Config(_))));
        assert!(matches!(
            Settings::from_str("[defaults]\ndistance_method = \"taxicab\"\n"),
            Err(GeoError::Config(_))
        ));
        assert!(matches!(Settings::from_str("not = [valid"), Err(GeoError::Config(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = Settings::from_file("/nonexistent/geokit.toml");
        assert!(matches!(result, Err(GeoError::Config(_))));
    }
}
