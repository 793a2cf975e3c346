//! Coordinate and SRID string validation
//!
//! Parsers for the textual forms accepted on the command line and in batch
//! input files: `"x,y"` pairs and SRIDs written as `4326` or `EPSG:4326`.

use log::debug;

use crate::coordinate::{find_by_srid, CoordinateSystem, Point, EPSG_AUTHORITY};
use crate::errors::{GeoError, GeoResult};

/// Parse a coordinate string in the format "x,y"
///
/// Both components must be finite numbers; surrounding whitespace is ignored.
pub fn parse_coordinate(coord_str: &str) -> GeoResult<Point> {
    let parts: Vec<&str> = coord_str.split(',').collect();
    if parts.len() != 2 {
        return Err(GeoError::Parse(format!(
            "Coordinate must be in format 'x,y', got '{}'", coord_str
        )));
    }

    let x = parse_finite(parts[0], "x")?;
    let y = parse_finite(parts[1], "y")?;

    debug!("Parsed coordinate: x={}, y={}", x, y);
    Ok(Point::new(x, y))
}

fn parse_finite(value: &str, axis: &str) -> GeoResult<f64> {
    let parsed = value.trim().parse::<f64>()
        .map_err(|_| GeoError::Parse(format!("Invalid {} coordinate: '{}'", axis, value.trim())))?;
    if !parsed.is_finite() {
        return Err(GeoError::Parse(format!("Non-finite {} coordinate: '{}'", axis, value.trim())));
    }
    Ok(parsed)
}

/// Parse an SRID written as "4326" or "EPSG:4326" (case-insensitive prefix)
pub fn parse_srid(srid_str: &str) -> GeoResult<u32> {
    let trimmed = srid_str.trim();
    let upper = trimmed.to_uppercase();
    let prefix = format!("{}:", EPSG_AUTHORITY);
    let code = upper.strip_prefix(prefix.as_str()).unwrap_or(upper.as_str());

    code.parse::<u32>()
        .map_err(|_| GeoError::Parse(format!("Invalid SRID: '{}'", trimmed)))
}

/// Resolve an SRID string to one of the well-known coordinate systems
pub fn resolve_coordinate_system(srid_str: &str) -> GeoResult<&'static CoordinateSystem> {
    let srid = parse_srid(srid_str)?;
    find_by_srid(srid).ok_or(GeoError::UnknownSrid(srid))
}

/// Parse the contents of a batch input file
///
/// One "x,y" pair per line. Blank lines and lines starting with `#` are
/// skipped. A malformed line is reported with its 1-based line number.
pub fn parse_point_lines(content: &str) -> GeoResult<Vec<Point>> {
    let mut points = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let point = parse_coordinate(line)
            .map_err(|e| GeoError::Parse(format!("line {}: {}", index + 1, e)))?;
        points.push(point);
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::{NZTM, WGS84};

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("-75.171409, 39.946146").unwrap(),
                   Point::new(-75.171409, 39.946146));
        assert_eq!(parse_coordinate("1e6,2").unwrap(), Point::new(1_000_000.0, 2.0));
    }

    #[test]
    fn test_parse_coordinate_rejects_malformed() {
        for bad in ["", "1", "1,2,3", "a,2", "1,", "NaN,0", "inf,1"] {
            assert!(matches!(parse_coordinate(bad), Err(GeoError::Parse(_))), "accepted '{bad}'");
        }
    }

    #[test]
    fn test_parse_srid() {
        assert_eq!(parse_srid("4326").unwrap(), 4326);
        assert_eq!(parse_srid(" EPSG:2272 ").unwrap(), 2272);
        assert_eq!(parse_srid("epsg:3857").unwrap(), 3857);
        assert!(parse_srid("EPSG:").is_err());
        assert!(parse_srid("ESRI:102100").is_err());
        assert!(parse_srid("-1").is_err());
    }

    #[test]
    fn test_resolve_coordinate_system() {
        assert_eq!(resolve_coordinate_system("EPSG:4326").unwrap(), &*WGS84);
        assert_eq!(resolve_coordinate_system("2193").unwrap(), &*NZTM);
        assert!(matches!(resolve_coordinate_system("27700"), Err(GeoError::UnknownSrid(27700))));
    }

    #[test]
    fn test_parse_point_lines() {
        let content = "# header\n1,2\n\n  3.5 , -4 \n";
        let points = parse_point_lines(content).unwrap();
        assert_eq!(points, vec![Point::new(1.0, 2.0), Point::new(3.5, -4.0)]);

        let err = parse_point_lines("1,2\nbroken\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
    }
}
