//! Spherical Web Mercator transforms
//!
//! This module converts between WGS84 longitude/latitude (degrees) and
//! Web Mercator x/y (meters) with closed-form formulas, without going through
//! the projection library.

use std::f64::consts::PI;
use log::debug;

use super::geomath::{to_degrees, to_radians, EARTH_RADIUS};
use super::point::Point;
use crate::errors::{GeoError, GeoResult};

/// Largest absolute latitude accepted by the forward transform
pub const MAX_LATITUDE: f64 = 89.999999;

/// Convert coordinates from WGS84 longitude/latitude to Web Mercator
///
/// # Arguments
/// * `lon` - Longitude in degrees
/// * `lat` - Latitude in degrees, within ±89.999999
///
/// # Returns
/// A Point with x and y in meters, or `InvalidInput` if the latitude is out
/// of range
pub fn lon_lat_to_mercator(lon: f64, lat: f64) -> GeoResult<Point> {
    if lat > MAX_LATITUDE || lat < -MAX_LATITUDE {
        return Err(GeoError::InvalidInput(format!(
            "Latitude {} is outside the Web Mercator range of ±{}",
            lat, MAX_LATITUDE
        )));
    }

    let x = EARTH_RADIUS * to_radians(lon);
    let sin_phi = to_radians(lat).sin();
    let y = EARTH_RADIUS / 2.0 * ((1.0 + sin_phi) / (1.0 - sin_phi)).ln();

    debug!("Transformed WGS84 ({}, {}) to Web Mercator ({}, {})", lon, lat, x, y);

    Ok(Point::new(x, y))
}

/// Convert coordinates from Web Mercator to WGS84 longitude/latitude
///
/// Longitudes that wrap around the globe one or more times are normalized
/// into `[-180, 180)`. Latitude saturates toward ±90 for large |y|.
///
/// # Arguments
/// * `x` - X coordinate in meters
/// * `y` - Y coordinate in meters
///
/// # Returns
/// A Point with longitude and latitude in degrees
pub fn mercator_to_lon_lat(x: f64, y: f64) -> Point {
    let lon_raw = to_degrees(x / EARTH_RADIUS);
    let rotations = ((lon_raw + 180.0) / 360.0).floor();
    let lon = lon_raw - rotations * 360.0;

    let lat = to_degrees(PI / 2.0 - 2.0 * (-y / EARTH_RADIUS).exp().atan());

    debug!("Transformed Web Mercator ({}, {}) to WGS84 ({}, {})", x, y, lon, lat);

    Point::new(lon, lat)
}
