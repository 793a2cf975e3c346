//! Angle conversion and geodesic distance formulas
//!
//! Haversine computes great-circle distance on a sphere whose radius is the
//! WGS84 equatorial radius. Vincenty computes the inverse geodesic on the
//! WGS84 ellipsoid by iterating on the auxiliary longitude λ.
//!
//! All longitudes and latitudes are in degrees, distances in metres.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::errors::GeoError;

/// Earth equatorial radius in meters (WGS84 semi-major axis)
pub const EARTH_RADIUS: f64 = 6378137.0;

/// WGS84 ellipsoid parameters used by the Vincenty formula
pub mod wgs84 {
    /// Semi-major axis (metres)
    pub const A: f64 = 6378137.0;
    /// Semi-minor axis (metres)
    pub const B: f64 = 6356752.3142;
    /// Flattening
    pub const F: f64 = 1.0 / 298.257223563;
}

/// Convergence threshold on successive λ values, in radians
const VINCENTY_EPSILON: f64 = 1e-12;

/// Upper bound on Vincenty iterations
const VINCENTY_MAX_ITERATIONS: usize = 100;

/// Convert radians to degrees
pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Convert degrees to radians
pub fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Great-circle distance between two points using the Haversine formula
///
/// # Arguments
/// * `lon1`, `lat1` - First point in degrees
/// * `lon2`, `lat2` - Second point in degrees
///
/// # Returns
/// Distance in meters on a sphere of radius [`EARTH_RADIUS`]
pub fn haversine_distance_meters(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let d_lat = to_radians(lat2 - lat1);
    let d_lon = to_radians(lon2 - lon1);
    let lat1 = to_radians(lat1);
    let lat2 = to_radians(lat2);

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS * c
}

/// Ellipsoidal distance between two points using Vincenty's inverse formula
///
/// Returns `0.0` for coincident points. When the λ iteration does not
/// converge within 100 rounds (nearly antipodal points) the result is
/// `f64::NAN`; callers doing bulk work must check with `is_nan()` rather
/// than expect an error value.
///
/// # Arguments
/// * `lon1`, `lat1` - First point in degrees
/// * `lon2`, `lat2` - Second point in degrees
///
/// # Returns
/// Distance in meters on the WGS84 ellipsoid, or `NaN` on non-convergence
pub fn vincenty_distance_meters(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    use wgs84::{A, B, F};

    let l = to_radians(lon2 - lon1);
    let u1 = ((1.0 - F) * to_radians(lat1).tan()).atan();
    let u2 = ((1.0 - F) * to_radians(lat2).tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;
    let mut converged = false;

    let mut sin_sigma = 0.0;
    let mut cos_sigma = 0.0;
    let mut sigma = 0.0;
    let mut cos_sq_alpha = 0.0;
    let mut cos_2sigma_m = 0.0;

    for _ in 0..VINCENTY_MAX_ITERATIONS {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();

        sin_sigma = ((cos_u2 * sin_lambda).powi(2)
            + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
        .sqrt();
        if sin_sigma == 0.0 {
            return 0.0;
        }

        cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        sigma = sin_sigma.atan2(cos_sigma);

        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;

        cos_2sigma_m = cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha;
        if cos_2sigma_m.is_nan() {
            // equatorial line: cos²α = 0
            cos_2sigma_m = 0.0;
        }

        let c = F / 16.0 * cos_sq_alpha * (4.0 + F * (4.0 - 3.0 * cos_sq_alpha));
        let lambda_prev = lambda;
        lambda = l
            + (1.0 - c)
                * F
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

        if (lambda - lambda_prev).abs() < VINCENTY_EPSILON {
            converged = true;
            break;
        }
    }

    if !converged {
        debug!("Vincenty did not converge for ({}, {}) -> ({}, {})", lon1, lat1, lon2, lat2);
        return f64::NAN;
    }

    let u_sq = cos_sq_alpha * (A * A - B * B) / (B * B);
    let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
    let delta_sigma = big_b
        * sin_sigma
        * (cos_2sigma_m
            + big_b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                    - big_b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                        * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));

    B * big_a * (sigma - delta_sigma)
}

/// Distance formula selectable from configuration or the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceFormula {
    /// Spherical great-circle distance
    Haversine,
    /// Ellipsoidal WGS84 distance
    #[default]
    Vincenty,
}

impl DistanceFormula {
    /// Compute the distance between two lon/lat points with this formula
    pub fn distance_meters(&self, lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
        match self {
            DistanceFormula::Haversine => haversine_distance_meters(lon1, lat1, lon2, lat2),
            DistanceFormula::Vincenty => vincenty_distance_meters(lon1, lat1, lon2, lat2),
        }
    }

    /// Lowercase name used in configuration and CLI flags
    pub fn name(&self) -> &'static str {
        match self {
            DistanceFormula::Haversine => "haversine",
            DistanceFormula::Vincenty => "vincenty",
        }
    }
}

impl FromStr for DistanceFormula {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "haversine" => Ok(DistanceFormula::Haversine),
            "vincenty" => Ok(DistanceFormula::Vincenty),
            other => Err(GeoError::Parse(format!("Unknown distance formula: {}", other))),
        }
    }
}

impl fmt::Display for DistanceFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
