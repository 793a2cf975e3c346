//! Coordinate handling for geospatial data
//!
//! This module provides the geodesic math, the Web Mercator closed forms,
//! the well-known coordinate systems and the reprojection façade.

pub mod geomath;
pub mod mercator;
mod point;
mod crs;
mod transform;
mod reprojector;

// Re-export key types
pub use self::point::Point;
pub use self::crs::{
    find_by_srid, CoordinateSystem, NZTM, PA_SOUTH_STATE_PLANE, WEB_MERCATOR, WELL_KNOWN_SYSTEMS,
    WGS84, EPSG_AUTHORITY, NZTM_SRID, PA_SOUTH_SRID, WEB_MERCATOR_SRID, WGS84_SRID,
};
pub use self::transform::{PointTransform, Proj4Factory, Proj4Transform, TransformFactory};
pub use self::reprojector::{Reprojector, TransformCache};
pub use self::geomath::{haversine_distance_meters, vincenty_distance_meters, DistanceFormula};
pub use self::mercator::{lon_lat_to_mercator, mercator_to_lon_lat};
