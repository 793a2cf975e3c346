pub mod errors;
pub mod coordinate;
pub mod utils;
pub mod commands;

pub use crate::errors::{GeoError, GeoResult};

pub use coordinate::{
    CoordinateSystem, DistanceFormula, Point, Reprojector, TransformCache, TransformFactory,
    PointTransform, NZTM, PA_SOUTH_STATE_PLANE, WEB_MERCATOR, WGS84,
};
pub use coordinate::geomath::{haversine_distance_meters, to_degrees, to_radians, vincenty_distance_meters};
pub use coordinate::mercator::{lon_lat_to_mercator, mercator_to_lon_lat};
