//! Generic coordinate transformation through proj4rs
//!
//! Every pair of coordinate systems that is not handled by the closed-form
//! Web Mercator formulas goes through a [`PointTransform`] built by a
//! [`TransformFactory`]. The default factory delegates to proj4rs.

use std::sync::Arc;
use log::debug;
use proj4rs::proj::Proj;

use super::crs::CoordinateSystem;
use crate::errors::{GeoError, GeoResult};

/// A reusable, immutable transform between two fixed coordinate systems
pub trait PointTransform: Send + Sync {
    /// Transform a single point in the source system's native units
    fn apply(&self, x: f64, y: f64) -> GeoResult<(f64, f64)>;
}

/// Builds transforms for ordered pairs of coordinate systems
pub trait TransformFactory: Send + Sync {
    /// Parse both definitions and return a transform from `from` to `to`
    ///
    /// Fails with `UnsupportedTransform` when either definition cannot be
    /// parsed or the pair is not supported.
    fn create_transform(
        &self,
        from: &CoordinateSystem,
        to: &CoordinateSystem,
    ) -> GeoResult<Arc<dyn PointTransform>>;
}

/// Transform handle backed by a pair of proj4rs projections
///
/// proj4rs works in radians for geographic systems; this wrapper takes and
/// returns degrees so callers always see CRS native units.
pub struct Proj4Transform {
    src: Proj,
    dst: Proj,
    src_is_geo: bool,
    dst_is_geo: bool,
}

impl Proj4Transform {
    /// Create a transform from two coordinate system definitions
    pub fn new(from: &CoordinateSystem, to: &CoordinateSystem) -> GeoResult<Self> {
        let src = Proj::from_proj_string(&from.definition)
            .map_err(|e| GeoError::UnsupportedTransform(format!("{}: {}", from.identifier(), e)))?;
        let dst = Proj::from_proj_string(&to.definition)
            .map_err(|e| GeoError::UnsupportedTransform(format!("{}: {}", to.identifier(), e)))?;
        let src_is_geo = src.is_latlong();
        let dst_is_geo = dst.is_latlong();
        Ok(Proj4Transform {
            src,
            dst,
            src_is_geo,
            dst_is_geo,
        })
    }
}

impl PointTransform for Proj4Transform {
    fn apply(&self, x: f64, y: f64) -> GeoResult<(f64, f64)> {
        let mut point = if self.src_is_geo {
            (x.to_radians(), y.to_radians())
        } else {
            (x, y)
        };

        proj4rs::transform::transform(&self.src, &self.dst, &mut point)
            .map_err(|e| GeoError::UnsupportedTransform(e.to_string()))?;

        if self.dst_is_geo {
            Ok((point.0.to_degrees(), point.1.to_degrees()))
        } else {
            Ok(point)
        }
    }
}

/// Default factory producing [`Proj4Transform`] handles
#[derive(Debug, Default, Clone, Copy)]
pub struct Proj4Factory;

impl TransformFactory for Proj4Factory {
    fn create_transform(
        &self,
        from: &CoordinateSystem,
        to: &CoordinateSystem,
    ) -> GeoResult<Arc<dyn PointTransform>> {
        debug!("Building proj4rs transform {} -> {}", from.identifier(), to.identifier());
        Ok(Arc::new(Proj4Transform::new(from, to)?))
    }
}
