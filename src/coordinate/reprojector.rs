//! Point reprojection between named coordinate systems
//!
//! Web Mercator is handled with the closed-form formulas from `mercator`,
//! routed through WGS84. Every other pair is delegated to a transform
//! handle that is built once per ordered `(from, to)` pair and cached.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use log::{debug, trace};

use super::crs::{self, CoordinateSystem, WGS84};
use super::mercator::{lon_lat_to_mercator, mercator_to_lon_lat};
use super::point::Point;
use super::transform::{PointTransform, Proj4Factory, TransformFactory};
use crate::errors::{GeoError, GeoResult};

type PairKey = (CoordinateSystem, CoordinateSystem);

/// Lazily populated map of transform handles keyed by `(from, to)`
///
/// Entries are never evicted. Lookup and insertion happen under one lock,
/// so at most one handle is built per pair.
#[derive(Default)]
pub struct TransformCache {
    entries: Mutex<HashMap<PairKey, Arc<dyn PointTransform>>>,
}

impl TransformCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached handle for the pair, building it with `factory` on a miss
    pub fn get_or_create(
        &self,
        factory: &dyn TransformFactory,
        from: &CoordinateSystem,
        to: &CoordinateSystem,
    ) -> GeoResult<Arc<dyn PointTransform>> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| GeoError::UnsupportedTransform("Transform cache lock poisoned".to_string()))?;

        let key = (from.clone(), to.clone());
        if let Some(handle) = entries.get(&key) {
            return Ok(Arc::clone(handle));
        }

        debug!("Creating transform {} -> {}", from.identifier(), to.identifier());
        let handle = factory.create_transform(from, to)?;
        entries.insert(key, Arc::clone(&handle));
        Ok(handle)
    }

    /// Number of cached handles
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    /// Whether no handle has been cached yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Converts points between coordinate systems
pub struct Reprojector {
    factory: Box<dyn TransformFactory>,
    cache: TransformCache,
}

impl Reprojector {
    /// Create a reprojector backed by proj4rs
    pub fn new() -> Self {
        Self::with_factory(Box::new(Proj4Factory))
    }

    /// Create a reprojector with a custom transform factory
    pub fn with_factory(factory: Box<dyn TransformFactory>) -> Self {
        Reprojector {
            factory,
            cache: TransformCache::new(),
        }
    }

    /// Reproject a point from one coordinate system to another
    ///
    /// # Arguments
    /// * `from` - Coordinate system of the input
    /// * `to` - Target coordinate system
    /// * `x`, `y` - Input coordinates in `from` units (degrees for geographic)
    ///
    /// # Returns
    /// The point in `to` units. Fails with `InvalidInput` when a Web Mercator
    /// target receives a latitude outside ±89.999999, and with
    /// `UnsupportedTransform` when the projection library rejects the pair.
    pub fn reproject(
        &self,
        from: &CoordinateSystem,
        to: &CoordinateSystem,
        x: f64,
        y: f64,
    ) -> GeoResult<Point> {
        trace!("Reprojecting ({}, {}) from {} to {}", x, y, from.identifier(), to.identifier());

        if from.is_web_mercator() {
            let lon_lat = mercator_to_lon_lat(x, y);
            return self.reproject(&WGS84, to, lon_lat.x, lon_lat.y);
        }

        if to.is_web_mercator() {
            let lon_lat = self.reproject(from, &WGS84, x, y)?;
            return lon_lat_to_mercator(lon_lat.x, lon_lat.y);
        }

        let transform = self.cache.get_or_create(self.factory.as_ref(), from, to)?;
        let (out_x, out_y) = transform.apply(x, y)?;
        Ok(Point::new(out_x, out_y))
    }

    /// Reproject a [`Point`]
    pub fn reproject_point(
        &self,
        from: &CoordinateSystem,
        to: &CoordinateSystem,
        point: &Point,
    ) -> GeoResult<Point> {
        self.reproject(from, to, point.x, point.y)
    }

    /// Reproject a slice of points, stopping at the first failure
    pub fn reproject_batch(
        &self,
        from: &CoordinateSystem,
        to: &CoordinateSystem,
        points: &[Point],
    ) -> GeoResult<Vec<Point>> {
        points
            .iter()
            .map(|p| self.reproject(from, to, p.x, p.y))
            .collect()
    }

    /// Look up one of the well-known coordinate systems by SRID
    pub fn get_coordinate_system_by_srid(&self, srid: u32) -> Option<&'static CoordinateSystem> {
        crs::find_by_srid(srid)
    }

    /// Number of transform handles built so far
    pub fn cached_transform_count(&self) -> usize {
        self.cache.len()
    }
}

impl Default for Reprojector {
    fn default() -> Self {
        Self::new()
    }
}
