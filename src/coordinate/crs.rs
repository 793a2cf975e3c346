//! Coordinate Reference System handling

use std::fmt;
use lazy_static::lazy_static;

/// Authority name used by every well-known system
pub const EPSG_AUTHORITY: &str = "EPSG";

/// SRID of WGS 84 geographic coordinates
pub const WGS84_SRID: u32 = 4326;
/// SRID of NAD83 / Pennsylvania South (ftUS)
pub const PA_SOUTH_SRID: u32 = 2272;
/// SRID of NZGD2000 / New Zealand Transverse Mercator 2000
pub const NZTM_SRID: u32 = 2193;
/// SRID of WGS 84 / Pseudo-Mercator
pub const WEB_MERCATOR_SRID: u32 = 3857;

/// A named 2-D geographic or projected reference frame
///
/// `definition` is the PROJ string handed to the projection library.
/// Equality and hashing cover every field, so two systems compare equal only
/// when they carry the same authority code and the same definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CoordinateSystem {
    /// Human readable name
    pub name: String,
    /// Authority issuing the code (e.g. "EPSG")
    pub authority: String,
    /// Numeric authority code (SRID)
    pub code: u32,
    /// Definition understood by the projection library
    pub definition: String,
}

impl CoordinateSystem {
    /// Create a coordinate system from its parts
    pub fn new(name: &str, authority: &str, code: u32, definition: &str) -> Self {
        CoordinateSystem {
            name: name.to_string(),
            authority: authority.to_string(),
            code,
            definition: definition.to_string(),
        }
    }

    /// Whether the definition describes geographic (lon/lat) coordinates
    pub fn is_geographic(&self) -> bool {
        self.definition.contains("+proj=longlat") || self.definition.contains("+proj=latlong")
    }

    /// Whether this is the Web Mercator sentinel
    pub fn is_web_mercator(&self) -> bool {
        *self == *WEB_MERCATOR
    }

    /// Authority-qualified identifier, e.g. "EPSG:4326"
    pub fn identifier(&self) -> String {
        format!("{}:{}", self.authority, self.code)
    }
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}:{})", self.name, self.authority, self.code)
    }
}

lazy_static! {
    /// WGS 84 geographic coordinates (EPSG:4326)
    pub static ref WGS84: CoordinateSystem = CoordinateSystem::new(
        "WGS 84",
        EPSG_AUTHORITY,
        WGS84_SRID,
        "+proj=longlat +datum=WGS84 +no_defs",
    );

    /// NAD83 / Pennsylvania South in US survey feet (EPSG:2272)
    pub static ref PA_SOUTH_STATE_PLANE: CoordinateSystem = CoordinateSystem::new(
        "NAD83 / Pennsylvania South (ftUS)",
        EPSG_AUTHORITY,
        PA_SOUTH_SRID,
        "+proj=lcc +lat_1=40.96666666666667 +lat_2=39.93333333333333 \
         +lat_0=39.33333333333334 +lon_0=-77.75 +x_0=600000 +y_0=0 \
         +ellps=GRS80 +towgs84=0,0,0,0,0,0,0 +units=us-ft +no_defs",
    );

    /// NZGD2000 / New Zealand Transverse Mercator 2000 (EPSG:2193)
    pub static ref NZTM: CoordinateSystem = CoordinateSystem::new(
        "NZGD2000 / New Zealand Transverse Mercator 2000",
        EPSG_AUTHORITY,
        NZTM_SRID,
        "+proj=tmerc +lat_0=0 +lon_0=173 +k=0.9996 +x_0=1600000 +y_0=10000000 \
         +ellps=GRS80 +towgs84=0,0,0,0,0,0,0 +units=m +no_defs",
    );

    /// Nominal Web Mercator (EPSG:3857)
    ///
    /// The definition is an ellipsoidal Mercator stand-in and is never given
    /// to the projection library: routing through the closed-form spherical
    /// formulas in `mercator` is keyed on this value's identity.
    pub static ref WEB_MERCATOR: CoordinateSystem = CoordinateSystem::new(
        "WGS 84 / Pseudo-Mercator",
        EPSG_AUTHORITY,
        WEB_MERCATOR_SRID,
        "+proj=merc +lon_0=0 +k=1 +x_0=0 +y_0=0 +datum=WGS84 +units=m +no_defs",
    );

    /// Every well-known system, in lookup order
    pub static ref WELL_KNOWN_SYSTEMS: Vec<&'static CoordinateSystem> =
        vec![&*WGS84, &*PA_SOUTH_STATE_PLANE, &*NZTM, &*WEB_MERCATOR];
}

/// Find a well-known coordinate system by its authority code
///
/// Returns `None` when the SRID is not in the table; a miss is an ordinary
/// outcome, not an error.
pub fn find_by_srid(srid: u32) -> Option<&'static CoordinateSystem> {
    WELL_KNOWN_SYSTEMS.iter().copied().find(|cs| cs.code == srid)
}
