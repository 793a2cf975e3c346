//! Error types for geodesic and reprojection operations

use std::io;
use thiserror::Error;

/// Errors raised by the coordinate math, reprojection and CLI layers
#[derive(Error, Debug)]
pub enum GeoError {
    /// Caller supplied a value outside the domain of an operation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The projection library could not build or apply a transform
    #[error("Unsupported transform: {0}")]
    UnsupportedTransform(String),

    /// SRID typed by a user is not one of the well-known systems
    #[error("Unknown SRID: {0}")]
    UnknownSrid(u32),

    /// Malformed coordinate, SRID or formula text
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid configuration file or value
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for geokit operations
pub type GeoResult<T> = Result<T, GeoError>;

impl From<String> for GeoError {
    fn from(msg: String) -> Self {
        GeoError::InvalidInput(msg)
    }
}
