//! Utility modules for common functionality
//!
//! Logging, configuration, timing, progress reporting and input validation
//! used by the command-line layer.

pub mod logger;
pub mod config;
pub mod chronometer;
pub mod coordinate_utils;
pub(crate) mod progress;
