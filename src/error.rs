//! Error types for body/environment construction and scenario loading
//!
//! The physics operators themselves are total over valid bodies, so the only
//! failures are invalid construction values and broken configuration files.

use std::path::PathBuf;

use thiserror::Error;

/// A body or environment was built with values that break a physics invariant
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("mass must be positive and finite, got {0}")]
    InvalidMass(f64),

    #[error("elasticity must lie in (0, 1], got {0}")]
    InvalidElasticity(f64),

    #[error("environment bounds must be positive, got {width} x {height}")]
    InvalidBounds { width: f64, height: f64 },

    #[error("air mass must be positive and finite, got {0}")]
    InvalidAirMass(f64),

    #[error("speed must be non-negative and finite, got {0}")]
    InvalidSpeed(f64),

    #[error("parameter `{name}` is out of range, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Failure while reading or interpreting a scenario file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed scenario yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Physics(#[from] PhysicsError),

    #[error("radius range [{min}, {max}] is empty or non-positive")]
    InvalidRadiusRange { min: f64, max: f64 },
}
