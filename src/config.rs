//! Run configuration.
//!
//! One immutable [`Config`] value is constructed at startup from the
//! command-line flags and passed by reference into the walker. There is
//! no config file and no persisted state — the flags are the whole
//! configuration surface.
//!
//! An unrecognized transformation name or a zero parameter is a fatal
//! [`ConfigError`]: nothing is walked and nothing is written.

use crate::transform::Transformation;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unsupported transformation: {0} (expected \"resize\" or \"crop\")")]
    UnsupportedTransformation(String),
    #[error("Transformation parameter must be at least 1, got {0}")]
    InvalidParam(u32),
}

/// Immutable configuration for one mirror run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root to scan for files to convert.
    pub source_root: PathBuf,
    /// Root to mirror converted files into.
    pub target_root: PathBuf,
    /// The transformation applied to every file.
    pub transformation: Transformation,
}

impl Config {
    /// Build a validated configuration from flag values.
    pub fn new(
        source_root: PathBuf,
        target_root: PathBuf,
        transformation_name: &str,
        param: u32,
    ) -> Result<Self, ConfigError> {
        let transformation = parse_transformation(transformation_name, param)?;
        Ok(Self {
            source_root,
            target_root,
            transformation,
        })
    }
}

/// Resolve a transformation name and its parameter into a [`Transformation`].
///
/// The parameter's meaning depends on the name: divisor for `resize`,
/// square edge length for `crop`. Zero is rejected for both — a zero
/// divisor is undefined and a zero crop is an empty image.
pub fn parse_transformation(name: &str, param: u32) -> Result<Transformation, ConfigError> {
    let transformation = match name {
        "resize" => Transformation::Resize { factor: param },
        "crop" => Transformation::Crop { size: param },
        other => return Err(ConfigError::UnsupportedTransformation(other.to_string())),
    };
    if param == 0 {
        return Err(ConfigError::InvalidParam(param));
    }
    Ok(transformation)
}
