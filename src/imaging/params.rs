//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between [`Transformation`](crate::transform::Transformation)
//! (which decides the geometry) and the [`backend`](super::backend) (which
//! does the actual pixel work). This separation allows swapping backends
//! (e.g. for testing with a mock) without changing transformation logic.
//!
//! There is no quality or encoder knob: output is always JPEG at encoder
//! defaults.

use super::geometry::CropRect;
use std::path::PathBuf;

/// Parameters for a resize operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Parameters for a crop operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropParams {
    pub source: PathBuf,
    pub output: PathBuf,
    /// Window to extract; must lie within the source bounds.
    pub region: CropRect,
}
