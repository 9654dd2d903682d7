//! The transformation applied to each file: resize or centered crop.
//!
//! A [`Transformation`] is a closed enum carrying its single integer
//! parameter. Both variants share one skeleton: identify the source,
//! compute the target geometry with the pure functions in
//! [`imaging::geometry`](crate::imaging::geometry), and hand the pixel
//! work to the [`ImageBackend`]. Dispatch is a plain `match` — two
//! variants do not need a trait object.

use crate::imaging::{
    BackendError, CropParams, ImageBackend, ResizeParams, centered_crop, resize_dimensions,
};
use std::path::Path;

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// A geometric transformation, parameterized by a single integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transformation {
    /// Divide both dimensions by `factor` (floor division), Lanczos3
    /// resampled. A factor of 1 keeps the size but still resamples.
    Resize { factor: u32 },
    /// Extract a centered `size`×`size` window, clamped to the source
    /// dimensions when the image is smaller.
    Crop { size: u32 },
}

impl Transformation {
    /// Short name for display and event output.
    pub fn label(&self) -> &'static str {
        match self {
            Transformation::Resize { .. } => "resize",
            Transformation::Crop { .. } => "crop",
        }
    }

    /// Transform one file into another.
    ///
    /// Identifies the source, computes the geometry for this variant,
    /// and asks the backend for the pixel work. On failure after the
    /// target has been created, a partial or empty target file may
    /// remain — there is no cleanup or rollback; a re-run will skip it.
    pub fn apply(
        &self,
        backend: &impl ImageBackend,
        source: &Path,
        target: &Path,
    ) -> Result<()> {
        let dims = backend.identify(source)?;
        let bounds = (dims.width, dims.height);

        match *self {
            Transformation::Resize { factor } => {
                let (width, height) = resize_dimensions(bounds, factor);
                backend.resize(&ResizeParams {
                    source: source.to_path_buf(),
                    output: target.to_path_buf(),
                    width,
                    height,
                })
            }
            Transformation::Crop { size } => backend.crop(&CropParams {
                source: source.to_path_buf(),
                output: target.to_path_buf(),
                region: centered_crop(bounds, size),
            }),
        }
    }
}
