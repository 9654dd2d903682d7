//! Pure Rust image processing backend — zero external dependencies.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::image_dimensions` (header read, no full decode) |
//! | Decode (JPEG, PNG, TIFF, WebP) | `image` crate (pure Rust decoders) |
//! | Resize | `image::imageops` via `resize_exact` with `Lanczos3` |
//! | Crop | `image::DynamicImage::crop_imm` |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` (default options) |
//!
//! Output is always JPEG, whatever the target path's extension says: the
//! mirrored path keeps the source file name verbatim, and the fixed
//! output encoding is a property of the pipeline, not of the name.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::{CropParams, ResizeParams};
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use std::path::Path;

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
///
/// A file the decoders cannot handle (corrupt data, or not an image at
/// all) is a [`BackendError::Decode`] — callers report it per file.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .with_guessed_format()
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| BackendError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

/// Encode a pixel grid as JPEG at the given path, encoder defaults.
///
/// JPEG has no alpha channel, so pixels are flattened to RGB8 first.
fn save_jpeg(img: &DynamicImage, path: &Path) -> Result<(), BackendError> {
    let file = std::fs::File::create(path).map_err(BackendError::Io)?;
    let writer = std::io::BufWriter::new(file);
    let encoder = image::codecs::jpeg::JpegEncoder::new(writer);
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
    rgb.write_with_encoder(encoder)
        .map_err(|e| BackendError::Encode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) =
            image::image_dimensions(path).map_err(|e| BackendError::Decode {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        Ok(Dimensions { width, height })
    }

    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;
        let resized = img.resize_exact(params.width, params.height, FilterType::Lanczos3);
        save_jpeg(&resized, &params.output)
    }

    fn crop(&self, params: &CropParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;
        let r = params.region;
        let cropped = img.crop_imm(r.x, r.y, r.width, r.height);
        save_jpeg(&cropped, &params.output)
    }
}
