//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the three operations every backend
//! must support: identify, resize, and crop.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust, zero
//! external dependencies. Everything is statically linked into the binary.

use super::params::{CropParams, ResizeParams};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },
    #[error("Failed to encode {path}: {reason}")]
    Encode { path: PathBuf, reason: String },
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
///
/// Every backend must implement all three operations — identify, resize,
/// and crop — so the rest of the codebase is backend-agnostic. Decode
/// failures (unreadable or non-image input) must surface as
/// [`BackendError::Decode`], never be swallowed.
pub trait ImageBackend: Sync {
    /// Get image dimensions without a full decode.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Execute a resize operation (Lanczos3 resampling to exact dimensions).
    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError>;

    /// Execute a crop operation (extract the given window).
    fn crop(&self, params: &CropParams) -> Result<(), BackendError>;
}
