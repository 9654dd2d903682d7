//! Image operations — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Resize** | Lanczos3 via `resize_exact` |
//! | **Crop** | `DynamicImage::crop_imm` |
//! | **Encode → JPEG** | `image::codecs::jpeg::JpegEncoder` |
//!
//! The module is split into:
//! - **Geometry**: pure functions for dimension math (unit testable)
//! - **Parameters**: data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
pub mod geometry;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use geometry::{CropRect, centered_crop, resize_dimensions};
pub use params::{CropParams, ResizeParams};
pub use rust_backend::RustBackend;
