//! # pixmirror
//!
//! Mirror a directory tree with resized or cropped copies of every
//! image. The source tree's structure is preserved 1:1 under the target
//! root, intermediate directories are created as needed, and files
//! whose target already exists are skipped — so re-running over a
//! partially completed output tree picks up where it left off.
//!
//! # Pipeline
//!
//! ```text
//! walk source/ → mirror path under target/ → exists? skip
//!                                          → else decode, transform, encode JPEG
//! ```
//!
//! One transformation applies to the whole run, chosen at startup:
//!
//! - **resize** — divide both dimensions by an integer factor
//!   (Lanczos3 resampled)
//! - **crop** — extract a centered square of a given edge length,
//!   clamped to the image's own bounds
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Immutable run configuration built from CLI flags |
//! | [`transform`] | The transformation variants and their per-file skeleton |
//! | [`imaging`] | Geometry math, backend trait, pure-Rust backend |
//! | [`mirror`] | The walker — traversal, skip logic, outcome report |
//! | [`output`] | CLI output formatting for events and the summary |
//!
//! # Design Decisions
//!
//! ## JPEG-Only Output
//!
//! Every converted file is encoded as JPEG at encoder defaults,
//! whatever the input format was. The mirrored path keeps the source
//! file name verbatim, so the tree stays recognizable; the fixed
//! encoding keeps the pipeline to a single, well-supported output
//! path with no per-format option surface.
//!
//! ## Pure-Rust Imaging (No ImageMagick)
//!
//! The [`imaging`] module uses the `image` crate for decoding,
//! Lanczos3 resampling, cropping, and JPEG encoding. No system
//! dependencies: the binary is fully self-contained.
//!
//! ## Errors Are Collected, Not Fatal
//!
//! A corrupt file, a non-image sidecar, or a permission error affects
//! only its own entry: the failure is recorded and reported at the end
//! (and the process exits non-zero), but the rest of the batch still
//! converts. Decode failures are first-class errors — an unreadable
//! input is reported, never silently skipped.

pub mod config;
pub mod imaging;
pub mod mirror;
pub mod output;
pub mod transform;
