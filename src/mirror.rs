//! Tree mirroring — the traversal-and-transform pipeline.
//!
//! Walks the source root once, depth-first in sorted lexical order, and
//! for every file computes the mirrored path under the target root:
//! the source-relative path is preserved verbatim, so
//! `source/a/b/c.jpg` lands at `target/a/b/c.jpg`. Directories are
//! only traversed — an empty directory produces nothing on the target
//! side.
//!
//! ## Idempotence
//!
//! A file whose target already exists is skipped. The output tree is
//! therefore its own resume ledger: re-running over a partially
//! completed target converts only what is missing, and a second run
//! over a complete one converts nothing.
//!
//! ## Failure policy
//!
//! Per-file errors (directory creation, decode, encode, I/O) never
//! abort the walk. Each failure is recorded in the [`MirrorReport`] and
//! the walk continues with the next entry; the caller decides what a
//! non-empty failure list means (the CLI exits non-zero). Only a source
//! root that is not a directory is fatal up front.
//!
//! ## Progress events
//!
//! Each file's outcome is streamed as a [`MirrorEvent`] over an
//! optional channel sender, so display formatting stays out of the
//! walk (see [`output`](crate::output)).

use crate::config::Config;
use crate::imaging::ImageBackend;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum MirrorError {
    #[error("Source root is not a directory: {0}")]
    SourceNotADirectory(PathBuf),
}

/// Progress event for one walked entry.
///
/// Paths are relative to the source root (the mirrored path is the same
/// string relative to the target root).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MirrorEvent {
    Converted { path: String },
    AlreadyPresent { path: String },
    Failed { path: String, error: String },
}

/// A per-file failure, kept in the report and rendered at the end.
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub path: String,
    pub error: String,
}

/// Aggregated outcome of one walk, in traversal order.
#[derive(Debug, Default, Serialize)]
pub struct MirrorReport {
    pub converted: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<FileFailure>,
}

impl MirrorReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Walk the source root and mirror every file into the target root.
///
/// Returns the per-file outcomes; `Err` only for a source root that is
/// not a directory.
pub fn mirror(
    config: &Config,
    backend: &impl ImageBackend,
    events: Option<&Sender<MirrorEvent>>,
) -> Result<MirrorReport, MirrorError> {
    if !config.source_root.is_dir() {
        return Err(MirrorError::SourceNotADirectory(config.source_root.clone()));
    }

    let mut report = MirrorReport::default();

    for entry in WalkDir::new(&config.source_root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                // Unreadable entry (permissions, dangling link): record
                // it against whatever path is known and keep walking.
                let path = e
                    .path()
                    .map(|p| relative_display(p, &config.source_root))
                    .unwrap_or_default();
                record_failure(&mut report, events, path, e.to_string());
                continue;
            }
        };

        // Directories are never transformed; traversal continues into them.
        if entry.file_type().is_dir() {
            continue;
        }

        let rel = entry.path().strip_prefix(&config.source_root).unwrap();
        let target = config.target_root.join(rel);
        let path = rel.to_string_lossy().to_string();

        if target.exists() {
            report.skipped.push(path.clone());
            send(events, MirrorEvent::AlreadyPresent { path });
            continue;
        }

        if let Some(parent) = target.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            let error = format!("Unable to create {}: {}", parent.display(), e);
            record_failure(&mut report, events, path, error);
            continue;
        }

        match config.transformation.apply(backend, entry.path(), &target) {
            Ok(()) => {
                report.converted.push(path.clone());
                send(events, MirrorEvent::Converted { path });
            }
            Err(e) => record_failure(&mut report, events, path, e.to_string()),
        }
    }

    Ok(report)
}

fn record_failure(
    report: &mut MirrorReport,
    events: Option<&Sender<MirrorEvent>>,
    path: String,
    error: String,
) {
    report.failed.push(FileFailure {
        path: path.clone(),
        error: error.clone(),
    });
    send(events, MirrorEvent::Failed { path, error });
}

fn send(events: Option<&Sender<MirrorEvent>>, event: MirrorEvent) {
    if let Some(tx) = events {
        tx.send(event).ok();
    }
}

fn relative_display(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}
