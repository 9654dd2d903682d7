//! CLI output formatting for the mirror run.
//!
//! Each event and the end-of-run summary has a `format_*` function
//! (returns `Vec<String>`) for testability and a `print_*` wrapper that
//! writes to stdout. Format functions are pure — no I/O, no side
//! effects.
//!
//! # Output Format
//!
//! ```text
//! Converted: albums/trip/001-dawn.jpg
//! Already present: albums/trip/002-dusk.jpg
//! Failed: albums/trip/notes.txt
//!     Failed to decode source/albums/trip/notes.txt: ...
//!
//! Mirrored 1 file (1 already present, 1 failed)
//! Failures:
//!     albums/trip/notes.txt: Failed to decode ...
//! ```
//!
//! Converted lines are progress, "Already present" is the skip notice,
//! and failures appear both inline and in the summary so they are not
//! lost in a long run.

use crate::mirror::{MirrorEvent, MirrorReport};

/// Format a single mirror progress event as display lines.
pub fn format_mirror_event(event: &MirrorEvent) -> Vec<String> {
    match event {
        MirrorEvent::Converted { path } => vec![format!("Converted: {}", path)],
        MirrorEvent::AlreadyPresent { path } => vec![format!("Already present: {}", path)],
        MirrorEvent::Failed { path, error } => {
            vec![format!("Failed: {}", path), format!("    {}", error)]
        }
    }
}

/// Print a mirror event to stdout.
pub fn print_mirror_event(event: &MirrorEvent) {
    for line in format_mirror_event(event) {
        println!("{}", line);
    }
}

/// Format the end-of-run summary, including the full failure list.
pub fn format_summary(report: &MirrorReport) -> Vec<String> {
    let files = if report.converted.len() == 1 {
        "file"
    } else {
        "files"
    };
    let mut lines = vec![format!(
        "Mirrored {} {} ({} already present, {} failed)",
        report.converted.len(),
        files,
        report.skipped.len(),
        report.failed.len()
    )];

    if report.has_failures() {
        lines.push("Failures:".to_string());
        for failure in &report.failed {
            lines.push(format!("    {}: {}", failure.path, failure.error));
        }
    }

    lines
}

/// Print the run summary to stdout.
pub fn print_summary(report: &MirrorReport) {
    for line in format_summary(report) {
        println!("{}", line);
    }
}
