//! End-to-end tests: real trees of synthetic images, real backend.
//!
//! Everything here runs the full walk with [`RustBackend`] against a
//! `TempDir` — no mocks, no fixtures on disk.

use pixmirror::config::Config;
use pixmirror::imaging::RustBackend;
use pixmirror::mirror::mirror;
use pixmirror::transform::Transformation;
use std::path::Path;
use tempfile::TempDir;

/// Create a small valid JPEG file with the given dimensions, creating
/// parent directories as needed.
fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    use image::ImageEncoder;
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

fn dimensions(path: &Path) -> (u32, u32) {
    image::image_dimensions(path).unwrap()
}

/// All file paths under a root, relative, sorted.
fn tree_files(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .to_string()
        })
        .collect();
    files.sort();
    files
}

#[test]
fn resize_mirrors_tree_with_floored_dimensions() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("source");
    let target = tmp.path().join("target");
    create_test_jpeg(&source.join("albums/trip/dawn.jpg"), 1000, 800);
    create_test_jpeg(&source.join("albums/dusk.jpg"), 400, 300);
    create_test_jpeg(&source.join("root.jpg"), 99, 50);

    let config = Config {
        source_root: source.clone(),
        target_root: target.clone(),
        transformation: Transformation::Resize { factor: 4 },
    };
    let report = mirror(&config, &RustBackend::new(), None).unwrap();

    assert_eq!(report.converted.len(), 3);
    assert!(!report.has_failures());

    // Mirrored paths, and nothing else
    assert_eq!(
        tree_files(&target),
        vec!["albums/dusk.jpg", "albums/trip/dawn.jpg", "root.jpg"]
    );

    // floor(dim / 4) on both axes
    assert_eq!(dimensions(&target.join("albums/trip/dawn.jpg")), (250, 200));
    assert_eq!(dimensions(&target.join("albums/dusk.jpg")), (100, 75));
    assert_eq!(dimensions(&target.join("root.jpg")), (24, 12));
}

#[test]
fn crop_produces_centered_clamped_squares() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("source");
    let target = tmp.path().join("target");
    create_test_jpeg(&source.join("big.jpg"), 1000, 800);
    create_test_jpeg(&source.join("small.jpg"), 300, 200);

    let config = Config {
        source_root: source,
        target_root: target.clone(),
        transformation: Transformation::Crop { size: 500 },
    };
    let report = mirror(&config, &RustBackend::new(), None).unwrap();

    assert_eq!(report.converted.len(), 2);
    assert_eq!(dimensions(&target.join("big.jpg")), (500, 500));
    // Smaller than the window in both dimensions: clamped to the source
    assert_eq!(dimensions(&target.join("small.jpg")), (300, 200));
}

#[test]
fn second_run_is_a_no_op() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("source");
    let target = tmp.path().join("target");
    create_test_jpeg(&source.join("a/one.jpg"), 200, 160);
    create_test_jpeg(&source.join("b/two.jpg"), 200, 160);

    let config = Config {
        source_root: source,
        target_root: target,
        transformation: Transformation::Resize { factor: 2 },
    };

    let first = mirror(&config, &RustBackend::new(), None).unwrap();
    assert_eq!(first.converted.len(), 2);
    assert!(first.skipped.is_empty());

    let second = mirror(&config, &RustBackend::new(), None).unwrap();
    assert!(second.converted.is_empty());
    assert_eq!(second.skipped.len(), 2);
    assert!(!second.has_failures());
}

#[test]
fn target_directory_chain_is_created_transparently() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("source");
    // Target root itself does not exist yet
    let target = tmp.path().join("deep/nested/target");
    create_test_jpeg(&source.join("x/y/z/photo.jpg"), 100, 100);

    let config = Config {
        source_root: source,
        target_root: target.clone(),
        transformation: Transformation::Resize { factor: 2 },
    };
    let report = mirror(&config, &RustBackend::new(), None).unwrap();

    assert_eq!(report.converted, vec!["x/y/z/photo.jpg".to_string()]);
    assert!(target.join("x/y/z/photo.jpg").exists());
}

#[test]
fn non_image_file_fails_alone_and_batch_continues() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("source");
    let target = tmp.path().join("target");
    create_test_jpeg(&source.join("album/photo.jpg"), 120, 90);
    std::fs::write(source.join("album/notes.txt"), "sidecar text").unwrap();

    let config = Config {
        source_root: source,
        target_root: target.clone(),
        transformation: Transformation::Resize { factor: 3 },
    };
    let report = mirror(&config, &RustBackend::new(), None).unwrap();

    assert_eq!(report.converted, vec!["album/photo.jpg".to_string()]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].path, "album/notes.txt");

    // The failed file produced no target artifact
    assert!(!target.join("album/notes.txt").exists());

    // Re-run: the converted file skips, the bad file fails again
    let rerun = mirror(&config, &RustBackend::new(), None).unwrap();
    assert!(rerun.converted.is_empty());
    assert_eq!(rerun.skipped, vec!["album/photo.jpg".to_string()]);
    assert_eq!(rerun.failed.len(), 1);
}

#[test]
fn directories_without_files_leave_no_trace() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("source");
    let target = tmp.path().join("target");
    std::fs::create_dir_all(source.join("drafts/unfinished")).unwrap();
    create_test_jpeg(&source.join("keep.jpg"), 64, 64);

    let config = Config {
        source_root: source,
        target_root: target.clone(),
        transformation: Transformation::Crop { size: 32 },
    };
    mirror(&config, &RustBackend::new(), None).unwrap();

    assert_eq!(tree_files(&target), vec!["keep.jpg"]);
    assert!(!target.join("drafts").exists());
}

#[test]
fn report_round_trips_through_json() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("source");
    let target = tmp.path().join("target");
    create_test_jpeg(&source.join("one.jpg"), 100, 100);
    std::fs::write(source.join("junk.bin"), [0u8; 16]).unwrap();

    let config = Config {
        source_root: source,
        target_root: target,
        transformation: Transformation::Resize { factor: 2 },
    };
    let report = mirror(&config, &RustBackend::new(), None).unwrap();

    let json = serde_json::to_string_pretty(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["converted"], serde_json::json!(["one.jpg"]));
    assert_eq!(value["failed"][0]["path"], "junk.bin");
    assert!(
        value["failed"][0]["error"]
            .as_str()
            .unwrap()
            .contains("junk.bin")
    );
}
