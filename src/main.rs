use clap::Parser;
use pixmirror::config::Config;
use pixmirror::imaging::RustBackend;
use pixmirror::{mirror, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pixmirror")]
#[command(about = "Mirror a directory tree with resized or cropped copies of every image")]
#[command(long_about = "\
Mirror a directory tree with resized or cropped copies of every image

Walks the source directory recursively and writes a converted copy of
each file to the same relative path under the target directory, creating
intermediate directories as needed. Files whose target already exists
are skipped, so interrupted runs can simply be re-run.

Transformations (pick one per run):

  resize    divide width and height by --param (integer division)
  crop      centered --param x --param square, clamped to the image

Output is always JPEG at encoder defaults, regardless of input format.
Files that cannot be decoded are reported at the end; the rest of the
batch still converts. The exit status is non-zero if any file failed.")]
#[command(version)]
struct Cli {
    /// Source directory where to look for files to convert
    #[arg(long, default_value = ".")]
    source_dir: PathBuf,

    /// Target directory where to put the converted files
    #[arg(long, default_value = ".")]
    target_dir: PathBuf,

    /// Transformation to apply: resize or crop
    #[arg(long, default_value = "resize")]
    transformation: String,

    /// Resize divisor or crop edge length, depending on the transformation
    #[arg(long, default_value_t = 3)]
    param: u32,

    /// Write a JSON report of per-file outcomes to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::new(
        cli.source_dir,
        cli.target_dir,
        &cli.transformation,
        cli.param,
    )?;

    let backend = RustBackend::new();
    let (tx, rx) = std::sync::mpsc::channel();
    let printer = std::thread::spawn(move || {
        for event in rx {
            output::print_mirror_event(&event);
        }
    });

    let result = mirror::mirror(&config, &backend, Some(&tx));
    drop(tx);
    printer.join().unwrap();
    let report = result?;

    output::print_summary(&report);

    if let Some(report_path) = &cli.report {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(report_path, json)?;
    }

    if report.has_failures() {
        std::process::exit(1);
    }
    Ok(())
}
