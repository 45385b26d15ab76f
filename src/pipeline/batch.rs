//! Directory batch processing.

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbImage;
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{Error, Result};
use crate::fit::{contain_resize, cover_resize, pad_to_canvas};

use super::config::{Config, ScaleMode};

/// File extensions picked up from the input directory, compared case-insensitively.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// Result of processing a single input file.
#[derive(Debug)]
pub struct FileOutcome {
    /// Source image path.
    pub input: PathBuf,
    /// Written output path, or the error text if processing failed.
    pub result: std::result::Result<PathBuf, String>,
}

impl FileOutcome {
    /// Whether the file was written successfully.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Per-file outcomes of a batch run, in processing order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    /// Number of files written.
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    /// Number of files that failed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Whether no input files were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Closing line: `Done: S succeeded, F failed`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("Done: {} succeeded, {} failed", self.succeeded(), self.failed())
    }
}

/// Console line for one file: `OK  <input> -> <output>` or `FAIL <input>: <error>`.
#[must_use]
pub fn status_line(outcome: &FileOutcome) -> String {
    let name = display_name(&outcome.input);
    match &outcome.result {
        Ok(output) => format!("OK  {name} -> {}", display_name(output)),
        Err(err) => format!("FAIL {name}: {err}"),
    }
}

/// Whether `path` has one of the [`SUPPORTED_EXTENSIONS`].
#[must_use]
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Output file name: `{stem}{suffix}_{width}x{height}.png`.
#[must_use]
pub fn output_file_name(input: &Path, suffix: &str, width: u32, height: u32) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    format!("{stem}{suffix}_{width}x{height}.png")
}

/// List the supported image files directly inside `dir`, sorted by path.
///
/// # Errors
///
/// Returns [`Error::InputDir`] if the directory cannot be read.
pub fn discover_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let input_err = |source| Error::InputDir {
        path: dir.to_path_buf(),
        source,
    };
    let mut paths = Vec::new();

    for entry in fs::read_dir(dir).map_err(input_err)? {
        let path = entry.map_err(input_err)?.path();
        if path.is_file() && is_supported(&path) {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}

/// Fit a normalized image onto the configured canvas.
///
/// # Errors
///
/// Returns [`Error::UnsupportedDimensions`] if the intermediate resize would be
/// too large to allocate.
pub fn fit_image(img: &RgbImage, config: &Config) -> Result<RgbImage> {
    match config.mode {
        ScaleMode::Contain => {
            let resized = contain_resize(img, config.width, config.height)?;
            Ok(pad_to_canvas(
                &resized,
                config.width,
                config.height,
                config.background.to_rgb(),
            ))
        }
        ScaleMode::Cover => cover_resize(img, config.width, config.height),
    }
}

/// Open, fit, and write one file. Returns the output path.
///
/// # Errors
///
/// Returns an error if the image cannot be decoded or fitted, or the output
/// cannot be written.
pub fn process_file(input: &Path, config: &Config) -> Result<PathBuf> {
    let img = crate::image::load_image(input)?;
    let fitted = fit_image(&img, config)?;

    let output = config.output_dir.join(output_file_name(
        input,
        &config.suffix,
        config.width,
        config.height,
    ));
    crate::image::save_png(&fitted, &output)?;

    Ok(output)
}

/// Fit every supported image in the input directory onto the canvas.
///
/// Prints one `OK`/`FAIL` line per file and a summary. Failures are isolated:
/// a file that cannot be processed is reported and the batch moves on. When
/// no images are found nothing is written, not even the output directory.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the input directory
/// cannot be read, or the output directory cannot be created.
pub fn process_directory(config: &Config) -> Result<BatchReport> {
    config.validate()?;

    let inputs = discover_images(&config.input_dir)?;
    if inputs.is_empty() {
        println!("No images found in {}.", config.input_dir.display());
        return Ok(BatchReport::default());
    }

    fs::create_dir_all(&config.output_dir).map_err(|source| Error::OutputDir {
        path: config.output_dir.clone(),
        source,
    })?;

    let out_dir = fs::canonicalize(&config.output_dir).unwrap_or_else(|_| config.output_dir.clone());
    println!("Found {} image(s). Output -> {}", inputs.len(), out_dir.display());
    println!(
        "Target canvas: {}x{}, bg={}, mode={}",
        config.width, config.height, config.background, config.mode
    );
    tracing::info!("Processing {} image(s) with config: {config:?}", inputs.len());

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} Fitting [{bar:40.cyan/blue}] {pos}/{len}")
            .expect("valid template")
            .progress_chars("#>-"),
    );

    let mut report = BatchReport::default();
    for input in inputs {
        let result = process_file(&input, config).map_err(|err| {
            tracing::warn!("Skipping {}: {err}", input.display());
            err.to_string()
        });

        let outcome = FileOutcome { input, result };
        pb.suspend(|| println!("{}", status_line(&outcome)));
        report.outcomes.push(outcome);
        pb.inc(1);
    }
    pb.finish_and_clear();

    println!("{}", report.summary());
    tracing::info!("Batch complete");

    Ok(report)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}
