//! `padshot` CLI - Fit screenshots onto app store canvas sizes.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use padshot::pipeline::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use padshot::{Background, Config, ScaleMode};

/// Pad or crop screenshots to App Store Connect canvas sizes.
///
/// Reads png/jpg/jpeg/webp images from the input folder, fits each onto the
/// target canvas while preserving aspect ratio, and saves PNGs to the output
/// folder.
#[derive(Parser, Debug)]
#[command(name = "padshot")]
#[command(version, about, long_about)]
struct Args {
    /// Target canvas width.
    #[arg(long = "w", default_value_t = DEFAULT_WIDTH, value_name = "INT")]
    width: u32,

    /// Target canvas height.
    #[arg(long = "h", default_value_t = DEFAULT_HEIGHT, value_name = "INT")]
    height: u32,

    /// Background color for padding, e.g. 255,255,255.
    #[arg(long, default_value = "255,255,255", value_name = "R,G,B")]
    bg: Background,

    /// contain: no crop (pads). cover: fill canvas (may crop).
    #[arg(long, value_enum, default_value_t = ScaleMode::Contain)]
    scale_mode: ScaleMode,

    /// Optional filename suffix, placed before the dimensions.
    #[arg(long, default_value = "")]
    suffix: String,

    /// Folder to read images from.
    #[arg(long, default_value = ".", value_name = "DIR")]
    input: PathBuf,

    /// Folder to write fitted images to.
    #[arg(long, default_value = "out", value_name = "DIR")]
    output: PathBuf,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("padshot={log_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(err) = run(args) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: Args) -> Result<()> {
    let config = Config {
        width: args.width,
        height: args.height,
        background: args.bg,
        mode: args.scale_mode,
        suffix: args.suffix,
        input_dir: args.input,
        output_dir: args.output,
    };

    let report = padshot::process_directory(&config).context("Failed to process images")?;

    if report.failed() > 0 {
        tracing::warn!("{} image(s) could not be processed", report.failed());
    }

    Ok(())
}
