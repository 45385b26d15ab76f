//! Batch pipeline: configuration and directory processing.

mod batch;
mod config;

pub use batch::{
    discover_images, fit_image, is_supported, output_file_name, process_directory, process_file,
    status_line, BatchReport, FileOutcome, SUPPORTED_EXTENSIONS,
};
pub use config::{Background, Config, ScaleMode, DEFAULT_HEIGHT, DEFAULT_WIDTH};
