//! # padshot
//!
//! Fit screenshots onto fixed-size canvases for app store submission.
//!
//! Each supported image in a directory is normalized to opaque RGB and either
//! scaled to fit inside the canvas and padded with a background color
//! ([`ScaleMode::Contain`]) or scaled to fill it and center-cropped
//! ([`ScaleMode::Cover`]). Results are written as PNG.
//!
//! ## Example
//!
//! ```no_run
//! use padshot::{Config, ScaleMode};
//!
//! # fn main() -> padshot::Result<()> {
//! let config = Config {
//!     mode: ScaleMode::Cover,
//!     ..Config::default()
//! };
//!
//! let report = padshot::process_directory(&config)?;
//! println!("{} written", report.succeeded());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod fit;
pub mod image;
pub mod pipeline;

pub use error::{Error, Result};
pub use pipeline::{process_directory, Background, BatchReport, Config, ScaleMode};
