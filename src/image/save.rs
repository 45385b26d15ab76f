//! Image saving utilities.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::RgbImage;

use crate::error::{Error, Result};

/// Save an RGB image as PNG with maximum compression.
///
/// The format is always PNG, whatever the extension of `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be created or the image cannot be encoded.
pub fn save_png<P: AsRef<Path>>(img: &RgbImage, path: P) -> Result<()> {
    let path = path.as_ref();

    let output = BufWriter::new(File::create(path)?);
    let encoder = PngEncoder::new_with_quality(output, CompressionType::Best, FilterType::Adaptive);

    img.write_with_encoder(encoder)
        .map_err(|source| Error::ImageSave {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!("Wrote {}", path.display());
    Ok(())
}
