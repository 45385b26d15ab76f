//! Raster operations for the fit strategies.

use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};

use crate::error::Result;

use super::dimensions::{center_offset, contain_dimensions, cover_dimensions};

/// Resize to fit within the target canvas, without cropping.
///
/// Uses Lanczos3 resampling. An image that already has the fitted
/// dimensions is returned pixel-for-pixel.
///
/// # Errors
///
/// Returns an error if the resized buffer would be too large.
pub fn contain_resize(img: &RgbImage, target_w: u32, target_h: u32) -> Result<RgbImage> {
    let (width, height) = contain_dimensions(img.width(), img.height(), target_w, target_h)?;
    Ok(resample(img, width, height))
}

/// Resize to cover the target canvas, then crop the overflow around the center.
///
/// The result is always exactly `target_w` x `target_h`.
///
/// # Errors
///
/// Returns an error if the uncropped resize would be too large, which happens
/// for extreme aspect ratios.
pub fn cover_resize(img: &RgbImage, target_w: u32, target_h: u32) -> Result<RgbImage> {
    let (width, height) = cover_dimensions(img.width(), img.height(), target_w, target_h)?;
    let resized = resample(img, width, height);

    let left = center_offset(resized.width(), target_w);
    let top = center_offset(resized.height(), target_h);
    tracing::debug!("Cropping {width}x{height} at ({left}, {top}) to {target_w}x{target_h}");

    Ok(imageops::crop_imm(&resized, left, top, target_w, target_h).to_image())
}

/// Place `img` centered on a canvas filled with `background`.
///
/// Pixels of `img` are copied verbatim; only the surrounding border takes the
/// background color.
#[must_use]
pub fn pad_to_canvas(img: &RgbImage, target_w: u32, target_h: u32, background: Rgb<u8>) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(target_w, target_h, background);

    let x = center_offset(target_w, img.width());
    let y = center_offset(target_h, img.height());
    imageops::replace(&mut canvas, img, i64::from(x), i64::from(y));

    canvas
}

fn resample(img: &RgbImage, width: u32, height: u32) -> RgbImage {
    if img.dimensions() == (width, height) {
        return img.clone();
    }

    tracing::debug!(
        "Resizing {}x{} to {width}x{height}",
        img.width(),
        img.height()
    );
    imageops::resize(img, width, height, FilterType::Lanczos3)
}
