//! Image loading utilities.

use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader, Rgb, RgbImage, Rgba, RgbaImage};

use crate::error::{Error, Result};

/// Load an image from disk and normalize it to opaque RGB.
///
/// The format is sniffed from the file contents first, falling back to the
/// extension, so a PNG saved as `.jpg` still opens.
///
/// # Errors
///
/// Returns [`Error::ImageLoad`] if the file cannot be read or decoded.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
    let path = path.as_ref();
    let load_err = |source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    };

    let img = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| load_err(ImageError::IoError(e)))?
        .decode()
        .map_err(load_err)?;

    tracing::debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    Ok(normalize(&img))
}

/// Convert any decoded image to three-channel RGB.
///
/// Images carrying transparency (RGBA, luminance+alpha, or a palette with a
/// transparent entry, which the decoders expand to an alpha channel) are
/// composited over opaque white. Everything else converts directly.
#[must_use]
pub fn normalize(img: &DynamicImage) -> RgbImage {
    if img.color().has_alpha() {
        flatten_onto_white(&img.to_rgba8())
    } else {
        img.to_rgb8()
    }
}

fn flatten_onto_white(rgba: &RgbaImage) -> RgbImage {
    let mut out = RgbImage::new(rgba.width(), rgba.height());

    for (dst, src) in out.pixels_mut().zip(rgba.pixels()) {
        let Rgba([r, g, b, a]) = *src;
        *dst = Rgb([over_white(r, a), over_white(g, a), over_white(b, a)]);
    }

    out
}

/// Blend one channel over white: `c * a + 255 * (1 - a)`, rounded.
#[inline]
#[allow(clippy::cast_possible_truncation)]
fn over_white(channel: u8, alpha: u8) -> u8 {
    let (c, a) = (u32::from(channel), u32::from(alpha));
    // Safe: the weighted sum never exceeds 255 * 255
    ((c * a + 255 * (255 - a) + 127) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayAlphaImage, LumaA};

    #[test]
    fn test_over_white() {
        assert_eq!(over_white(0, 255), 0);
        assert_eq!(over_white(200, 255), 200);
        assert_eq!(over_white(0, 0), 255);
        assert_eq!(over_white(0, 128), 127);
    }

    #[test]
    fn test_normalize_opaque_rgb_unchanged() {
        let src = RgbImage::from_fn(4, 3, |x, y| Rgb([x as u8 * 10, y as u8 * 20, 7]));
        let out = normalize(&DynamicImage::ImageRgb8(src.clone()));

        assert_eq!(out, src);
    }

    #[test]
    fn test_normalize_transparent_becomes_white() {
        let src = RgbaImage::from_pixel(5, 2, Rgba([0, 0, 0, 0]));
        let out = normalize(&DynamicImage::ImageRgba8(src));

        assert_eq!(out.dimensions(), (5, 2));
        assert!(out.pixels().all(|p| *p == Rgb([255, 255, 255])));
    }

    #[test]
    fn test_normalize_opaque_rgba_keeps_color() {
        let src = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 255]));
        let out = normalize(&DynamicImage::ImageRgba8(src));

        assert!(out.pixels().all(|p| *p == Rgb([10, 20, 30])));
    }

    #[test]
    fn test_normalize_luma_alpha() {
        let src = GrayAlphaImage::from_pixel(3, 3, LumaA([0, 128]));
        let out = normalize(&DynamicImage::ImageLumaA8(src));

        assert_eq!(out.dimensions(), (3, 3));
        assert!(out.pixels().all(|p| *p == Rgb([127, 127, 127])));
    }

    #[test]
    fn test_load_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        match load_image(&path) {
            Err(Error::ImageLoad { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected ImageLoad error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_sniffs_misnamed_file() {
        let dir = tempfile::tempdir().unwrap();
        let png_path = dir.path().join("shot.png");
        RgbImage::from_pixel(6, 4, Rgb([1, 2, 3])).save(&png_path).unwrap();
        let jpg_path = dir.path().join("shot.jpg");
        std::fs::rename(&png_path, &jpg_path).unwrap();

        let img = load_image(&jpg_path).unwrap();
        assert_eq!(img.dimensions(), (6, 4));
        assert_eq!(*img.get_pixel(0, 0), Rgb([1, 2, 3]));
    }

    #[test]
    fn test_load_palette_with_transparency() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("indexed.png");

        let file = std::io::BufWriter::new(std::fs::File::create(&path).unwrap());
        let mut encoder = png::Encoder::new(file, 3, 1);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_palette(vec![255, 0, 0, 0, 0, 255, 0, 255, 0]);
        // Index 0 fully transparent, index 1 half transparent, index 2 opaque
        encoder.set_trns(vec![0, 128]);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&[0, 1, 2]).unwrap();
        writer.finish().unwrap();

        let img = load_image(&path).unwrap();

        assert_eq!(img.dimensions(), (3, 1));
        assert_eq!(*img.get_pixel(0, 0), Rgb([255, 255, 255]));
        assert_eq!(*img.get_pixel(1, 0), Rgb([127, 127, 255]));
        assert_eq!(*img.get_pixel(2, 0), Rgb([0, 255, 0]));
    }
}
