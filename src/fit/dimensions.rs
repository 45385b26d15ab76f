//! Pure geometry for the fit strategies.

use crate::error::{Error, Result};

/// Largest RGB buffer a fit step may allocate, matching the decoder's default
/// allocation limit.
pub const MAX_CANVAS_BYTES: u64 = 512 * 1024 * 1024;

/// Scale factor that fits the source inside the target on both axes.
fn contain_scale(src_w: u32, src_h: u32, target_w: u32, target_h: u32) -> f64 {
    let scale_w = f64::from(target_w) / f64::from(src_w);
    let scale_h = f64::from(target_h) / f64::from(src_h);
    scale_w.min(scale_h)
}

/// Scale factor that makes the source cover the target on both axes.
fn cover_scale(src_w: u32, src_h: u32, target_w: u32, target_h: u32) -> f64 {
    let scale_w = f64::from(target_w) / f64::from(src_w);
    let scale_h = f64::from(target_h) / f64::from(src_h);
    scale_w.max(scale_h)
}

/// Apply a uniform scale, rounding half to even, with a 1px minimum per axis.
///
/// Fails instead of saturating when an axis does not fit in a `u32`, and when
/// the resulting RGB buffer would exceed [`MAX_CANVAS_BYTES`].
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn apply_scale(src_w: u32, src_h: u32, scale: f64) -> Result<(u32, u32)> {
    let new_w = (f64::from(src_w) * scale).round_ties_even().max(1.0);
    let new_h = (f64::from(src_h) * scale).round_ties_even().max(1.0);

    let limit = f64::from(u32::MAX);
    if !(new_w <= limit && new_h <= limit) {
        // Safe: saturating casts, only used for the error message
        return Err(Error::UnsupportedDimensions {
            width: new_w as u64,
            height: new_h as u64,
            reason: "scaled size does not fit in 32 bits".to_string(),
        });
    }

    // Safe: both values are in [1, u32::MAX]
    let (new_w, new_h) = (new_w as u32, new_h as u32);
    check_buffer_size(new_w, new_h)?;
    Ok((new_w, new_h))
}

/// Reject RGB buffers larger than [`MAX_CANVAS_BYTES`].
///
/// # Errors
///
/// Returns [`Error::UnsupportedDimensions`] if `width * height * 3` is over the limit.
pub fn check_buffer_size(width: u32, height: u32) -> Result<()> {
    let bytes = u64::from(width) * u64::from(height) * 3;
    if bytes > MAX_CANVAS_BYTES {
        return Err(Error::UnsupportedDimensions {
            width: u64::from(width),
            height: u64::from(height),
            reason: format!("needs {bytes} bytes, limit is {MAX_CANVAS_BYTES}"),
        });
    }
    Ok(())
}

/// Dimensions of the source after a contain-mode resize.
///
/// The result never exceeds the target and matches it on at least one axis,
/// up to rounding.
///
/// # Errors
///
/// Returns [`Error::UnsupportedDimensions`] if the resized buffer is too large.
pub fn contain_dimensions(
    src_w: u32,
    src_h: u32,
    target_w: u32,
    target_h: u32,
) -> Result<(u32, u32)> {
    let scale = contain_scale(src_w, src_h, target_w, target_h);
    apply_scale(src_w, src_h, scale)
}

/// Dimensions of the source after a cover-mode resize, before cropping.
///
/// The result is at least as large as the target on both axes.
///
/// # Errors
///
/// Returns [`Error::UnsupportedDimensions`] if an extreme aspect ratio makes
/// the uncropped resize too large.
pub fn cover_dimensions(
    src_w: u32,
    src_h: u32,
    target_w: u32,
    target_h: u32,
) -> Result<(u32, u32)> {
    let scale = cover_scale(src_w, src_h, target_w, target_h);
    let (w, h) = apply_scale(src_w, src_h, scale)?;
    // Keep the crop in bounds if float error lands a hair under the target
    Ok((w.max(target_w), h.max(target_h)))
}

/// Offset that centers `inner` within `outer`, biased toward the top-left.
#[must_use]
pub const fn center_offset(outer: u32, inner: u32) -> u32 {
    outer.saturating_sub(inner) / 2
}
