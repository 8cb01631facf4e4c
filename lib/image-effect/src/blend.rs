use crate::{ImageEffectError, ImageEffectResult};
use image::{GrayImage, RgbImage};

/// Composite `foreground` over `background`, weighting each pixel by `mask`.
///
/// A mask value of 0 keeps the background pixel, 255 takes the foreground
/// pixel, and anything in between interpolates linearly with 8-bit rounding.
pub fn composite(
    foreground: &RgbImage,
    background: &RgbImage,
    mask: &GrayImage,
) -> ImageEffectResult<RgbImage> {
    let expected = background.dimensions();
    for found in [foreground.dimensions(), mask.dimensions()] {
        if found != expected {
            return Err(ImageEffectError::DimensionMismatch { expected, found });
        }
    }

    let mut out = background.clone();
    for ((dst, src), weight) in out.pixels_mut().zip(foreground.pixels()).zip(mask.pixels()) {
        for (d, s) in dst.0.iter_mut().zip(src.0) {
            *d = blend_channel(s, *d, weight[0]);
        }
    }

    Ok(out)
}

/// `(fg * alpha + bg * (255 - alpha)) / 255`, rounded.
#[inline]
pub fn blend_channel(fg: u8, bg: u8, alpha: u8) -> u8 {
    let alpha = alpha as u32;
    let t = fg as u32 * alpha + bg as u32 * (255 - alpha) + 128;
    (((t >> 8) + t) >> 8) as u8
}
