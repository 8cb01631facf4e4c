use crate::{Effect, ImageEffectResult};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbImage;

/// Scale every channel by `factor`, truncating and clamping into [0, 255].
pub fn scale_brightness(mut image: RgbImage, factor: f64) -> RgbImage {
    for pixel in image.pixels_mut() {
        for channel in pixel.0.iter_mut() {
            *channel = scale_channel(*channel, factor);
        }
    }

    image
}

#[inline]
fn scale_channel(value: u8, factor: f64) -> u8 {
    // `as u8` saturates, NaN becomes 0
    (value as f64 * factor).clamp(0.0, 255.0) as u8
}

/// Uniform brightness multiply configuration
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct BrightnessConfig {
    #[derivative(Default(value = "1.0"))]
    factor: f64, // >1 brighter, (0, 1) darker
}

impl BrightnessConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }
}

impl Effect for BrightnessConfig {
    fn apply(&self, image: RgbImage) -> ImageEffectResult<RgbImage> {
        Ok(scale_brightness(image, self.factor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_brightness_config() {
        let config = BrightnessConfig::new();
        assert_eq!(config.factor(), 1.0);

        let config = config.with_factor(1.5);
        assert_eq!(config.factor(), 1.5);
    }

    #[test]
    fn test_identity_factor() {
        let img = RgbImage::from_fn(4, 3, |x, y| Rgb([(x * 60) as u8, (y * 80) as u8, 7]));
        let out = BrightnessConfig::new().apply(img.clone()).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_brightness_increase() {
        let img = RgbImage::from_pixel(2, 1, Rgb([100, 128, 201]));
        let out = scale_brightness(img, 1.5);

        // 201 * 1.5 = 301.5 clamps to 255
        assert_eq!(out.get_pixel(0, 0), &Rgb([150, 192, 255]));
        assert_eq!(out.get_pixel(1, 0), &Rgb([150, 192, 255]));
    }

    #[test]
    fn test_brightness_truncates() {
        let img = RgbImage::from_pixel(1, 1, Rgb([3, 5, 255]));
        let out = scale_brightness(img, 0.5);
        assert_eq!(out.get_pixel(0, 0), &Rgb([1, 2, 127]));
    }

    #[test]
    fn test_clamping() {
        let img = RgbImage::from_pixel(1, 1, Rgb([10, 128, 255]));

        let out = scale_brightness(img.clone(), -2.0);
        assert_eq!(out.get_pixel(0, 0), &Rgb([0, 0, 0]));

        let out = scale_brightness(img.clone(), 1000.0);
        assert_eq!(out.get_pixel(0, 0), &Rgb([255, 255, 255]));

        let out = scale_brightness(img, 0.0);
        assert_eq!(out.get_pixel(0, 0), &Rgb([0, 0, 0]));
    }
}
