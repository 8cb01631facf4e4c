//! Radial light mask with linear falloff.
//!
//! The mask is a grayscale image where 0 keeps the original pixel and 255
//! selects the lit pixel. Weight falls off linearly from the light position
//! and reaches zero at the length of the image diagonal.

use crate::{ImageEffectError, ImageEffectResult};
use derivative::Derivative;
use derive_setters::Setters;
use image::{GrayImage, Luma};

/// Light position as a fraction of the image width and height.
///
/// Values outside [0, 1] are accepted and place the light off-canvas.
#[derive(Debug, Clone, Copy, PartialEq, Derivative)]
#[derivative(Default)]
pub struct LightPosition {
    #[derivative(Default(value = "0.5"))]
    pub x: f64,

    #[derivative(Default(value = "0.5"))]
    pub y: f64,
}

impl LightPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Light coordinate in pixels for an image of the given size.
    pub fn absolute(&self, width: u32, height: u32) -> (f64, f64) {
        (self.x * width as f64, self.y * height as f64)
    }
}

/// Light mask configuration
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct LightMaskConfig {
    position: LightPosition,

    #[derivative(Default(value = "1.0"))]
    intensity: f64, // <= 0 yields an empty mask
}

impl LightMaskConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> LightPosition {
        self.position
    }

    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    /// Build the mask for an image of `width` x `height` pixels.
    pub fn generate(&self, width: u32, height: u32) -> ImageEffectResult<GrayImage> {
        if width == 0 || height == 0 {
            return Err(ImageEffectError::InvalidParameter(format!(
                "mask dimensions must be non-zero, got {width}x{height}"
            )));
        }

        let falloff = self.falloff(width, height);
        log::debug!(
            "light mask {width}x{height}: light at ({:.2}, {:.2}), max distance {:.2}, intensity {}",
            falloff.light_x,
            falloff.light_y,
            falloff.max_distance,
            self.intensity
        );

        Ok(GrayImage::from_fn(width, height, |x, y| {
            Luma([falloff.value(x, y, self.intensity)])
        }))
    }

    /// Mask weight of a single pixel without building the whole mask.
    pub fn value_at(&self, x: u32, y: u32, width: u32, height: u32) -> u8 {
        self.falloff(width, height).value(x, y, self.intensity)
    }

    fn falloff(&self, width: u32, height: u32) -> Falloff {
        let (light_x, light_y) = self.position.absolute(width, height);
        let (w, h) = (width as f64, height as f64);

        Falloff {
            light_x,
            light_y,
            max_distance: (w * w + h * h).sqrt(),
        }
    }
}

struct Falloff {
    light_x: f64,
    light_y: f64,
    max_distance: f64,
}

impl Falloff {
    #[inline]
    fn value(&self, x: u32, y: u32, intensity: f64) -> u8 {
        let dx = x as f64 - self.light_x;
        let dy = y as f64 - self.light_y;
        let distance = (dx * dx + dy * dy).sqrt();

        let factor = (1.0 - distance / self.max_distance).max(0.0);
        (255.0 * (factor * intensity).min(1.0)).clamp(0.0, 255.0) as u8
    }
}
