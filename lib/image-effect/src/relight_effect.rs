//! Synthetic point-light relighting.
//!
//! A brightened copy of the image is composited over the original through a
//! radial light mask. The mask intensity is `intensity - 1`, so an intensity
//! of 1.0 leaves the image untouched wherever the light is placed.

use crate::{
    Effect, ImageEffectResult,
    base_effect::BrightnessConfig,
    blend::composite,
    light_mask::{LightMaskConfig, LightPosition},
};
use derivative::Derivative;
use derive_setters::Setters;
use image::{GrayImage, RgbImage};

/// Relight effect configuration
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct RelightConfig {
    position: LightPosition,

    #[derivative(Default(value = "1.5"))]
    intensity: f64,
}

impl RelightConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> LightPosition {
        self.position
    }

    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    pub fn mask_config(&self) -> LightMaskConfig {
        LightMaskConfig::new()
            .with_position(self.position)
            .with_intensity(self.intensity - 1.0)
    }

    pub fn light_mask(&self, width: u32, height: u32) -> ImageEffectResult<GrayImage> {
        self.mask_config().generate(width, height)
    }

    /// Relight `image`, returning the result together with the mask used.
    pub fn apply_with_mask(&self, image: RgbImage) -> ImageEffectResult<(RgbImage, GrayImage)> {
        let (width, height) = image.dimensions();
        log::debug!(
            "relight {width}x{height}: light ({}, {}), intensity {}",
            self.position.x,
            self.position.y,
            self.intensity
        );

        let mask = self.light_mask(width, height)?;
        let bright = BrightnessConfig::new()
            .with_factor(self.intensity)
            .apply(image.clone())?;

        let out = composite(&bright, &image, &mask)?;
        Ok((out, mask))
    }
}

impl Effect for RelightConfig {
    fn apply(&self, image: RgbImage) -> ImageEffectResult<RgbImage> {
        self.apply_with_mask(image).map(|(out, _)| out)
    }
}
