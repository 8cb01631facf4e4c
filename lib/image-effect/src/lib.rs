pub mod base_effect;
pub mod blend;
pub mod light_mask;
pub mod relight_effect;

use image::RgbImage;

pub type ImageEffectResult<T> = Result<T, ImageEffectError>;

#[derive(thiserror::Error, Debug)]
pub enum ImageEffectError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("Dimension mismatch: expected {expected:?}, found {found:?}")]
    DimensionMismatch {
        expected: (u32, u32),
        found: (u32, u32),
    },
}

/// A pixel transform producing a new image from an RGB input.
pub trait Effect {
    fn apply(&self, image: RgbImage) -> ImageEffectResult<RgbImage>;
}

#[derive(Debug, Clone)]
pub enum ImageEffect {
    Brightness(base_effect::BrightnessConfig),
    Relight(relight_effect::RelightConfig),
}

impl Effect for ImageEffect {
    fn apply(&self, image: RgbImage) -> ImageEffectResult<RgbImage> {
        match self {
            ImageEffect::Brightness(config) => config.apply(image),
            ImageEffect::Relight(config) => config.apply(image),
        }
    }
}
