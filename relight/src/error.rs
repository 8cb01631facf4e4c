use image_effect::ImageEffectError;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to load image {}: {source}", .path.display())]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("Failed to save image {}: {source}", .path.display())]
    ImageSave {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("Effect error: {0}")]
    Effect(#[from] ImageEffectError),
    #[error("Config error: {0}")]
    Config(String),
}
