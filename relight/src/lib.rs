//! Point-light relighting of a single raster image.
//!
//! The image is decoded to 8-bit RGB, relit with
//! [`RelightConfig`](image_effect::relight_effect::RelightConfig) and encoded
//! again. Nothing is written unless every earlier step succeeded.

pub mod config;
mod error;

pub use config::{Preset, Settings};
pub use error::{Error, Result};

use image::{
    DynamicImage, ImageError, ImageFormat, ImageReader, RgbImage,
    error::{ImageFormatHint, UnsupportedError, UnsupportedErrorKind},
};
use std::{fs, io, path::Path};

/// Decode an image and normalize it to RGB, dropping alpha and palette data.
pub fn load_image(path: impl AsRef<Path>) -> Result<RgbImage> {
    let path = path.as_ref();
    let load_error = |source: ImageError| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    };

    let image = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| load_error(ImageError::IoError(e)))?
        .decode()
        .map_err(load_error)?;

    log::info!(
        "loaded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );

    Ok(image.to_rgb8())
}

/// Check that an image can be encoded to `path` and return the format to use.
///
/// Without an explicit `format` it is inferred from the extension. The
/// destination directory must already exist.
pub fn resolve_format(path: impl AsRef<Path>, format: Option<ImageFormat>) -> Result<ImageFormat> {
    let path = path.as_ref();
    let save_error = |source: ImageError| Error::ImageSave {
        path: path.to_path_buf(),
        source,
    };

    let format = match format {
        Some(format) => format,
        None => ImageFormat::from_path(path).map_err(save_error)?,
    };

    if !format.writing_enabled() {
        let hint = ImageFormatHint::Exact(format);
        return Err(save_error(ImageError::Unsupported(
            UnsupportedError::from_format_and_kind(hint.clone(), UnsupportedErrorKind::Format(hint)),
        )));
    }

    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.is_dir() => {
            Err(save_error(ImageError::IoError(io::Error::new(
                io::ErrorKind::NotFound,
                format!("directory {} does not exist", dir.display()),
            ))))
        }
        _ => Ok(format),
    }
}

/// Encode `image` to `path`. Without an explicit `format` it is inferred from the extension.
pub fn save_image(
    image: &DynamicImage,
    path: impl AsRef<Path>,
    format: Option<ImageFormat>,
) -> Result<()> {
    let path = path.as_ref();
    let format = resolve_format(path, format)?;
    write_image(image, path, format)
}

fn write_image(image: &DynamicImage, path: &Path, format: ImageFormat) -> Result<()> {
    image
        .save_with_format(path, format)
        .map_err(|source| Error::ImageSave {
            path: path.to_path_buf(),
            source,
        })?;

    log::info!("saved {} as {format:?}", path.display());
    Ok(())
}

/// Load `input`, relight it according to `settings` and save it to `output`.
///
/// Every destination is validated before the first file is written. If the
/// mask fails to encode anyway, the already written output is removed.
pub fn relight_image(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    settings: &Settings,
) -> Result<()> {
    let image = load_image(input)?;

    let output = output.as_ref();
    let output_format = resolve_format(output, settings.format)?;
    let mask_target = match &settings.mask {
        Some(path) => Some((path, resolve_format(path, None)?)),
        None => None,
    };

    let (relit, mask) = settings.relight_config().apply_with_mask(image)?;

    write_image(&DynamicImage::ImageRgb8(relit), output, output_format)?;

    if let Some((mask_path, mask_format)) = mask_target {
        if let Err(e) = write_image(&DynamicImage::ImageLuma8(mask), mask_path, mask_format) {
            if let Err(remove_err) = fs::remove_file(output) {
                log::warn!("remove {} failed: {remove_err}", output.display());
            }
            return Err(e);
        }
    }

    Ok(())
}
