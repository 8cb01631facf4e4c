//! Relight settings and the optional TOML preset file.
//!
//! Precedence is command line flag, then preset, then built-in default.

use crate::{Error, Result};
use derivative::Derivative;
use image::ImageFormat;
use image_effect::{light_mask::LightPosition, relight_effect::RelightConfig};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const DEFAULT_X: f64 = 0.5;
pub const DEFAULT_Y: f64 = 0.5;
pub const DEFAULT_INTENSITY: f64 = 1.5;

/// Light parameters read from a preset file. Missing keys keep their defaults.
///
/// ```toml
/// x = 0.2
/// y = 0.1
/// intensity = 1.8
/// format = "png"
/// ```
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Preset {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub intensity: Option<f64>,
    pub format: Option<String>,
}

impl Preset {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("read {} failed: {e}", path.display())))?;

        log::debug!("loaded preset {}", path.display());
        Self::parse(&text).map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }

    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }
}

#[derive(Debug, Clone, Derivative)]
#[derivative(Default)]
pub struct Settings {
    #[derivative(Default(value = "DEFAULT_X"))]
    pub x: f64,

    #[derivative(Default(value = "DEFAULT_Y"))]
    pub y: f64,

    #[derivative(Default(value = "DEFAULT_INTENSITY"))]
    pub intensity: f64,

    /// Output format, inferred from the output extension when `None`
    pub format: Option<ImageFormat>,

    /// Where to write the light mask, if anywhere
    pub mask: Option<PathBuf>,
}

impl Settings {
    pub fn from_preset(preset: &Preset) -> Result<Self> {
        let mut settings = Self::default().override_light(preset.x, preset.y, preset.intensity);

        if let Some(name) = &preset.format {
            settings.format = Some(parse_format(name).map_err(Error::Config)?);
        }

        Ok(settings)
    }

    pub fn override_light(mut self, x: Option<f64>, y: Option<f64>, intensity: Option<f64>) -> Self {
        if let Some(x) = x {
            self.x = x;
        }

        if let Some(y) = y {
            self.y = y;
        }

        if let Some(intensity) = intensity {
            self.intensity = intensity;
        }

        self
    }

    pub fn relight_config(&self) -> RelightConfig {
        RelightConfig::new()
            .with_position(LightPosition::new(self.x, self.y))
            .with_intensity(self.intensity)
    }
}

/// Parse a format name such as `png`, `jpg` or `.bmp`.
pub fn parse_format(name: &str) -> std::result::Result<ImageFormat, String> {
    ImageFormat::from_extension(name.trim().trim_start_matches('.'))
        .ok_or_else(|| format!("unknown image format: {name}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.x, 0.5);
        assert_eq!(settings.y, 0.5);
        assert_eq!(settings.intensity, 1.5);
        assert!(settings.format.is_none());
        assert!(settings.mask.is_none());

        let config = settings.relight_config();
        assert_eq!(config.position(), LightPosition::new(0.5, 0.5));
        assert_eq!(config.intensity(), 1.5);
    }

    #[test]
    fn test_parse_preset() {
        let preset = Preset::parse("x = 0.2\nintensity = 3.0\nformat = \"jpg\"\n").unwrap();
        assert_eq!(preset.x, Some(0.2));
        assert_eq!(preset.y, None);
        assert_eq!(preset.intensity, Some(3.0));

        let settings = Settings::from_preset(&preset).unwrap();
        assert_eq!(settings.x, 0.2);
        assert_eq!(settings.y, DEFAULT_Y);
        assert_eq!(settings.intensity, 3.0);
        assert_eq!(settings.format, Some(ImageFormat::Jpeg));
    }

    #[test]
    fn test_empty_preset() {
        assert_eq!(Preset::parse("").unwrap(), Preset::default());
    }

    #[test]
    fn test_invalid_preset() {
        assert!(matches!(Preset::parse("radius = 3"), Err(Error::Config(_))));
        assert!(matches!(Preset::parse("x = \"left\""), Err(Error::Config(_))));

        let preset = Preset::parse("format = \"doc\"").unwrap();
        assert!(matches!(Settings::from_preset(&preset), Err(Error::Config(_))));
    }

    #[test]
    fn test_load_preset() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "y = 0.9")?;
        writeln!(file, "intensity = -1.0")?;

        let preset = Preset::load(file.path())?;
        assert_eq!(preset.y, Some(0.9));
        assert_eq!(preset.intensity, Some(-1.0));

        assert!(Preset::load(file.path().with_extension("missing")).is_err());
        Ok(())
    }

    #[test]
    fn test_override_light() {
        let preset = Preset::parse("x = 0.1\ny = 0.2\nintensity = 2.0").unwrap();
        let settings = Settings::from_preset(&preset)
            .unwrap()
            .override_light(Some(0.7), None, Some(1.0));

        assert_eq!(settings.x, 0.7);
        assert_eq!(settings.y, 0.2);
        assert_eq!(settings.intensity, 1.0);
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("png"), Ok(ImageFormat::Png));
        assert_eq!(parse_format(".JPEG"), Ok(ImageFormat::Jpeg));
        assert_eq!(parse_format("bmp"), Ok(ImageFormat::Bmp));
        assert!(parse_format("docx").is_err());
    }
}
