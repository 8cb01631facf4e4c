use anyhow::{Context, Result};
use clap::Parser;
use image::ImageFormat;
use relight::{Preset, Settings, config::parse_format};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Relight an image with a point light source")]
struct Args {
    /// Path to the input image
    input: PathBuf,

    /// Path for the output image
    output: PathBuf,

    /// Light x position (0-1) [default: 0.5]
    #[arg(long, allow_negative_numbers = true)]
    x: Option<f64>,

    /// Light y position (0-1) [default: 0.5]
    #[arg(long, allow_negative_numbers = true)]
    y: Option<f64>,

    /// Brightness factor, >1 for brighter [default: 1.5]
    #[arg(long, allow_negative_numbers = true)]
    intensity: Option<f64>,

    /// Output format (png, jpg, bmp...), inferred from the output path when omitted
    #[arg(long, value_parser = parse_format)]
    format: Option<ImageFormat>,

    /// Also save the light mask as a grayscale image
    #[arg(long)]
    mask: Option<PathBuf>,

    /// TOML preset providing x, y, intensity and format
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Args {
    fn settings(&self) -> Result<Settings> {
        let settings = match &self.config {
            Some(path) => Settings::from_preset(&Preset::load(path)?)?,
            None => Settings::default(),
        };

        let mut settings = settings.override_light(self.x, self.y, self.intensity);
        if self.format.is_some() {
            settings.format = self.format;
        }
        settings.mask = self.mask.clone();

        Ok(settings)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let settings = args.settings()?;
    log::debug!("{settings:?}");

    relight::relight_image(&args.input, &args.output, &settings)
        .with_context(|| format!("relight {} failed", args.input.display()))?;

    Ok(())
}
