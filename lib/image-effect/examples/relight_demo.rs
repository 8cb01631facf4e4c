/// Relight effect example
/// Moves the light around a generated gradient and saves each result with its mask

use image::{Rgb, RgbImage};
use image_effect::light_mask::LightPosition;
use image_effect::relight_effect::RelightConfig;
use image_effect::{Effect, ImageEffect};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let img = RgbImage::from_fn(800, 600, |x, y| {
        let r = (x * 255 / 800) as u8;
        let g = (y * 255 / 600) as u8;
        let b = ((x + y) * 255 / 1400) as u8;
        Rgb([r / 2, g / 2, b / 2])
    });

    let positions = [(0.5, 0.5), (0.0, 0.0), (1.0, 0.25), (0.2, 0.9)];

    for (x, y) in positions {
        let config = RelightConfig::new()
            .with_position(LightPosition::new(x, y))
            .with_intensity(1.8);

        let (out, mask) = config.apply_with_mask(img.clone())?;
        out.save(output_dir.join(format!("relight_{x:.2}_{y:.2}.png")))?;
        mask.save(output_dir.join(format!("relight_mask_{x:.2}_{y:.2}.png")))?;
        println!("✓ Generated relight_{x:.2}_{y:.2}.png");
    }

    let intensities = [0.5, 1.0, 1.5, 2.5];

    for intensity in intensities {
        let effect = ImageEffect::Relight(RelightConfig::new().with_intensity(intensity));
        let out = effect.apply(img.clone())?;
        out.save(output_dir.join(format!("relight_intensity_{intensity:.1}.png")))?;
        println!("✓ Generated relight_intensity_{intensity:.1}.png");
    }

    println!("\n✓ All relight effects applied successfully!");
    println!("  Images saved to: tmp/");

    Ok(())
}
