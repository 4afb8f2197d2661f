use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use image::RgbImage;
use tinct::{blend, models::rgb, Component, Rgb, ToRgb};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Render gradients between two colors, blended in gamma encoded sRGB and in
/// linear light sRGB, one strip above the other.
#[derive(Parser)]
#[command(name = "tinct-gradient")]
struct Args {
    /// Where to write the PNG.
    #[arg(short, long, default_value = "gradient.png")]
    output: PathBuf,

    /// The color on the left, as R,G,B.
    #[arg(long, num_args = 3, value_delimiter = ',', default_values_t = [255, 0, 0])]
    from: Vec<i32>,

    /// The color on the right, as R,G,B.
    #[arg(long, num_args = 3, value_delimiter = ',', default_values_t = [0, 0, 255])]
    to: Vec<i32>,

    /// Width of the image in pixels.
    #[arg(long, default_value_t = 1000)]
    width: u32,

    /// Height of each strip in pixels.
    #[arg(long, default_value_t = 100)]
    strip_height: u32,
}

fn parse_color(components: &[i32]) -> anyhow::Result<Rgb> {
    match *components {
        [red, green, blue] => Ok(rgb(red, green, blue)),
        _ => anyhow::bail!("expected 3 components, found {}", components.len()),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tinct=info,tinct_gradient=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let args = Args::parse();
    anyhow::ensure!(args.width > 1, "width must be at least 2 pixels");
    anyhow::ensure!(args.strip_height > 0, "strip height must be at least 1 pixel");

    let left = parse_color(&args.from).context("invalid --from color")?;
    let right = parse_color(&args.to).context("invalid --to color")?;
    let (left_linear, right_linear) = (left.to_linear_light(), right.to_linear_light());

    tracing::info!(?left, ?right, width = args.width, "rendering gradient");

    let mut img = RgbImage::new(args.width, args.strip_height * 2);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let mix = x as Component / (args.width - 1) as Component;

        let c = if y < args.strip_height {
            blend(&left, &right, mix)
        } else {
            blend(&left_linear, &right_linear, mix).to_rgb()
        };

        *pixel = image::Rgb(c.into());
    }

    img.save(&args.output)
        .with_context(|| format!("could not write {}", args.output.display()))?;

    tracing::info!(path = %args.output.display(), "wrote gradient");

    Ok(())
}
