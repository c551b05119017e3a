//! Computes both persistence orientations of an image and writes each as a
//! 32-bit float PNG.

use anyhow::{Context, Result};
use clap::Parser;
use levelset_cli::encode_f32_png;
use levelset_core::persistence;
use std::path::PathBuf;

/// Computes the max- and min-persistence maps for a grayscale image.
#[derive(Parser, Debug)]
#[command(name = "levelset-persist")]
#[command(about = "Writes an image's max- and min-persistence maps as float PNGs")]
struct Args {
  /// Input grayscale PNG.
  input: PathBuf,

  /// Output path for the max-persistence map.
  positive: PathBuf,

  /// Output path for the min-persistence map.
  negative: PathBuf,
}

fn main() -> Result<()> {
  let args = Args::parse();

  let img = image::open(&args.input).with_context(|| format!("failed to open {}", args.input.display()))?.to_luma8();
  let (width, height) = (img.width() as usize, img.height() as usize);
  let direct: Vec<f32> = img.as_raw().iter().map(|&v| v as f32).collect();
  let inverted: Vec<f32> = direct.iter().map(|&v| 255.0 - v).collect();

  // `persistence` always computes the min-persistence orientation (leaves are
  // minima, the root is the global max). Maxima of the direct image are
  // minima of the inverted one, so the maxima map comes from the inverted
  // call and the minima map from the direct call.
  let pm_max = persistence(&inverted, width, height).context("persistence (inverted) failed")?;
  let pm_min = persistence(&direct, width, height).context("persistence (direct) failed")?;

  encode_f32_png(&pm_max, width, height).save(&args.positive).with_context(|| format!("failed to write {}", args.positive.display()))?;
  encode_f32_png(&pm_min, width, height).save(&args.negative).with_context(|| format!("failed to write {}", args.negative.display()))?;

  println!("{}: persistence maps -> {}, {}", args.input.display(), args.positive.display(), args.negative.display());
  Ok(())
}
