//! Rasterizes an image's level-line tree into a colored PNG.
//!
//! Black: regular lines. Blue: minima. Green: saddles. Red: maxima.

use anyhow::{Context, Result};
use clap::Parser;
use levelset_cli::{rasterize, seed_border_with_median};
use levelset_core::{build_tree, extract_level_lines};
use std::path::PathBuf;

/// Draws the level-line tree of a grayscale image as a colored PNG.
#[derive(Parser, Debug)]
#[command(name = "levelset-draw")]
#[command(about = "Rasterizes an image's level-line tree into a colored PNG")]
struct Args {
  /// Supersampling factor for the output raster.
  #[arg(short, long, default_value_t = 1)]
  zoom: u32,

  /// Input grayscale PNG.
  input: PathBuf,

  /// Output colored PNG.
  output: PathBuf,
}

fn main() -> Result<()> {
  let args = Args::parse();

  if args.zoom == 0 {
    anyhow::bail!("zoom must be at least 1");
  }

  let img = image::open(&args.input).with_context(|| format!("failed to open {}", args.input.display()))?.to_luma8();
  let (width, height) = (img.width() as usize, img.height() as usize);
  let mut data = img.into_raw();
  seed_border_with_median(&mut data, width, height);

  let (lines, row_log) = extract_level_lines(&data, width, height, 0).context("level-line extraction failed")?;
  let _tree = build_tree(&lines, &row_log);

  let canvas = rasterize(&lines, width, height, args.zoom);
  canvas.save(&args.output).with_context(|| format!("failed to write {}", args.output.display()))?;

  println!("{}: {} level lines -> {}", args.input.display(), lines.len(), args.output.display());
  Ok(())
}
