//! Shared helpers for the `levelset-draw` and `levelset-persist` binaries:
//! border median seeding (the core's invocation contract) and level-line
//! rasterization.

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use levelset_core::{LevelLine, LineType, Point};

/// Replaces the one-pixel border of a row-major grayscale image with its own
/// median value, in place.
///
/// `extract_level_lines` relies on the border never containing a regional
/// extremum; pre-seeding it with its median (rather than, say, zero) avoids
/// introducing an artificial extremum of its own when the source image's
/// true border values already vary.
pub fn seed_border_with_median(image: &mut [u8], width: usize, height: usize) {
  let mut border = Vec::with_capacity(2 * (width + height));
  for x in 0..width {
    border.push(image[x]);
    border.push(image[(height - 1) * width + x]);
  }
  for y in 1..height - 1 {
    border.push(image[y * width]);
    border.push(image[y * width + width - 1]);
  }
  border.sort_unstable();
  let median = border[border.len() / 2];

  for x in 0..width {
    image[x] = median;
    image[(height - 1) * width + x] = median;
  }
  for y in 0..height {
    image[y * width] = median;
    image[y * width + width - 1] = median;
  }
}

/// Color a level line's kind is drawn in, per SPEC_FULL.md §4.7.
fn color_for(kind: LineType) -> Rgb<u8> {
  match kind {
    LineType::Regular => Rgb([0, 0, 0]),
    LineType::Min => Rgb([0, 0, 255]),
    LineType::Saddle => Rgb([0, 255, 0]),
    LineType::Max => Rgb([255, 0, 0]),
  }
}

/// Rasterizes a set of level lines onto a `width*zoom × height*zoom` canvas,
/// colored by line type. The nesting tree is not needed here: the raster
/// draws every line independently of its parent.
pub fn rasterize(lines: &[LevelLine], width: usize, height: usize, zoom: u32) -> RgbImage {
  let mut canvas = RgbImage::from_pixel(width as u32 * zoom, height as u32 * zoom, Rgb([255, 255, 255]));

  for line in lines {
    let color = color_for(line.kind);
    let n = line.polyline.len();
    for i in 0..n {
      let a = line.polyline[i];
      let b = line.polyline[(i + 1) % n];
      stamp_line(&mut canvas, a, b, zoom, color);
    }
  }

  canvas
}

/// Stamps a line segment between two points (in pixel-center coordinates,
/// scaled by `zoom`) using Bresenham's algorithm.
fn stamp_line(canvas: &mut RgbImage, a: Point, b: Point, zoom: u32, color: Rgb<u8>) {
  let (w, h) = (canvas.width() as i64, canvas.height() as i64);
  let mut x0 = (a.x * zoom as f64).round() as i64;
  let mut y0 = (a.y * zoom as f64).round() as i64;
  let x1 = (b.x * zoom as f64).round() as i64;
  let y1 = (b.y * zoom as f64).round() as i64;

  let dx = (x1 - x0).abs();
  let dy = (y1 - y0).abs();
  let sx = if x0 < x1 { 1 } else { -1 };
  let sy = if y0 < y1 { 1 } else { -1 };
  let mut err = dx - dy;

  loop {
    if x0 >= 0 && y0 >= 0 && x0 < w && y0 < h {
      canvas.put_pixel(x0 as u32, y0 as u32, color);
    }
    if x0 == x1 && y0 == y1 {
      break;
    }
    let e2 = 2 * err;
    if e2 > -dy {
      err -= dy;
      x0 += sx;
    }
    if e2 < dx {
      err += dx;
      y0 += sy;
    }
  }
}

/// Packs a row-major `f32` persistence map into an RGBA8 PNG, one pixel's
/// four bytes holding the value's little-endian bit pattern.
///
/// PNG has no native floating-point sample type, so this is the lossless
/// byte-for-byte encoding used to carry `persistence`'s output through a
/// standard PNG container; [`decode_f32_png`] is its exact inverse.
pub fn encode_f32_png(data: &[f32], width: usize, height: usize) -> RgbaImage {
  let mut img = RgbaImage::new(width as u32, height as u32);
  for (i, &value) in data.iter().enumerate() {
    let bytes = value.to_le_bytes();
    img.put_pixel((i % width) as u32, (i / width) as u32, Rgba([bytes[0], bytes[1], bytes[2], bytes[3]]));
  }
  img
}

/// Inverse of [`encode_f32_png`].
pub fn decode_f32_png(img: &RgbaImage) -> Vec<f32> {
  img.pixels().map(|p| f32::from_le_bytes([p[0], p[1], p[2], p[3]])).collect()
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;
