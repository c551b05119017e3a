//! Builds the combined real/virtual sample array and its sort order.
//!
//! Real samples are the image pixels themselves. Virtual samples are the
//! bilinear saddle, one per dual pixel that has one, carrying its saddle
//! value rather than a pixel's. Ids are a flat `2 * width * height` space:
//! `[0, n)` is real samples addressed `y * width + x`; `[n, 2n)` is virtual
//! samples addressed the same way over their dual pixel's top-left corner.
//! A virtual id has no sample (stays `None`) when its dual pixel is out of
//! range (last row/column) or has no saddle.

use crate::geometry::{corners_at, saddle_in_square};
use crate::types::{Grid, Sample, SampleKind};

pub(crate) fn build_samples(image: &[f32], width: usize, height: usize) -> Vec<Option<Sample>> {
  let n = width * height;
  let mut samples = vec![None; 2 * n];

  for y in 0..height {
    for x in 0..width {
      samples[real_id(x, y, width)] = Some(Sample { x: x as f64, y: y as f64, value: image[y * width + x], kind: SampleKind::Real });
    }
  }

  let widened: Vec<f64> = image.iter().map(|&v| v as f64).collect();
  let grid = Grid::new(width, height, &widened);
  for y in 0..height - 1 {
    for x in 0..width - 1 {
      let corners = corners_at(&grid, x, y);
      if let Some(saddle) = saddle_in_square(corners) {
        let point = Sample {
          x: x as f64 + saddle.local.x,
          y: y as f64 + saddle.local.y,
          value: saddle.value as f32,
          kind: SampleKind::Virtual,
        };
        samples[virtual_id(x, y, width, height)] = Some(point);
      }
    }
  }

  samples
}

/// Sorts every populated sample id by value, then kind (real before virtual),
/// then `(y, x)` of its grid position — see [`decode`].
pub(crate) fn sort_order(samples: &[Option<Sample>], width: usize, height: usize) -> Vec<usize> {
  let mut order: Vec<usize> = (0..samples.len()).filter(|&id| samples[id].is_some()).collect();
  order.sort_by(|&a, &b| {
    let (va, vb) = (samples[a].unwrap().value, samples[b].unwrap().value);
    let (xa, ya, ka) = decode(a, width, height);
    let (xb, yb, kb) = decode(b, width, height);
    va.total_cmp(&vb).then_with(|| kind_rank(ka).cmp(&kind_rank(kb))).then_with(|| (ya, xa).cmp(&(yb, xb)))
  });
  order
}

fn kind_rank(kind: SampleKind) -> u8 {
  match kind {
    SampleKind::Real => 0,
    SampleKind::Virtual => 1,
  }
}

#[inline]
pub(crate) fn real_id(x: usize, y: usize, width: usize) -> usize {
  y * width + x
}

#[inline]
pub(crate) fn virtual_id(x: usize, y: usize, width: usize, height: usize) -> usize {
  width * height + y * width + x
}

/// Recovers `(x, y, kind)` from a sample id.
#[inline]
pub(crate) fn decode(id: usize, width: usize, height: usize) -> (usize, usize, SampleKind) {
  let n = width * height;
  if id < n {
    (id % width, id / width, SampleKind::Real)
  } else {
    let v = id - n;
    (v % width, v / width, SampleKind::Virtual)
  }
}

#[cfg(test)]
#[path = "samples_test.rs"]
mod samples_test;
