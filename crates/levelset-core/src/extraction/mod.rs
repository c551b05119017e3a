//! The extraction driver: enumerates every regional extremum and
//! saddle-quantized level in an image, traces each with the dual-pixel
//! walker, and recovers their nesting from the accumulated row log.

mod extrema;
mod saddles;
mod tree;

pub use tree::build_tree;

use crate::constants::MAX_WIDTH;
use crate::error::CoreError;
use crate::tracer::VisitedEdges;
use crate::types::{Grid, LevelLine, RowLog};

/// Traces every regional extremum and saddle-quantized level line in
/// `image`, returning them alongside the row-intersection log [`build_tree`]
/// consumes to recover their nesting.
///
/// `image` is widened to `f64` once here; every downstream stage works
/// entirely in that domain. Callers are expected to have already replaced
/// the image border with its median value (see the crate-level docs) so
/// that regional extrema never touch the border.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "extraction::extract_level_lines"))]
pub fn extract_level_lines(image: &[u8], width: usize, height: usize, pts_per_pixel: i64) -> Result<(Vec<LevelLine>, RowLog), CoreError> {
  if width < 3 || height < 3 {
    return Err(CoreError::InvalidInput { detail: format!("image must be at least 3x3, got {width}x{height}") });
  }
  if image.len() != width * height {
    return Err(CoreError::InvalidInput { detail: format!("image data length {} does not match {width}x{height}", image.len()) });
  }
  if pts_per_pixel < 0 {
    return Err(CoreError::InvalidInput { detail: format!("pts_per_pixel must be non-negative, got {pts_per_pixel}") });
  }
  if width > MAX_WIDTH {
    return Err(CoreError::TooLarge { width, max: MAX_WIDTH });
  }

  let data: Vec<f64> = image.iter().map(|&v| v as f64).collect();
  let grid = Grid::new(width, height, &data);
  let pts_per_pixel = pts_per_pixel as f64;

  let mut lines = Vec::new();
  let mut row_log: RowLog = vec![Default::default(); height];
  let mut visited = VisitedEdges::new(width, height);

  extrema::extract_extrema(&grid, &mut visited, pts_per_pixel, &mut row_log, &mut lines);
  saddles::extract_saddle_lines(&grid, pts_per_pixel, &mut row_log, &mut lines);

  #[cfg(feature = "tracing")]
  tracing::debug!(width, height, lines = lines.len(), "extraction complete");

  Ok((lines, row_log))
}
