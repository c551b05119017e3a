//! Saddle-crossing level lines: every dual pixel with a bilinear saddle seeds
//! up to two closed lines, one per horizontal edgel, grouped by topologically
//! simultaneous (quantized) saddle value.

use crate::constants::{quantize_index, quantize_level};
use crate::geometry::{corners_at, saddle_in_square};
use crate::tracer::{trace, Side, TraceStart, VisitedEdges};
use crate::types::{Grid, LevelLine, LineType, Point, RowLog};

struct SaddleHit {
  x: usize,
  y: usize,
  value: f64,
}

/// Collects every saddle-bearing dual pixel, sorts by value, and traces a
/// saddle-typed line from each still-unvisited horizontal edgel within each
/// quantization group.
///
/// The visited set is a fresh [`VisitedEdges`] per group: resetting it here
/// is what lets the same physical edgel be crossed by lines in different
/// groups while still deduplicating within one group.
pub(crate) fn extract_saddle_lines(grid: &Grid, pts_per_pixel: f64, row_log: &mut RowLog, lines: &mut Vec<LevelLine>) {
  let (width, height) = (grid.width, grid.height);
  if width < 2 || height < 2 {
    return;
  }

  let mut hits = Vec::new();
  for y in 0..height - 1 {
    for x in 0..width - 1 {
      if let Some(saddle) = saddle_in_square(corners_at(grid, x, y)) {
        hits.push(SaddleHit { x, y, value: saddle.value });
      }
    }
  }
  hits.sort_by(|a, b| a.value.partial_cmp(&b.value).expect("saddle values are finite"));

  let mut i = 0;
  while i < hits.len() {
    let group_index = quantize_index(hits[i].value);
    let mut j = i + 1;
    while j < hits.len() && quantize_index(hits[j].value) == group_index {
      j += 1;
    }
    let level = quantize_level(hits[i].value);
    let mut visited = VisitedEdges::new(width, height);
    for hit in &hits[i..j] {
      seed_saddle_edgel(grid, hit.x, hit.y, level, Side::Top, &mut visited, pts_per_pixel, row_log, lines);
      seed_saddle_edgel(grid, hit.x, hit.y, level, Side::Bottom, &mut visited, pts_per_pixel, row_log, lines);
    }
    i = j;
  }
}

/// Traces a saddle line from one horizontal edgel of the dual pixel at
/// `(x, y)`, unless that edgel was already crossed earlier in this group.
fn seed_saddle_edgel(
  grid: &Grid,
  x: usize,
  y: usize,
  level: f64,
  side: Side,
  visited: &mut VisitedEdges,
  pts_per_pixel: f64,
  row_log: &mut RowLog,
  lines: &mut Vec<LevelLine>,
) {
  let already_visited = match side {
    Side::Top => visited.is_visited_south(x as i64, y as i64),
    Side::Bottom => visited.is_visited_north(x as i64, y as i64 + 1),
    Side::Right | Side::Left => unreachable!("saddle lines only seed horizontal edgels"),
  };
  if already_visited {
    return;
  }

  let corners = corners_at(grid, x, y);
  let point = match side {
    Side::Top => {
      let t = (level - corners.a) / (corners.b - corners.a);
      Point::new(x as f64 + t, y as f64)
    }
    Side::Bottom => {
      let t = (level - corners.d) / (corners.c - corners.d);
      Point::new(x as f64 + t, y as f64 + 1.0)
    }
    Side::Right | Side::Left => unreachable!("saddle lines only seed horizontal edgels"),
  };

  let start = TraceStart { top_left: (x as i64, y as i64), entry: side, point };
  let line_index = lines.len();
  let polyline = trace(grid, start, level, visited, pts_per_pixel, line_index, Some(row_log));
  lines.push(LevelLine { level, kind: LineType::Saddle, polyline });
}

#[cfg(test)]
#[path = "saddles_test.rs"]
mod saddles_test;
