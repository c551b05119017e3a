//! Regional extrema: flood-fills equal-value plateaus and, for every one that
//! doesn't touch the image border, traces the Min- or Max-typed level line
//! bounding it.

use crate::constants::DELTA;
use crate::geometry::edge_crossing;
use crate::tracer::{trace, Side, TraceStart, VisitedEdges};
use crate::types::{Grid, LevelLine, LineType, Point, RowLog};

/// Flood-fills every equal-value plateau exactly once and emits a level line
/// for each one classified as a regional extremum.
pub(crate) fn extract_extrema(grid: &Grid, visited: &mut VisitedEdges, pts_per_pixel: f64, row_log: &mut RowLog, lines: &mut Vec<LevelLine>) {
  let (width, height) = (grid.width, grid.height);
  let mut seen = vec![false; width * height];

  for y in 0..height {
    for x in 0..width {
      if seen[y * width + x] {
        continue;
      }
      let differs_right = x + 1 >= width || grid.get(x, y) != grid.get(x + 1, y);
      if !differs_right {
        continue;
      }
      let value = grid.get(x, y);
      let plateau = flood_plateau(grid, &mut seen, x, y, value);
      classify_and_emit(grid, &plateau, value, visited, pts_per_pixel, row_log, lines);
    }
  }
}

fn neighbors4(x: usize, y: usize, width: usize, height: usize) -> [Option<(usize, usize)>; 4] {
  [
    if x > 0 { Some((x - 1, y)) } else { None },
    if x + 1 < width { Some((x + 1, y)) } else { None },
    if y > 0 { Some((x, y - 1)) } else { None },
    if y + 1 < height { Some((x, y + 1)) } else { None },
  ]
}

fn flood_plateau(grid: &Grid, seen: &mut [bool], sx: usize, sy: usize, value: f64) -> Vec<(usize, usize)> {
  let (width, height) = (grid.width, grid.height);
  let mut plateau = Vec::new();
  let mut stack = vec![(sx, sy)];
  seen[sy * width + sx] = true;
  while let Some((x, y)) = stack.pop() {
    plateau.push((x, y));
    for (nx, ny) in neighbors4(x, y, width, height).into_iter().flatten() {
      let idx = ny * width + nx;
      if !seen[idx] && grid.get(nx, ny) == value {
        seen[idx] = true;
        stack.push((nx, ny));
      }
    }
  }
  plateau
}

/// Classifies a flood-filled plateau and, if it's a clean regional extremum,
/// traces and records its bounding level line.
fn classify_and_emit(
  grid: &Grid,
  plateau: &[(usize, usize)],
  value: f64,
  visited: &mut VisitedEdges,
  pts_per_pixel: f64,
  row_log: &mut RowLog,
  lines: &mut Vec<LevelLine>,
) {
  let (width, height) = (grid.width, grid.height);
  let mut touches_border = false;
  // A plateau qualifies as Max iff *every* pixel that borders the outside
  // has at least one external neighbor strictly lower — not that every
  // external neighbor is lower. A plateau can satisfy this while some of its
  // border pixels also touch a higher plateau (a smaller peak sitting on a
  // plateau shoulder), which is exactly how nested maxima work.
  let mut is_max = true;
  let mut is_min = true;
  for &(x, y) in plateau {
    if x == 0 || y == 0 || x + 1 == width || y + 1 == height {
      touches_border = true;
    }
    let mut has_external = false;
    let mut ext_lower = false;
    let mut ext_higher = false;
    for (nx, ny) in neighbors4(x, y, width, height).into_iter().flatten() {
      let nv = grid.get(nx, ny);
      if nv == value {
        continue;
      }
      has_external = true;
      if nv < value {
        ext_lower = true;
      } else {
        ext_higher = true;
      }
    }
    if has_external {
      is_max &= ext_lower;
      is_min &= ext_higher;
    }
  }
  if touches_border {
    return;
  }
  let kind = match (is_max, is_min) {
    (true, false) => LineType::Max,
    (false, true) => LineType::Min,
    _ => return,
  };
  let level = match kind {
    LineType::Max => value - DELTA,
    LineType::Min => value + DELTA,
    _ => unreachable!("classification above only produces Max or Min"),
  };

  let start = find_crossing_edge(grid, plateau, value, kind, level);
  let line_index = lines.len();
  let polyline = trace(grid, start, level, visited, pts_per_pixel, line_index, Some(row_log));
  lines.push(LevelLine { level, kind, polyline });
}

/// Finds a plateau-to-exterior edgel the trace can actually start from: one
/// whose exterior corner lies strictly on the correct side of `level` (below
/// it for a Max, above it for a Min).
///
/// The plateau's scan-order seed pixel — the one `extract_extrema` flood-fills
/// from — is *not* guaranteed to have this property itself: §4.3 only
/// requires every bordering pixel to have *some* lower (Max) or higher (Min)
/// external neighbor, not that its first differing neighbor is the one. A
/// taller peak can sit immediately to that pixel's right while the plateau is
/// still a clean Max overall, in which case the right edgel the level never
/// crosses and the walker would be started inside a dual pixel with nothing
/// to trace. This scans every plateau pixel's four neighbors until it finds
/// one on the correct side.
fn find_crossing_edge(grid: &Grid, plateau: &[(usize, usize)], value: f64, kind: LineType, level: f64) -> TraceStart {
  let wants_lower = matches!(kind, LineType::Max);
  for &(x, y) in plateau {
    let (xf, yf) = (x as f64, y as f64);

    let right = grid.get(x + 1, y);
    if on_correct_side(right, value, wants_lower) {
      let point = edge_crossing(Point::new(xf, yf), value, Point::new(xf + 1.0, yf), right, level);
      return TraceStart { top_left: (x as i64, y as i64), entry: Side::Top, point };
    }
    let left = grid.get(x - 1, y);
    if on_correct_side(left, value, wants_lower) {
      let point = edge_crossing(Point::new(xf - 1.0, yf), left, Point::new(xf, yf), value, level);
      return TraceStart { top_left: (x as i64 - 1, y as i64), entry: Side::Top, point };
    }
    let down = grid.get(x, y + 1);
    if on_correct_side(down, value, wants_lower) {
      let point = edge_crossing(Point::new(xf, yf), value, Point::new(xf, yf + 1.0), down, level);
      return TraceStart { top_left: (x as i64, y as i64), entry: Side::Left, point };
    }
    let up = grid.get(x, y - 1);
    if on_correct_side(up, value, wants_lower) {
      let point = edge_crossing(Point::new(xf, yf - 1.0), up, Point::new(xf, yf), value, level);
      return TraceStart { top_left: (x as i64, y as i64 - 1), entry: Side::Left, point };
    }
  }
  unreachable!("a plateau classified as Max or Min that doesn't touch the border always has a qualifying exterior edge")
}

fn on_correct_side(neighbor: f64, value: f64, wants_lower: bool) -> bool {
  if wants_lower {
    neighbor < value
  } else {
    neighbor > value
  }
}

#[cfg(test)]
#[path = "extrema_test.rs"]
mod extrema_test;
