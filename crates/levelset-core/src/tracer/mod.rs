//! The dual-pixel walker: follows a single level line through the grid one
//! dual pixel at a time, emitting a closed polyline.
//!
//! A dual pixel is identified by its top-left pixel coordinate. The walker
//! enters through one of its four edgels and, by comparing corner values
//! against the level, determines the one edgel it must exit through — except
//! in a saddle cell, where two edgels qualify and the saddle's hyperbola
//! disambiguates which one continues *this* line (see [`crate::geometry`]).

mod visited;
mod walker;

pub use visited::VisitedEdges;

use crate::types::{Grid, Point, RowLog};
use walker::step;

/// One of the four edgels bounding a dual pixel, named by compass position
/// rather than direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
  Top,
  Right,
  Bottom,
  Left,
}

impl Side {
  /// The next side clockwise around the dual pixel.
  pub fn cw(self) -> Side {
    match self {
      Side::Top => Side::Right,
      Side::Right => Side::Bottom,
      Side::Bottom => Side::Left,
      Side::Left => Side::Top,
    }
  }

  /// The next side counter-clockwise around the dual pixel.
  pub fn ccw(self) -> Side {
    match self {
      Side::Top => Side::Left,
      Side::Left => Side::Bottom,
      Side::Bottom => Side::Right,
      Side::Right => Side::Top,
    }
  }

  const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];
}

/// Where to seed a new level-line trace: a dual pixel, the edgel the walker
/// should treat as already-crossed, and the exact point on it.
#[derive(Debug, Clone, Copy)]
pub struct TraceStart {
  pub top_left: (i64, i64),
  pub entry: Side,
  pub point: Point,
}

/// Traces one closed level line starting at `start`, returning its polyline.
///
/// `visited` is updated with every horizontal edgel the walk crosses, in
/// crossing-direction ("entered moving down" vs. "entered moving up"), so
/// callers can find unvisited edgels to seed further traces without
/// retracing lines already covered.
///
/// When `row_log` is supplied, every step entered vertically (through a
/// horizontal edgel) also appends `(entry_x, line_index)` to the log row for
/// the edgel it crosses — the substrate [`crate::extraction::build_tree`]
/// uses to recover line nesting.
pub fn trace(
  grid: &Grid,
  start: TraceStart,
  level: f64,
  visited: &mut VisitedEdges,
  pts_per_pixel: f64,
  line_index: usize,
  mut row_log: Option<&mut RowLog>,
) -> Vec<Point> {
  let mut polyline = vec![start.point];
  let mut top_left = start.top_left;
  let mut entry = start.entry;
  let mut entry_point = start.point;

  // One full revolution visits at most 4 dual pixels per pixel of the
  // image's perimeter of travel; this bound only guards against a defect in
  // the geometry, not a case expected to occur on valid input.
  let max_steps = 4 * (grid.width + 1) * (grid.height + 1);

  for _ in 0..max_steps {
    visited.mark_if_horizontal(top_left, entry);
    if let Some(log) = row_log.as_deref_mut() {
      if let Some(row) = horizontal_row(top_left, entry, grid.height) {
        log[row].push((entry_point.x, line_index));
      }
    }
    let corners = corners_at(grid, top_left);
    let top_left_abs = Point::new(top_left.0 as f64, top_left.1 as f64);
    let (exit, exit_point, hyperbola) = step(corners, top_left_abs, entry, entry_point, level);
    if let Some(h) = &hyperbola {
      polyline.extend(geometry_samples(entry_point, exit_point, h, pts_per_pixel));
    }
    polyline.push(exit_point);

    let (next_top_left, next_entry) = advance(top_left, exit);
    if (next_top_left, next_entry) == (start.top_left, start.entry) {
      break;
    }
    top_left = next_top_left;
    entry = next_entry;
    entry_point = exit_point;
  }

  polyline
}

fn geometry_samples(p1: Point, p2: Point, h: &crate::geometry::Hyperbola, pts_per_pixel: f64) -> Vec<Point> {
  crate::geometry::sample_hyperbola_branch(p1, p2, h, pts_per_pixel)
}

/// The row-log index a step entering through `entry` belongs to, or `None`
/// for a non-horizontal entry (the row log only tracks vertical-direction
/// steps, mirroring [`VisitedEdges`]).
fn horizontal_row(top_left: (i64, i64), entry: Side, height: usize) -> Option<usize> {
  let row = match entry {
    Side::Top => top_left.1,
    Side::Bottom => top_left.1 + 1,
    Side::Right | Side::Left => return None,
  };
  if row < 0 || row as usize >= height {
    return None;
  }
  Some(row as usize)
}

/// Which neighboring dual pixel a walk enters after exiting through `side`,
/// and the entry edgel it arrives through (always the opposite edgel).
fn advance(top_left: (i64, i64), side: Side) -> ((i64, i64), Side) {
  let (ix, iy) = top_left;
  match side {
    Side::Top => ((ix, iy - 1), Side::Bottom),
    Side::Bottom => ((ix, iy + 1), Side::Top),
    Side::Right => ((ix + 1, iy), Side::Left),
    Side::Left => ((ix - 1, iy), Side::Right),
  }
}

fn corners_at(grid: &Grid, top_left: (i64, i64)) -> crate::geometry::Corners {
  let (ix, iy) = top_left;
  debug_assert!(ix >= 0 && iy >= 0);
  let (ix, iy) = (ix as usize, iy as usize);
  crate::geometry::Corners::new(grid.get(ix, iy), grid.get(ix + 1, iy), grid.get(ix + 1, iy + 1), grid.get(ix, iy + 1))
}
