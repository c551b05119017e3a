use super::Side;
use crate::geometry::{edge_crossing, hyperbola_from, Corners, Hyperbola};
use crate::types::Point;

/// Local coordinate offset of each corner within a dual pixel, matching
/// [`Corners`]'s `a, b, c, d` clockwise-from-top-left layout.
fn corner_offset(side_corner: CornerTag) -> (f64, f64) {
  match side_corner {
    CornerTag::A => (0.0, 0.0),
    CornerTag::B => (1.0, 0.0),
    CornerTag::C => (1.0, 1.0),
    CornerTag::D => (0.0, 1.0),
  }
}

#[derive(Debug, Clone, Copy)]
enum CornerTag {
  A,
  B,
  C,
  D,
}

fn corner_value(corners: Corners, tag: CornerTag) -> f64 {
  match tag {
    CornerTag::A => corners.a,
    CornerTag::B => corners.b,
    CornerTag::C => corners.c,
    CornerTag::D => corners.d,
  }
}

/// The two corners bounding `side`, in a fixed traversal order (left-to-right
/// for the horizontal sides, top-to-bottom for the vertical ones).
fn side_endpoints(side: Side) -> (CornerTag, CornerTag) {
  match side {
    Side::Top => (CornerTag::A, CornerTag::B),
    Side::Right => (CornerTag::B, CornerTag::C),
    Side::Bottom => (CornerTag::D, CornerTag::C),
    Side::Left => (CornerTag::A, CornerTag::D),
  }
}

fn qualifies(corners: Corners, side: Side, level: f64) -> bool {
  let (t0, t1) = side_endpoints(side);
  let (v0, v1) = (corner_value(corners, t0), corner_value(corners, t1));
  (v0 - level) * (v1 - level) < 0.0
}

fn crossing_point(corners: Corners, top_left_abs: Point, side: Side, level: f64) -> Point {
  let (t0, t1) = side_endpoints(side);
  let (v0, v1) = (corner_value(corners, t0), corner_value(corners, t1));
  let (o0, o1) = (corner_offset(t0), corner_offset(t1));
  let p0 = top_left_abs + Point::new(o0.0, o0.1);
  let p1 = top_left_abs + Point::new(o1.0, o1.1);
  edge_crossing(p0, v0, p1, v1, level)
}

/// Advances one dual pixel: finds the exit edgel and the point the level
/// line crosses it at, and, in a saddle cell, the hyperbola that justified
/// the choice (so the caller can sample its interior arc).
pub fn step(corners: Corners, top_left_abs: Point, entry: Side, entry_point: Point, level: f64) -> (Side, Point, Option<Hyperbola>) {
  if let Some(h) = hyperbola_from(corners, top_left_abs, entry_point, level) {
    let exit = if h.delta < 0.0 { entry.cw() } else { entry.ccw() };
    debug_assert!(qualifies(corners, exit, level), "saddle disambiguation picked a non-crossing edgel");
    let exit_point = crossing_point(corners, top_left_abs, exit, level);
    (exit, exit_point, Some(h))
  } else {
    let exit = Side::ALL
      .into_iter()
      .find(|&s| s != entry && qualifies(corners, s, level))
      .expect("a non-saddle dual pixel entered on one edgel always has exactly one other crossing edgel");
    let exit_point = crossing_point(corners, top_left_abs, exit, level);
    (exit, exit_point, None)
  }
}

#[cfg(test)]
#[path = "walker_test.rs"]
mod walker_test;
