use super::{Corners, saddle_in_square};
use crate::constants::HYPERBOLA_FLAT_EPS;
use crate::types::Point;

/// Which axis two crossing points are farther apart on, for sampling a
/// hyperbola branch along its longer extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
  X,
  Y,
}

/// One branch of the rectangular hyperbola `(x - sx)(y - sy) = delta` that a
/// level line follows while crossing a saddle's dual pixel.
///
/// All coordinates are absolute (already offset by the dual pixel's
/// top-left corner), so the hyperbola equation can be evaluated directly
/// against the polyline points the tracer is assembling.
#[derive(Debug, Clone, Copy)]
pub struct Hyperbola {
  pub saddle: Point,
  pub value: f64,
  pub delta: f64,
  pub vertex: Point,
}

/// Builds the hyperbola a level line at `level` follows through the dual
/// pixel with corners `corners` and top-left corner `top_left`, given the
/// point `entry` the line is arriving through.
///
/// Returns `None` when the dual pixel has no saddle at all — `level` then
/// crosses it as an ordinary (non-hyperbolic) arc and the caller should fall
/// back to straight edge interpolation.
pub fn hyperbola_from(corners: Corners, top_left: Point, entry: Point, level: f64) -> Option<Hyperbola> {
  let saddle = saddle_in_square(corners)?;
  let abs_saddle = top_left + saddle.local;
  let delta = (level - saddle.value) / saddle.denom;
  let mag = delta.abs().sqrt();
  let mut dx_sign = (entry.x - abs_saddle.x).signum();
  if dx_sign == 0.0 {
    dx_sign = 1.0;
  }
  let dy_sign = if delta >= 0.0 { dx_sign } else { -dx_sign };
  let vertex = Point::new(abs_saddle.x + mag * dx_sign, abs_saddle.y + mag * dy_sign);
  Some(Hyperbola { saddle: abs_saddle, value: saddle.value, delta, vertex })
}

/// Samples interior points of the hyperbola branch between `p1` and `p2`,
/// excluding both endpoints, at roughly `pts_per_pixel` points per pixel of
/// travel along the branch's dominant axis.
///
/// When the branch is nearly flat (`|delta|` below [`HYPERBOLA_FLAT_EPS`]),
/// no interior points are emitted — the two edgel crossings already bound the
/// arc tightly enough on their own.
pub fn sample_hyperbola_branch(p1: Point, p2: Point, hyperbola: &Hyperbola, pts_per_pixel: f64) -> Vec<Point> {
  if hyperbola.delta.abs() < HYPERBOLA_FLAT_EPS {
    return Vec::new();
  }
  let dx = (p2.x - p1.x).abs();
  let dy = (p2.y - p1.y).abs();
  let axis = if dx >= dy { Axis::X } else { Axis::Y };
  let axis_dist = if axis == Axis::X { dx } else { dy };
  let steps = (axis_dist * pts_per_pixel).ceil() as i64;
  if steps <= 1 {
    return Vec::new();
  }
  let mut points = Vec::with_capacity((steps - 1) as usize);
  for i in 1..steps {
    let t = i as f64 / steps as f64;
    let point = match axis {
      Axis::X => {
        let x = p1.x + (p2.x - p1.x) * t;
        let y = hyperbola.saddle.y + hyperbola.delta / (x - hyperbola.saddle.x);
        Point::new(x, y)
      }
      Axis::Y => {
        let y = p1.y + (p2.y - p1.y) * t;
        let x = hyperbola.saddle.x + hyperbola.delta / (y - hyperbola.saddle.y);
        Point::new(x, y)
      }
    };
    points.push(point);
  }
  points
}

#[cfg(test)]
#[path = "hyperbola_test.rs"]
mod hyperbola_test;
