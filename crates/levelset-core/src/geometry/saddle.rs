use super::Corners;
use crate::types::Point;

/// A bilinear saddle point inside a dual pixel.
#[derive(Debug, Clone, Copy)]
pub struct Saddle {
  /// Value of the surface at the saddle.
  pub value: f64,
  /// Local coordinates of the saddle, both in `(0, 1)`.
  pub local: Point,
  /// `(a + c) - (b + d)`. Its sign fixes which diagonal runs "high".
  pub denom: f64,
}

/// Locates the saddle of the bilinear surface spanned by `corners`, if one
/// exists inside the open unit square.
///
/// A dual pixel has a genuine interior saddle exactly when its two diagonals
/// carry disjoint, ordered value ranges — one diagonal entirely above the
/// other. Concretely: the corners on one diagonal (`a`, `c`) bound an
/// interval, and the saddle exists iff both corners of the other diagonal
/// (`b`, `d`) lie strictly outside that interval on the same side.
pub fn saddle_in_square(corners: Corners) -> Option<Saddle> {
  let Corners { a, b, c, d } = corners;
  let lo = a.min(c);
  let hi = a.max(c);
  let sign_b = (b - b.clamp(lo, hi)).signum();
  let sign_d = (d - d.clamp(lo, hi)).signum();
  if sign_b == 0.0 || sign_d == 0.0 || sign_b != sign_d {
    return None;
  }
  let denom = (a + c) - (b + d);
  if denom == 0.0 {
    return None;
  }
  let u = (a - d) / denom;
  let v = (a - b) / denom;
  debug_assert!((0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&v));
  let value = corners.bilinear(u, v);
  Some(Saddle { value, local: Point::new(u, v), denom })
}

#[cfg(test)]
#[path = "saddle_test.rs"]
mod saddle_test;
