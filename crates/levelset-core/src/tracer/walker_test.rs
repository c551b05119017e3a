use super::*;
use crate::geometry::Corners;

#[test]
fn ramp_cell_exits_opposite_the_entry() {
  let corners = Corners::new(0.0, 1.0, 1.0, 0.0);
  let top_left = Point::new(0.0, 0.0);
  let entry_point = Point::new(0.5, 0.0);
  let (exit, point, hyperbola) = step(corners, top_left, Side::Top, entry_point, 0.5);
  assert_eq!(exit, Side::Bottom);
  assert!((point.x - 0.5).abs() < 1e-9);
  assert!(hyperbola.is_none());
}

#[test]
fn saddle_cell_below_saddle_value_turns_counterclockwise() {
  let corners = Corners::new(0.0, 9.0, 0.0, 9.0); // saddle value 4.5
  let top_left = Point::new(0.0, 0.0);
  let entry_point = crossing_for_test(corners, 2.0);
  let (exit, _point, hyperbola) = step(corners, top_left, Side::Top, entry_point, 2.0);
  assert_eq!(exit, Side::Left);
  assert!(hyperbola.is_some());
}

#[test]
fn saddle_cell_above_saddle_value_turns_clockwise() {
  let corners = Corners::new(0.0, 9.0, 0.0, 9.0);
  let top_left = Point::new(0.0, 0.0);
  let entry_point = crossing_for_test(corners, 7.0);
  let (exit, _point, hyperbola) = step(corners, top_left, Side::Top, entry_point, 7.0);
  assert_eq!(exit, Side::Right);
  assert!(hyperbola.is_some());
}

fn crossing_for_test(corners: Corners, level: f64) -> Point {
  let t = (level - corners.a) / (corners.b - corners.a);
  Point::new(t, 0.0)
}
