use super::*;

#[test]
fn fresh_edges_are_unvisited() {
  let visited = VisitedEdges::new(4, 4);
  assert!(!visited.is_visited(0, 0));
  assert!(!visited.is_visited(2, 3));
}

#[test]
fn marking_top_sets_south_only() {
  let mut visited = VisitedEdges::new(4, 4);
  visited.mark_if_horizontal((1, 1), Side::Top);
  assert!(visited.is_visited_south(1, 1));
  assert!(!visited.is_visited_north(1, 1));
  assert!(visited.is_visited(1, 1));
}

#[test]
fn marking_bottom_sets_north_at_the_row_below() {
  let mut visited = VisitedEdges::new(4, 4);
  visited.mark_if_horizontal((1, 1), Side::Bottom);
  assert!(visited.is_visited_north(1, 2));
  assert!(!visited.is_visited_south(1, 2));
}

#[test]
fn marking_vertical_sides_is_a_no_op() {
  let mut visited = VisitedEdges::new(4, 4);
  visited.mark_if_horizontal((1, 1), Side::Left);
  visited.mark_if_horizontal((1, 1), Side::Right);
  assert!(!visited.is_visited(1, 1));
  assert!(!visited.is_visited(2, 1));
}

#[test]
fn out_of_bounds_queries_report_unvisited() {
  let visited = VisitedEdges::new(4, 4);
  assert!(!visited.is_visited(-1, 0));
  assert!(!visited.is_visited(10, 0));
}
