use super::Side;

/// Tracks which horizontal edgels a trace has already crossed, oriented by
/// direction of travel, so the extraction driver can find the next unvisited
/// seed without rescanning lines it has already traced.
///
/// Only horizontal edgels are tracked — the row-wise scans that seed new
/// traces (regional extrema boundaries, saddle lines) only ever need to ask
/// "has this horizontal edgel been crossed yet", never the vertical ones.
#[derive(Debug, Clone)]
pub struct VisitedEdges {
  width: usize,
  height: usize,
  /// Crossed while entering the square below (`entry == Side::Top`).
  south: Vec<bool>,
  /// Crossed while entering the square above (`entry == Side::Bottom`).
  north: Vec<bool>,
}

impl VisitedEdges {
  pub fn new(width: usize, height: usize) -> Self {
    let count = width.saturating_sub(1) * height;
    Self { width, height, south: vec![false; count], north: vec![false; count] }
  }

  fn index(&self, x: i64, y: i64) -> Option<usize> {
    if x < 0 || y < 0 || (x as usize) >= self.width - 1 || (y as usize) >= self.height {
      return None;
    }
    Some(y as usize * (self.width - 1) + x as usize)
  }

  pub fn mark_if_horizontal(&mut self, top_left: (i64, i64), entry: Side) {
    match entry {
      Side::Top => {
        if let Some(i) = self.index(top_left.0, top_left.1) {
          self.south[i] = true;
        }
      }
      Side::Bottom => {
        if let Some(i) = self.index(top_left.0, top_left.1 + 1) {
          self.north[i] = true;
        }
      }
      Side::Right | Side::Left => {}
    }
  }

  pub fn is_visited_south(&self, x: i64, y: i64) -> bool {
    self.index(x, y).map(|i| self.south[i]).unwrap_or(false)
  }

  pub fn is_visited_north(&self, x: i64, y: i64) -> bool {
    self.index(x, y).map(|i| self.north[i]).unwrap_or(false)
  }

  /// Whether the horizontal edgel at `(x, y)` has been crossed in either
  /// direction.
  pub fn is_visited(&self, x: i64, y: i64) -> bool {
    self.is_visited_south(x, y) || self.is_visited_north(x, y)
  }
}

#[cfg(test)]
#[path = "visited_test.rs"]
mod visited_test;
