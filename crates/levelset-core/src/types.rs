use smallvec::SmallVec;
use std::ops::{Add, Sub};

/// A point in continuous image coordinates (`x` right, `y` down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
  pub x: f64,
  pub y: f64,
}

impl Point {
  pub const fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }

  pub fn lerp(self, other: Point, t: f64) -> Point {
    Point::new(self.x + (other.x - self.x) * t, self.y + (other.y - self.y) * t)
  }
}

impl Add for Point {
  type Output = Point;
  fn add(self, rhs: Point) -> Point {
    Point::new(self.x + rhs.x, self.y + rhs.y)
  }
}

impl Sub for Point {
  type Output = Point;
  fn sub(self, rhs: Point) -> Point {
    Point::new(self.x - rhs.x, self.y - rhs.y)
  }
}

/// A read-only view over a rectangular grid of samples, addressed row-major.
///
/// Used for both the 8-bit input image (widened to `f64` once at the public
/// boundary) and the virtual-sample grid the persistence engine builds on top
/// of it. Neither the tracer nor the persistence engine cares where the
/// samples came from — this is the one shared seam between them.
#[derive(Debug, Clone, Copy)]
pub struct Grid<'a> {
  pub width: usize,
  pub height: usize,
  data: &'a [f64],
}

impl<'a> Grid<'a> {
  pub fn new(width: usize, height: usize, data: &'a [f64]) -> Self {
    debug_assert_eq!(data.len(), width * height);
    Self { width, height, data }
  }

  #[inline]
  pub fn get(&self, x: usize, y: usize) -> f64 {
    debug_assert!(x < self.width && y < self.height);
    self.data[y * self.width + x]
  }

  #[inline]
  pub fn in_bounds(&self, x: i64, y: i64) -> bool {
    x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
  }
}

/// One image row's still-unresolved crossings: the entry x-coordinate and
/// the index of the [`LevelLine`] that crossed it there. [`build_tree`](crate::extraction::build_tree)
/// consumes this row-by-row to recover line nesting by bracket matching.
///
/// Most rows are crossed by only a handful of lines, hence the inline
/// small-vector capacity.
pub type RowLog = Vec<SmallVec<[(f64, usize); 4]>>;

/// The topological role of a traced level line, fixed at the moment it is
/// seeded and never reclassified afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
  /// Seeded from a saddle crossing; may bound either a min or a max region.
  Saddle,
  /// Encircles a single regional minimum with no saddle inside.
  Min,
  /// Encircles a single regional maximum with no saddle inside.
  Max,
  /// Any other closed level line (the common case away from extrema).
  Regular,
}

/// A single closed level line: a level value and the polyline that traces it.
///
/// The polyline is closed (first and last point coincide up to
/// [`crate::constants::CLOSURE_EPS`]) but does not repeat the closing point.
#[derive(Debug, Clone)]
pub struct LevelLine {
  pub level: f64,
  pub kind: LineType,
  pub polyline: Vec<Point>,
}

/// One node of a [`LevelLineTree`]. Index `i` here corresponds to `lines[i]`
/// in the slice the tree was built from — the tree holds structure only, not
/// a copy of the line data.
#[derive(Debug, Clone)]
pub struct LLNode {
  pub parent: Option<usize>,
  pub children: Vec<usize>,
  /// Axis-aligned bounds of the line's polyline, `(min, max)`, used to speed
  /// up nesting queries without rescanning every point.
  pub bounds: (Point, Point),
}

/// The nesting forest over a set of level lines, recovered from how their
/// polylines enclose one another.
///
/// `nodes[i]` describes the line at `lines[i]` in whatever slice produced
/// this tree. Roots are nodes with `parent == None`.
#[derive(Debug, Clone, Default)]
pub struct LevelLineTree {
  pub nodes: Vec<LLNode>,
}

impl LevelLineTree {
  pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
    self.nodes.iter().enumerate().filter(|(_, n)| n.parent.is_none()).map(|(i, _)| i)
  }
}

/// Whether a persistence-engine sample sits on the original pixel grid or was
/// synthesized at a bilinear saddle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
  Real,
  Virtual,
}

/// One sample fed into the persistence engine's monotone merge.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
  pub x: f64,
  pub y: f64,
  pub value: f32,
  pub kind: SampleKind,
}

/// One node of a [`PersistenceTree`]: a merge event between regional extrema,
/// carrying the contrast assigned by the two-pass propagation.
#[derive(Debug, Clone)]
pub struct PersistenceNode {
  pub parent: Option<usize>,
  pub children: Vec<usize>,
  pub level: f32,
  pub contrast: f32,
}

/// The merge tree produced by one direction (direct or inverted) of the
/// persistence engine.
#[derive(Debug, Clone, Default)]
pub struct PersistenceTree {
  pub nodes: Vec<PersistenceNode>,
}

impl PersistenceTree {
  pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
    self.nodes.iter().enumerate().filter(|(_, n)| n.parent.is_none()).map(|(i, _)| i)
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
