use thiserror::Error;

/// Errors surfaced by the three public entry points.
///
/// Internal invariants that a caller cannot violate (they depend only on
/// arithmetic already validated at the boundary) are checked with
/// `debug_assert!` in hot loops instead — see the module docs on `tracer` and
/// `persistence` for which invariants fall into that bucket.
#[derive(Debug, Error)]
pub enum CoreError {
  /// The caller passed a grid that cannot possibly represent a valid image.
  #[error("invalid input: {detail}")]
  InvalidInput { detail: String },

  /// The image is wider than the quantization margin was derived for.
  #[error("image width {width} exceeds the maximum supported width {max}")]
  TooLarge { width: usize, max: usize },

  /// An internal invariant was violated despite valid input. Indicates a bug
  /// in this crate, not a problem with the caller's data.
  #[error("internal invariant violated: {detail}")]
  Invariant { detail: String },
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
