//! Level-line tree extraction and persistence maps over a bilinear image
//! surface.
//!
//! An 8-bit grayscale image is treated as samples of a continuous surface,
//! bilinearly interpolated between pixel centers. This crate computes two
//! things over that surface:
//!
//! - [`extract_level_lines`] and [`build_tree`]: every closed level line of
//!   the surface (regional extrema, saddle crossings, and the regular lines
//!   between them), with their nesting recovered into a [`LevelLineTree`].
//! - [`persistence`]: for every pixel, the topological contrast of the
//!   minimal or maximal connected component containing it.
//!
//! Callers are expected to pre-seed the image border (typically with its
//! median value) before calling [`extract_level_lines`] — see that
//! function's docs for why regional-extremum detection depends on it.

pub mod constants;
pub mod error;
pub mod extraction;
pub mod geometry;
pub mod persistence;
pub mod tracer;
pub mod types;

pub use error::CoreError;
pub use extraction::{build_tree, extract_level_lines};
pub use persistence::persistence;
pub use types::{LLNode, LevelLine, LevelLineTree, LineType, Point};
