//! The persistence engine: for every pixel, the topological contrast of the
//! extremal connected component containing it.
//!
//! The real pixel grid is augmented with a virtual sample at every bilinear
//! saddle (see [`crate::geometry`]), and all `2 * width * height` samples
//! are merged by a single monotone union-find sweep in ascending value
//! order — the classic watershed/merge-tree construction, generalized so
//! that diagonal pixel connectivity is resolved at the saddle's true
//! fractional level rather than at whichever pixel happens to be processed
//! next. See [`merge`] for why diagonal real-to-real edges are never used
//! directly.
//!
//! This computes one orientation only: leaves are regional minima, the root
//! is the global maximum, and `contrast` is the level drop between a pixel's
//! component and the ancestor it is ultimately absorbed into. Callers who
//! want the max-persistence orientation call this again with every sample
//! inverted (`255.0 - image[i]` for an 8-bit source).
//!
//! Internal consistency (every canonical sample's parent is itself
//! canonical, every processed sample has a `zparent`) is enforced with
//! `expect`/`debug_assert!` rather than a `Result`, matching
//! [`crate::error::CoreError::Invariant`]'s contract: these can only fail on
//! a bug in this module, never on caller input, since the validation at the
//! top of [`persistence`] already rules out every input shape that would
//! make them reachable.

mod merge;
mod samples;
mod tree;

use crate::constants::MAX_WIDTH;
use crate::error::CoreError;

/// Computes the min-persistence map of `image`: `out[y * width + x]` is the
/// level drop between the pixel's regional-minimum component and the
/// ancestor component it is absorbed into on the way to the global maximum.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "persistence::persistence"))]
pub fn persistence(image: &[f32], width: usize, height: usize) -> Result<Vec<f32>, CoreError> {
  if width < 2 || height < 2 {
    return Err(CoreError::InvalidInput { detail: format!("image must be at least 2x2, got {width}x{height}") });
  }
  if image.len() != width * height {
    return Err(CoreError::InvalidInput { detail: format!("image data length {} does not match {width}x{height}", image.len()) });
  }
  if width > MAX_WIDTH {
    return Err(CoreError::TooLarge { width, max: MAX_WIDTH });
  }

  let n = width * height;
  let all_samples = samples::build_samples(image, width, height);
  let order = samples::sort_order(&all_samples, width, height);

  #[cfg(feature = "tracing")]
  tracing::debug!(width, height, real = n, virtual_samples = order.len() - n, "persistence samples built");

  let parent = merge::union_find(&all_samples, &order, width, height);
  let canon = merge::canonicalize(&all_samples, &order, parent);
  let (tree, node_of) = tree::build_tree(&all_samples, &canon, width, height);
  let tree = tree::propagate_contrast(tree);

  let mut out = vec![0.0f32; n];
  for id in 0..n {
    let rep = if merge::is_canonical(id, &all_samples, &canon) { id } else { canon[id].expect("every real sample is processed") };
    let node_idx = node_of[rep].expect("a canonical sample always has a node");
    out[id] = tree.nodes[node_idx].contrast;
  }

  #[cfg(feature = "tracing")]
  tracing::debug!(nodes = tree.nodes.len(), "persistence complete");

  Ok(out)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
