//! Stages 5 and 6: arena-indexed merge tree over canonical samples, and its
//! two-pass contrast propagation.

use super::merge::is_canonical;
use crate::types::{PersistenceNode, PersistenceTree, Sample};
use std::collections::VecDeque;

/// Assigns one node per canonical sample — real samples in scan order, then
/// virtual — and links each to its parent's node. Returns the tree alongside
/// a sample-id-to-node-index map (populated only at canonical ids; a
/// non-canonical sample is never looked up directly, only via its parent).
///
/// A canonical sample's `canon` pointer can itself land on a non-canonical
/// sample (two plateaus at unrelated positions can share a raw level, so
/// the one absorbed first isn't necessarily the one that survives every
/// later merge) — the linking pass below walks past those to the nearest
/// sample that is actually canonical.
pub(crate) fn build_tree(samples: &[Option<Sample>], canon: &[Option<usize>], width: usize, height: usize) -> (PersistenceTree, Vec<Option<usize>>) {
  let n = width * height;
  let total = samples.len();
  let mut node_of: Vec<Option<usize>> = vec![None; total];
  let mut nodes = Vec::new();

  for id in 0..total {
    if samples[id].is_some() && is_canonical(id, samples, canon) {
      node_of[id] = Some(nodes.len());
      nodes.push(PersistenceNode { parent: None, children: Vec::new(), level: samples[id].unwrap().value, contrast: 0.0 });
    }
  }
  debug_assert!(n <= total);

  for id in 0..total {
    let Some(node_idx) = node_of[id] else { continue };
    let mut par_id = canon[id].expect("canonical sample must have been processed");
    if par_id == id {
      continue;
    }
    // `canon[id]` can land on a sample that isn't itself canonical: two
    // unrelated plateaus can share a raw level, so the first sample of the
    // higher plateau absorbed into it is not the one that survives further
    // merges. Keep stepping until we reach the representative that does.
    while !is_canonical(par_id, samples, canon) {
      par_id = canon[par_id].expect("a non-canonical sample always has a parent");
    }
    let par_node = node_of[par_id].expect("a canonical sample always has a node");
    nodes[node_idx].parent = Some(par_node);
    nodes[par_node].children.push(node_idx);
  }

  (PersistenceTree { nodes }, node_of)
}

/// Up pass (leaves to root) computes, for every node, the steepest level
/// drop along any descending chain; down pass (root to leaves) lets
/// whichever child actually accounts for a node's contrast inherit it, so a
/// deeply-merged minimum's persistence reflects where it was finally
/// absorbed rather than just its immediate parent, while a sibling that
/// merges in earlier displays only its own, shallower drop. A final pass
/// zeroes every root's own contrast (see the comment at the bottom of this
/// function).
///
/// Both passes are iterative (queue-driven, not recursive) since a
/// degenerate input — a monotone ramp, say — can produce a merge chain as
/// deep as the image is wide.
pub(crate) fn propagate_contrast(mut tree: PersistenceTree) -> PersistenceTree {
  let len = tree.nodes.len();
  let mut pending_children: Vec<usize> = tree.nodes.iter().map(|n| n.children.len()).collect();
  let mut ready: VecDeque<usize> = (0..len).filter(|&i| pending_children[i] == 0).collect();

  while let Some(i) = ready.pop_front() {
    let Some(parent) = tree.nodes[i].parent else { continue };
    let candidate = tree.nodes[i].contrast + (tree.nodes[parent].level - tree.nodes[i].level);
    if candidate > tree.nodes[parent].contrast {
      tree.nodes[parent].contrast = candidate;
    }
    pending_children[parent] -= 1;
    if pending_children[parent] == 0 {
      ready.push_back(parent);
    }
  }

  // Snapshot the up-pass values before the down-pass starts overwriting them:
  // the dominance test for a node's children must compare against what the
  // up-pass actually used to pick that node's own contrast, not against a
  // value a grandparent has since cascaded onto it.
  let up_contrast: Vec<f32> = tree.nodes.iter().map(|n| n.contrast).collect();

  let mut frontier: VecDeque<usize> = tree.nodes.iter().enumerate().filter(|(_, n)| n.parent.is_none()).map(|(i, _)| i).collect();
  while let Some(i) = frontier.pop_front() {
    let children = tree.nodes[i].children.clone();
    // A child is dominant iff its own drop (up-pass contrast plus the level
    // gap to `i`) actually accounts for `i`'s up-pass contrast — not just
    // because it happens to share the same raw up-pass contrast as another
    // child. Two sibling leaves of different depth are both raw-contrast-0
    // (neither has children of its own), but only the deeper one's drop
    // equals `i`'s contrast; the shallower one dies here and displays its
    // own, smaller drop instead of inheriting the deeper one's value. A
    // genuine tie — two children whose drops are actually equal — still
    // lets both continue, since nothing distinguishes which one is "the"
    // surviving feature (e.g. the two symmetric minima a single bilinear
    // saddle joins at the same level).
    for &c in &children {
      let own = up_contrast[c] + (tree.nodes[i].level - tree.nodes[c].level);
      tree.nodes[c].contrast = if own == up_contrast[i] { tree.nodes[i].contrast } else { own };
    }
    frontier.extend(children);
  }

  // The root's up-pass contrast is the full drop spanning its whole subtree,
  // which is exactly what a dominant child just inherited above. Displaying
  // that same value on the root itself would mean two components (the root
  // and that child) both claim the full dynamic range; a root represents the
  // unextinguished background, not a feature, so it is always reported as 0.
  for node in &mut tree.nodes {
    if node.parent.is_none() {
      node.contrast = 0.0;
    }
  }

  tree
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;
