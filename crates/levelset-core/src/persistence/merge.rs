//! Monotone union-find merge over the combined sample array.
//!
//! Real samples connect to their 4-connected (cardinal) real neighbors only;
//! diagonal connectivity on the continuous bilinear surface is mediated
//! entirely by the virtual saddle sample of the dual pixel the two diagonal
//! pixels share, which connects to all 4 of its real corners. A dual pixel
//! with no saddle needs no diagonal edge at all: its four corners are
//! already connected pairwise through their shared cardinal neighbors, at
//! whichever of the two levels is crossed first.

use super::samples::{decode, real_id};
use crate::types::{Sample, SampleKind};
use smallvec::SmallVec;

/// Runs the Stage 3 merge, returning the resulting (pre-canonicalization)
/// parent pointers: `parent[p]` is always either `p` itself or a sample
/// processed no earlier than `p` in `order`.
pub(crate) fn union_find(samples: &[Option<Sample>], order: &[usize], width: usize, height: usize) -> Vec<Option<usize>> {
  let len = samples.len();
  let mut parent: Vec<Option<usize>> = vec![None; len];
  let mut zparent: Vec<Option<usize>> = vec![None; len];

  for &p in order {
    parent[p] = Some(p);
    zparent[p] = Some(p);
    for q in neighbors_of(p, width, height) {
      if zparent[q].is_none() {
        continue; // not yet processed
      }
      let r = find(&mut zparent, q);
      if r != p {
        parent[r] = Some(p);
        zparent[r] = Some(p);
      }
    }
  }
  parent
}

fn neighbors_of(id: usize, width: usize, height: usize) -> SmallVec<[usize; 4]> {
  let (x, y, kind) = decode(id, width, height);
  let mut out = SmallVec::new();
  match kind {
    SampleKind::Real => {
      for (dx, dy) in [(-1i64, 0i64), (1, 0), (0, -1), (0, 1)] {
        let nx = x as i64 + dx;
        let ny = y as i64 + dy;
        if nx >= 0 && ny >= 0 && (nx as usize) < width && (ny as usize) < height {
          out.push(real_id(nx as usize, ny as usize, width));
        }
      }
    }
    SampleKind::Virtual => {
      for (cx, cy) in [(x, y), (x + 1, y), (x + 1, y + 1), (x, y + 1)] {
        out.push(real_id(cx, cy, width));
      }
    }
  }
  out
}

/// Path-halving find over `zparent`, the compressible shadow of `parent`
/// used only to keep Stage 3's merge loop fast.
fn find(zparent: &mut [Option<usize>], mut x: usize) -> usize {
  loop {
    let px = zparent[x].expect("find walked into an unprocessed sample");
    if px == x {
      return x;
    }
    let gx = zparent[px].expect("zparent chain must stay fully linked once processed");
    zparent[x] = Some(gx);
    x = gx;
  }
}

/// Stage 4: walks `order` in reverse, folding each plateau member's parent
/// pointer directly onto its plateau's canonical representative.
///
/// Correct in one pass because `parent` only ever points forward in `order`:
/// by the time a sample `p` is visited here, `parent[p]`'s own parent has
/// already been folded, so `parent[parent[p]]` is always already canonical.
pub(crate) fn canonicalize(samples: &[Option<Sample>], order: &[usize], mut parent: Vec<Option<usize>>) -> Vec<Option<usize>> {
  for &p in order.iter().rev() {
    let q = parent[p].expect("every processed sample has a parent");
    if q == p {
      continue;
    }
    if samples[p].unwrap().value == samples[q].unwrap().value {
      parent[p] = parent[q];
    }
  }
  parent
}

/// A sample is canonical — the representative of its plateau — iff its
/// (post-canonicalization) parent is itself or sits at a different level.
pub(crate) fn is_canonical(id: usize, samples: &[Option<Sample>], canon: &[Option<usize>]) -> bool {
  let par = canon[id].expect("canonical queried on an unprocessed sample");
  par == id || samples[par].unwrap().value != samples[id].unwrap().value
}

#[cfg(test)]
#[path = "merge_test.rs"]
mod merge_test;
