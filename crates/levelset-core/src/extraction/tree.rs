//! Recovers level-line nesting from the row-intersection log by a
//! bracket-matching scan, the way [spec §4.3] describes: walk each row's
//! sorted crossings with a stack of currently-open lines, and whichever line
//! is on top of the stack when another line's first crossing is seen is that
//! line's parent.

use crate::types::{LLNode, LevelLine, LevelLineTree, Point, RowLog};

/// Builds the nesting forest over `lines` from the row log `extract_level_lines`
/// produced alongside them.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "extraction::build_tree"))]
pub fn build_tree(lines: &[LevelLine], row_log: &RowLog) -> LevelLineTree {
  let n = lines.len();
  let mut parent: Vec<Option<usize>> = vec![None; n];
  let mut assigned = vec![false; n];

  for row in row_log {
    let mut entries: Vec<(f64, usize)> = row.iter().copied().collect();
    entries.sort_by(|a, b| a.0.partial_cmp(&b.0).expect("row x-coordinates are finite"));

    let mut stack: Vec<usize> = Vec::new();
    for (_, line_idx) in entries {
      if stack.last() == Some(&line_idx) {
        stack.pop();
      } else {
        if !assigned[line_idx] {
          parent[line_idx] = stack.last().copied();
          assigned[line_idx] = true;
        }
        stack.push(line_idx);
      }
    }
  }

  let mut nodes: Vec<LLNode> = lines.iter().map(|line| LLNode { parent: None, children: Vec::new(), bounds: bounds_of(line) }).collect();
  for (i, p) in parent.into_iter().enumerate() {
    nodes[i].parent = p;
  }
  for i in 0..n {
    if let Some(p) = nodes[i].parent {
      nodes[p].children.push(i);
    }
  }
  LevelLineTree { nodes }
}

fn bounds_of(line: &LevelLine) -> (Point, Point) {
  let first = line.polyline.first().copied().unwrap_or(Point::new(0.0, 0.0));
  let mut min = first;
  let mut max = first;
  for &p in &line.polyline {
    min.x = min.x.min(p.x);
    min.y = min.y.min(p.y);
    max.x = max.x.max(p.x);
    max.y = max.y.max(p.y);
  }
  (min, max)
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;
