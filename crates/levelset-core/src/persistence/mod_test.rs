use super::*;

#[test]
fn rejects_too_small_image() {
  let err = persistence(&[0.0, 1.0], 1, 2).unwrap_err();
  assert!(matches!(err, CoreError::InvalidInput { .. }));
}

#[test]
fn rejects_mismatched_length() {
  let err = persistence(&[0.0, 1.0, 2.0], 2, 2).unwrap_err();
  assert!(matches!(err, CoreError::InvalidInput { .. }));
}

#[test]
fn rejects_too_wide_image() {
  let width = MAX_WIDTH + 1;
  let image = vec![0.0_f32; width * 2];
  let err = persistence(&image, width, 2).unwrap_err();
  assert!(matches!(err, CoreError::TooLarge { .. }));
}

#[test]
fn constant_image_has_zero_persistence_everywhere() {
  let image = [5.0_f32; 9];
  let out = persistence(&image, 3, 3).unwrap();
  assert!(out.iter().all(|&v| v == 0.0));
}

#[test]
fn monotone_ramp_is_a_single_unbranched_chain() {
  // A strict ramp has no sibling branches anywhere in its merge tree: each
  // column is swallowed whole by the next, so every column except the root
  // (the highest) belongs to the same one thread reaching all the way to
  // the global max, and reports that thread's full span.
  #[rustfmt::skip]
  let image = [
    0.0, 1.0, 2.0,
    0.0, 1.0, 2.0,
    0.0, 1.0, 2.0,
  ];
  let out = persistence(&image, 3, 3).unwrap();
  assert_eq!(out, vec![2.0, 2.0, 0.0, 2.0, 2.0, 0.0, 2.0, 2.0, 0.0]);
}

#[test]
fn single_interior_maximum_is_full_range_for_min_persistence() {
  // persistence() here is the min-persistence orientation: leaves are
  // minima. The flat floor is the image's one regional minimum and merges
  // last into the peak, so it carries the full drop; the peak is the tree's
  // root (the background, in this orientation) and reports 0.
  #[rustfmt::skip]
  let image = [
    0.0, 0.0, 0.0,
    0.0, 9.0, 0.0,
    0.0, 0.0, 0.0,
  ];
  let out = persistence(&image, 3, 3).unwrap();
  assert_eq!(out[4], 0.0, "the center peak is the root of the min-persistence tree");
  for (i, &v) in out.iter().enumerate() {
    if i != 4 {
      assert_eq!(v, 9.0, "the floor is the one regional minimum, absorbed last into the peak");
    }
  }
}

#[test]
fn single_interior_maximum_is_full_range_for_max_persistence() {
  #[rustfmt::skip]
  let image = [
    0.0, 0.0, 0.0,
    0.0, 9.0, 0.0,
    0.0, 0.0, 0.0,
  ];
  let inverted: Vec<f32> = image.iter().map(|&v| 255.0 - v).collect();
  let out = persistence(&inverted, 3, 3).unwrap();
  assert_eq!(out[4], 9.0, "the lone interior peak is the one component with a real drop to the border floor");
  for (i, &v) in out.iter().enumerate() {
    if i != 4 {
      assert_eq!(v, 0.0);
    }
  }
}

#[test]
fn nested_maxima_scenario() {
  // A peak inside a ring inside a floor: the inner peak is always an
  // isolated leaf, so regardless of how the (multi-pixel, same-valued) ring
  // resolves into tree nodes, the peak survives all the way to the root and
  // must reach the image's full dynamic range.
  #[rustfmt::skip]
  let image = [
    0.0, 0.0, 0.0, 0.0,
    0.0, 5.0, 5.0, 0.0,
    0.0, 5.0, 9.0, 0.0,
    0.0, 0.0, 0.0, 0.0,
  ];
  let inverted: Vec<f32> = image.iter().map(|&v| 255.0 - v).collect();
  let out = persistence(&inverted, 4, 4).unwrap();
  let range = 9.0_f32;
  assert_eq!(out[2 * 4 + 2], range, "the inner peak reaches the full dynamic range");
  assert!(out.iter().all(|&v| (0.0..=range).contains(&v)));
}

#[test]
fn two_isolated_peaks_persist_independently() {
  // Two single-pixel peaks of different depth (3 and 7) merging directly
  // into the same floor. The deeper one is the global extremum and must
  // reach the full dynamic range; the shallower one is absorbed by it and
  // must display its own depth (3), not the deeper peak's.
  #[rustfmt::skip]
  let image = [
    0.0, 0.0, 0.0, 0.0,
    0.0, 3.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 7.0,
    0.0, 0.0, 0.0, 0.0,
  ];
  let inverted: Vec<f32> = image.iter().map(|&v| 255.0 - v).collect();
  let out = persistence(&inverted, 4, 4).unwrap();
  let range = 7.0_f32;
  assert_eq!(out[1 * 4 + 1], 3.0, "the shallower peak reports its own depth, not the deeper one's");
  assert_eq!(out[2 * 4 + 3], range, "the deeper peak is the global extremum");
  assert!(out.iter().all(|&v| (0.0..=range).contains(&v)));
}

#[test]
fn checkerboard_saddle_connects_the_whole_2x2_image() {
  // [0,9 / 9,0]: the two 0-corners are distinct minima, the two 9-corners
  // are distinct maxima, and the single bilinear saddle (value 4.5) is the
  // only thing that ever connects them, at the very last merge event. In
  // min-persistence, the two minima (the 0-corners) are what survive down
  // to that merge and get the full range; the two maxima are the tree's
  // root/background and get 0. Max-persistence is the mirror image.
  #[rustfmt::skip]
  let image = [
    0.0, 9.0,
    9.0, 0.0,
  ];
  let min_out = persistence(&image, 2, 2).unwrap();
  let max_in: Vec<f32> = image.iter().map(|&v| 255.0 - v).collect();
  let max_out = persistence(&max_in, 2, 2).unwrap();
  assert_eq!(min_out, vec![9.0, 0.0, 0.0, 9.0], "{min_out:?}");
  assert_eq!(max_out, vec![0.0, 9.0, 9.0, 0.0], "{max_out:?}");
}

#[test]
fn round_trip_is_bitwise_deterministic() {
  #[rustfmt::skip]
  let image = [
    0.0, 2.0, 1.0, 0.0,
    1.0, 5.0, 5.0, 1.0,
    0.0, 5.0, 9.0, 0.0,
    2.0, 0.0, 3.0, 1.0,
  ];
  let first = persistence(&image, 4, 4).unwrap();
  let second = persistence(&image, 4, 4).unwrap();
  assert_eq!(first, second);
}

#[test]
fn persistence_never_exceeds_the_dynamic_range() {
  #[rustfmt::skip]
  let image = [
    0.0, 2.0, 1.0, 0.0,
    1.0, 5.0, 5.0, 1.0,
    0.0, 5.0, 9.0, 0.0,
    2.0, 0.0, 3.0, 1.0,
  ];
  let range = image.iter().cloned().fold(f32::MIN, f32::max) - image.iter().cloned().fold(f32::MAX, f32::min);
  let range = range.abs();
  let out = persistence(&image, 4, 4).unwrap();
  assert!(out.iter().all(|&v| (0.0..=range).contains(&v)));
}
