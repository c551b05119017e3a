use super::*;

#[test]
fn seed_border_with_median_leaves_interior_untouched() {
  #[rustfmt::skip]
  let mut image = vec![
    9, 9, 9, 9,
    9, 1, 2, 9,
    9, 3, 4, 9,
    9, 9, 9, 9,
  ];
  seed_border_with_median(&mut image, 4, 4);
  assert_eq!(image[1 * 4 + 1], 1);
  assert_eq!(image[1 * 4 + 2], 2);
  assert_eq!(image[2 * 4 + 1], 3);
  assert_eq!(image[2 * 4 + 2], 4);
  assert!(image[0..4].iter().all(|&v| v == 9));
}

#[test]
fn seed_border_with_median_uses_border_median_not_whole_image() {
  #[rustfmt::skip]
  let mut image = vec![
    0, 0, 0,
    0, 255, 0,
    0, 0, 0,
  ];
  seed_border_with_median(&mut image, 3, 3);
  assert!(image[0..3].iter().all(|&v| v == 0), "border median is 0, the interior peak must not shift it");
  assert_eq!(image[1 * 3 + 1], 255);
}

#[test]
fn rasterize_produces_canvas_scaled_by_zoom() {
  let lines = vec![LevelLine { level: 5.0, kind: LineType::Max, polyline: vec![Point::new(1.0, 1.0), Point::new(2.0, 1.0), Point::new(2.0, 2.0), Point::new(1.0, 2.0)] }];
  let canvas = rasterize(&lines, 4, 4, 2);
  assert_eq!(canvas.width(), 8);
  assert_eq!(canvas.height(), 8);
  assert_eq!(*canvas.get_pixel(2, 2), Rgb([255, 0, 0]));
}

#[test]
fn f32_png_round_trips_bitwise() {
  let data = vec![0.0_f32, 1.5, -3.25, f32::MAX, f32::MIN_POSITIVE, 9.0];
  let img = encode_f32_png(&data, 3, 2);
  let back = decode_f32_png(&img);
  assert_eq!(data, back);
}

#[test]
fn rasterize_colors_each_line_kind() {
  let make = |kind| LevelLine { level: 1.0, kind, polyline: vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)] };
  let lines = vec![make(LineType::Regular), make(LineType::Min), make(LineType::Saddle), make(LineType::Max)];
  let canvas = rasterize(&lines, 3, 3, 1);
  assert_eq!(*canvas.get_pixel(0, 0), Rgb([255, 0, 0]), "later lines overdraw earlier ones sharing a pixel");
}
