//! Quantization constants for grouping topologically simultaneous saddle crossings.
//!
//! Saddle levels are continuous rationals. To decide which saddle crossings are
//! "the same" level for the purpose of grouping them into a single traced line,
//! every saddle value is snapped onto a fixed grid of `Q` steps per gray level.
//!
//! # Headroom
//!
//! `Q` must leave three bits of margin between the finest quantization step and
//! the integer levels on either side of it, for an 8-bit image no wider than
//! [`MAX_WIDTH`] pixels. The margin comes from `23 - 8 - W_BITS`: 23 mantissa
//! bits of an `f32` accumulator, 8 bits of input depth, and `W_BITS` bits
//! reserved for the image width so that per-pixel rounding error never crosses
//! a quantization boundary.
//!
//! Supporting higher bit depths or wider images requires recomputing `Q` to
//! preserve this margin; it is not automatically derived from image dimensions
//! at runtime; see [`MAX_WIDTH`] and [`InvalidInput`](crate::error::CoreError).

/// Bits of image width reserved by the quantization margin.
pub const W_BITS: u32 = 6;

/// Quantization steps per unit gray level (`2^(23 - 8 - W_BITS)`).
pub const Q: i64 = 1 << (23 - 8 - W_BITS);

/// Size of one quantization step.
pub const DELTA: f64 = 1.0 / (Q as f64);

/// Largest image width this quantization margin was derived for.
pub const MAX_WIDTH: usize = 1 << W_BITS << 4; // 2^(6+4) = 1024

/// Smallest quantized index, keeping a quantized level strictly above the
/// integer level below it.
pub const MIN_QUANT_INDEX: i64 = 2;

/// Largest quantized index, keeping a quantized level strictly below the
/// integer level above it.
pub const MAX_QUANT_INDEX: i64 = Q - 2;

/// Below this magnitude, a hyperbola branch is treated as meeting its vertex
/// head-on rather than curving — only the vertex point is emitted.
pub const HYPERBOLA_FLAT_EPS: f64 = 1e-2;

/// Tolerance for "did this polyline return to its start" closure checks.
pub const CLOSURE_EPS: f64 = 1e-6;

/// Quantize a continuous saddle level to the shared grid, clamped strictly
/// between its two neighboring integer levels.
///
/// Two saddle values are "topologically simultaneous" iff they quantize to
/// the same index.
#[inline]
pub fn quantize_index(level: f64) -> i64 {
  let idx = (level * Q as f64).round() as i64;
  idx.clamp(MIN_QUANT_INDEX, MAX_QUANT_INDEX)
}

/// The quantized level value itself (the index converted back to a gray level).
#[inline]
pub fn quantize_level(level: f64) -> f64 {
  quantize_index(level) as f64 * DELTA
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
