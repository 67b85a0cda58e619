// SPDX-License-Identifier: MPL-2.0
//! Test helpers for float comparisons.
//!
//! Scale factors and carousel placements are all `f32` and come out of
//! trigonometry, so tests compare them with `approx` instead of `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-6;

/// Tolerance for placement values derived from `sin`/`cos` of degrees.
pub const PLACEMENT_EPSILON: f32 = 1e-3;
