// SPDX-License-Identifier: MPL-2.0
//! Carousel placement.
//!
//! Three slots sit 120° apart on a circle. A global rotation angle turns the
//! circle; each slot's placement is re-derived from `(slot, angle)` alone,
//! so there is no animation state to keep in sync.

use std::f32::consts::PI;

/// Angular distance between two slots, and the step of one rotation event.
pub const SLOT_STEP_DEGREES: f32 = 120.0;

/// Number of carousel slots.
pub const SLOT_COUNT: usize = 3;

/// Lateral radius of the circle.
pub const RADIUS: f32 = 280.0;

/// Depth of the circle; the front slot sits at `z = 0`.
pub const DEPTH: f32 = 150.0;

/// Fraction of the slot angle turned back toward the viewer.
pub const FACING_FACTOR: f32 = 0.3;

pub const SCALE_BASE: f32 = 0.7;
pub const SCALE_RANGE: f32 = 0.2;
pub const OPACITY_BASE: f32 = 0.5;
pub const OPACITY_RANGE: f32 = 0.25;

/// Placement of one slot for a given rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Lateral offset from the carousel center.
    pub x: f32,
    /// Depth offset, `0` at the front and negative behind it.
    pub z: f32,
    /// Rotation around the vertical axis, in degrees.
    pub rotate_y: f32,
    pub scale: f32,
    pub opacity: f32,
    /// Draw order, front-most highest.
    pub stack_order: i32,
}

/// Normalizes an angle in degrees into `[0, 360)`.
#[must_use]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Computes the placement of `slot` when the carousel is turned by `rotation` degrees.
///
/// `rotation` may be any finite value, negative or beyond one turn.
#[must_use]
pub fn place(slot: usize, rotation: f32) -> Placement {
    let base = slot as f32 * SLOT_STEP_DEGREES;
    // Reduce both terms first so large accumulated angles keep their precision.
    let current = normalize_degrees(base - normalize_degrees(rotation));
    let radians = current * PI / 180.0;
    let (sin, cos) = radians.sin_cos();
    let nearness = cos + 1.0;

    Placement {
        x: sin * RADIUS,
        z: cos * DEPTH - DEPTH,
        rotate_y: -current * FACING_FACTOR,
        scale: SCALE_BASE + nearness * SCALE_RANGE,
        opacity: OPACITY_BASE + nearness * OPACITY_RANGE,
        stack_order: (nearness * 10.0).round() as i32,
    }
}

/// Slot indices sorted back to front, ready for drawing in order.
#[must_use]
pub fn draw_order(rotation: f32) -> [usize; SLOT_COUNT] {
    let mut slots = [0, 1, 2];
    slots.sort_by_key(|&slot| place(slot, rotation).stack_order);
    slots
}

/// Slot currently closest to the viewer.
#[must_use]
pub fn front_slot(rotation: f32) -> usize {
    draw_order(rotation)[SLOT_COUNT - 1]
}

/// Horizontal squeeze approximating the facing rotation on a flat surface.
#[must_use]
pub fn perspective_squeeze(placement: &Placement) -> f32 {
    placement.rotate_y.to_radians().cos().abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON, PLACEMENT_EPSILON as TOLERANCE};

    fn assert_placement_eq(a: Placement, b: Placement) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = TOLERANCE);
        assert_abs_diff_eq!(a.z, b.z, epsilon = TOLERANCE);
        assert_abs_diff_eq!(a.rotate_y, b.rotate_y, epsilon = TOLERANCE);
        assert_abs_diff_eq!(a.scale, b.scale, epsilon = TOLERANCE);
        assert_abs_diff_eq!(a.opacity, b.opacity, epsilon = TOLERANCE);
        assert_eq!(a.stack_order, b.stack_order);
    }

    #[test]
    fn front_slot_is_largest_and_undisplaced() {
        let front = place(0, 0.0);
        assert_abs_diff_eq!(front.x, 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(front.z, 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(front.scale, 1.1, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(front.opacity, 1.0, epsilon = F32_EPSILON);
        assert_eq!(front.stack_order, 20);
    }

    #[test]
    fn other_slots_recede() {
        let front = place(0, 0.0);
        for slot in 1..SLOT_COUNT {
            let other = place(slot, 0.0);
            assert!(other.z < 0.0);
            assert!(other.scale < front.scale);
            assert!(other.stack_order < front.stack_order);
        }
    }

    #[test]
    fn side_slots_mirror_each_other() {
        let right = place(1, 0.0);
        let left = place(2, 0.0);
        assert_abs_diff_eq!(right.x, -left.x, epsilon = TOLERANCE);
        assert_abs_diff_eq!(right.z, left.z, epsilon = TOLERANCE);
    }

    #[test]
    fn opacity_stays_in_range_for_any_angle() {
        let mut angle = -1080.0;
        while angle <= 1080.0 {
            for slot in 0..SLOT_COUNT {
                let opacity = place(slot, angle).opacity;
                assert!(opacity >= OPACITY_BASE - F32_EPSILON);
                assert!(opacity <= OPACITY_BASE + 2.0 * OPACITY_RANGE + F32_EPSILON);
            }
            angle += 7.5;
        }
    }

    #[test]
    fn placement_is_periodic_over_a_full_turn() {
        for angle in [-725.0, -360.0, -45.0, 0.0, 37.0, 359.0, 1234.5] {
            for slot in 0..SLOT_COUNT {
                assert_placement_eq(place(slot, angle), place(slot, angle + 360.0));
            }
        }
    }

    #[test]
    fn three_advances_return_every_slot_home() {
        let start = 40.0;
        let mut angle = start;
        for _ in 0..3 {
            angle += SLOT_STEP_DEGREES;
        }
        for slot in 0..SLOT_COUNT {
            assert_placement_eq(place(slot, start), place(slot, angle));
        }
    }

    #[test]
    fn one_advance_moves_each_slot_into_its_predecessor_position() {
        for slot in 0..SLOT_COUNT {
            let next = (slot + 1) % SLOT_COUNT;
            assert_placement_eq(place(next, SLOT_STEP_DEGREES), place(slot, 0.0));
        }
    }

    #[test]
    fn normalize_handles_negative_angles() {
        assert_abs_diff_eq!(normalize_degrees(-120.0), 240.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(normalize_degrees(720.0), 0.0, epsilon = F32_EPSILON);
        assert!(normalize_degrees(-1e-9) < 360.0);
    }

    #[test]
    fn front_slot_follows_rotation() {
        assert_eq!(front_slot(0.0), 0);
        assert_eq!(front_slot(SLOT_STEP_DEGREES), 1);
        assert_eq!(front_slot(2.0 * SLOT_STEP_DEGREES), 2);
    }

    #[test]
    fn squeeze_is_full_width_when_facing_viewer() {
        assert_abs_diff_eq!(perspective_squeeze(&place(0, 0.0)), 1.0, epsilon = F32_EPSILON);
        assert!(perspective_squeeze(&place(1, 0.0)) < 1.0);
    }
}
