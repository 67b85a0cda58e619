// SPDX-License-Identifier: MPL-2.0
//! Render scale for device mockups.
//!
//! Every preview is drawn at a uniform scale chosen so the whole device
//! footprint (screen plus bezel) fits a target box. The grid, fullscreen
//! and carousel views only differ in the box they ask for.

use crate::domain::device::{DeviceDescriptor, Orientation};
use iced::Size;

/// Lowest scale ever returned, so a tiny target never collapses a mockup.
pub const MIN_SCALE: f32 = 0.1;

/// Horizontal space reserved around each grid card.
pub const GRID_CARD_GUTTER: f32 = 24.0;

/// Margin kept free around fullscreen and lightbox previews.
pub const OVERLAY_MARGIN: f32 = 96.0;

/// Scale that fits the device footprint into `target`, capped by `max_scale`
/// and floored at [`MIN_SCALE`].
///
/// Device dimensions are positive by catalog invariant.
#[must_use]
pub fn fit_scale(
    device: &DeviceDescriptor,
    orientation: Orientation,
    target: Size,
    max_scale: f32,
) -> f32 {
    let (width, height) = device.footprint(orientation);
    let scale = (target.width / width as f32)
        .min(target.height / height as f32)
        .min(max_scale);

    // `max` also maps a NaN from a degenerate target to the floor.
    scale.max(MIN_SCALE)
}

/// Number of grid columns that fit the viewport width.
#[must_use]
pub fn grid_columns(viewport_width: f32, card_width: f32) -> usize {
    let slot = card_width + GRID_CARD_GUTTER;
    if slot <= 0.0 {
        return 1;
    }
    ((viewport_width / slot).floor() as usize).max(1)
}

/// Target box for one grid card.
///
/// Cards widen to share the viewport evenly but never shrink below the
/// configured card width.
#[must_use]
pub fn grid_card_box(viewport: Size, card: Size) -> Size {
    let columns = grid_columns(viewport.width, card.width);
    let available = viewport.width / columns as f32 - GRID_CARD_GUTTER;
    Size::new(available.max(card.width), card.height)
}

/// Target box for a device shown on its own (fullscreen or lightbox).
#[must_use]
pub fn overlay_box(viewport: Size) -> Size {
    Size::new(
        (viewport.width - 2.0 * OVERLAY_MARGIN).max(0.0),
        (viewport.height - 2.0 * OVERLAY_MARGIN).max(0.0),
    )
}
