// SPDX-License-Identifier: MPL-2.0
//! Pure geometry used by the views.
//!
//! - [`scale`]: fitting a device into a bounding box
//! - [`carousel`]: slot placement on the rotating stage

pub mod carousel;
pub mod scale;
