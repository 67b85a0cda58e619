// SPDX-License-Identifier: MPL-2.0
//! Device descriptors and the vocabulary around them.
//!
//! A [`DeviceDescriptor`] is an immutable record describing one mockup:
//! its logical resolution, bezel metrics and decorative flags. Descriptors
//! live for the whole process in the static [`catalog`].

pub mod catalog;

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// FormFactor
// =============================================================================

/// Broad device category, used for grid filtering and chrome selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormFactor {
    Phone,
    Tablet,
    Laptop,
    Desktop,
}

impl FormFactor {
    /// All form factors, in display order.
    pub const ALL: [FormFactor; 4] = [
        FormFactor::Phone,
        FormFactor::Tablet,
        FormFactor::Laptop,
        FormFactor::Desktop,
    ];

    /// Whether the orientation toggle applies to this kind of device.
    ///
    /// Laptops and desktops are always drawn in their native landscape layout.
    #[must_use]
    pub fn rotates(self) -> bool {
        matches!(self, FormFactor::Phone | FormFactor::Tablet)
    }

    /// Returns the i18n key for the filter label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            FormFactor::Phone => "form-factor-phone",
            FormFactor::Tablet => "form-factor-tablet",
            FormFactor::Laptop => "form-factor-laptop",
            FormFactor::Desktop => "form-factor-desktop",
        }
    }
}

// =============================================================================
// Orientation
// =============================================================================

/// Orientation applied to handheld devices in grid mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Portrait => Orientation::Landscape,
            Orientation::Landscape => Orientation::Portrait,
        }
    }
}

// =============================================================================
// DeviceId
// =============================================================================

/// Stable key of a device: its unique catalog name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeviceId(&'static str);

impl DeviceId {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

// =============================================================================
// DeviceDescriptor
// =============================================================================

/// Static description of one device mockup.
///
/// `width` and `height` are logical pixels in the device's native
/// orientation (portrait for phones and tablets).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceDescriptor {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
    pub form_factor: FormFactor,
    pub bezel_width: u32,
    pub bezel_radius: u32,
    pub has_notch: bool,
    pub has_dynamic_island: bool,
    pub has_home_button: bool,
}

impl DeviceDescriptor {
    #[must_use]
    pub fn id(&self) -> DeviceId {
        DeviceId(self.name)
    }

    /// Screen size in logical pixels for the given orientation.
    #[must_use]
    pub fn screen_size(&self, orientation: Orientation) -> (u32, u32) {
        match orientation {
            Orientation::Landscape if self.form_factor.rotates() => (self.height, self.width),
            _ => (self.width, self.height),
        }
    }

    /// Outer footprint (screen plus bezel on every side) for the given orientation.
    #[must_use]
    pub fn footprint(&self, orientation: Orientation) -> (u32, u32) {
        let (width, height) = self.screen_size(orientation);
        (
            width + 2 * self.bezel_width,
            height + 2 * self.bezel_width,
        )
    }
}

impl fmt::Display for DeviceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

// =============================================================================
// CarouselCategory
// =============================================================================

/// The three fixed carousel roles, each holding one selected device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CarouselCategory {
    Phone,
    Desktop,
    Tablet,
}

impl CarouselCategory {
    /// Categories ordered by slot index.
    pub const ALL: [CarouselCategory; 3] = [
        CarouselCategory::Phone,
        CarouselCategory::Desktop,
        CarouselCategory::Tablet,
    ];

    /// Fixed slot assignment: phone in front, desktop in the middle, tablet at the back.
    #[must_use]
    pub fn slot_index(self) -> usize {
        match self {
            CarouselCategory::Phone => 0,
            CarouselCategory::Desktop => 1,
            CarouselCategory::Tablet => 2,
        }
    }

    /// Whether a device of the given form factor may fill this slot.
    #[must_use]
    pub fn accepts(self, form_factor: FormFactor) -> bool {
        match self {
            CarouselCategory::Phone => form_factor == FormFactor::Phone,
            CarouselCategory::Tablet => form_factor == FormFactor::Tablet,
            CarouselCategory::Desktop => {
                matches!(form_factor, FormFactor::Laptop | FormFactor::Desktop)
            }
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            CarouselCategory::Phone => "carousel-category-phone",
            CarouselCategory::Desktop => "carousel-category-desktop",
            CarouselCategory::Tablet => "carousel-category-tablet",
        }
    }
}
