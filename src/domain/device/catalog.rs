// SPDX-License-Identifier: MPL-2.0
//! Static device catalog.

use super::{CarouselCategory, DeviceDescriptor, DeviceId, FormFactor};

const fn phone(
    name: &'static str,
    width: u32,
    height: u32,
    has_notch: bool,
    has_dynamic_island: bool,
    has_home_button: bool,
) -> DeviceDescriptor {
    DeviceDescriptor {
        name,
        width,
        height,
        form_factor: FormFactor::Phone,
        bezel_width: if has_home_button { 16 } else { 12 },
        bezel_radius: if has_home_button { 36 } else { 52 },
        has_notch,
        has_dynamic_island,
        has_home_button,
    }
}

const fn tablet(
    name: &'static str,
    width: u32,
    height: u32,
    has_home_button: bool,
) -> DeviceDescriptor {
    DeviceDescriptor {
        name,
        width,
        height,
        form_factor: FormFactor::Tablet,
        bezel_width: if has_home_button { 28 } else { 18 },
        bezel_radius: 32,
        has_notch: false,
        has_dynamic_island: false,
        has_home_button,
    }
}

const fn computer(
    name: &'static str,
    width: u32,
    height: u32,
    form_factor: FormFactor,
    has_notch: bool,
) -> DeviceDescriptor {
    DeviceDescriptor {
        name,
        width,
        height,
        form_factor,
        bezel_width: match form_factor {
            FormFactor::Laptop => 14,
            _ => 20,
        },
        bezel_radius: match form_factor {
            FormFactor::Laptop => 16,
            _ => 12,
        },
        has_notch,
        has_dynamic_island: false,
        has_home_button: false,
    }
}

/// Every device known to the application, in display order.
pub static DEVICES: &[DeviceDescriptor] = &[
    phone("iPhone 15 Pro", 393, 852, false, true, false),
    phone("iPhone 14", 390, 844, true, false, false),
    phone("iPhone SE", 375, 667, false, false, true),
    phone("Pixel 8", 412, 915, false, false, false),
    phone("Galaxy S24", 360, 780, false, false, false),
    tablet("iPad Pro 12.9\"", 1024, 1366, false),
    tablet("iPad Air", 820, 1180, false),
    tablet("iPad Mini", 744, 1133, false),
    tablet("iPad 9th gen", 810, 1080, true),
    tablet("Galaxy Tab S9", 800, 1280, false),
    computer("MacBook Air 13\"", 1470, 956, FormFactor::Laptop, true),
    computer("MacBook Pro 16\"", 1728, 1117, FormFactor::Laptop, true),
    computer("Surface Laptop 5", 1504, 1003, FormFactor::Laptop, false),
    computer("iMac 24\"", 2240, 1260, FormFactor::Desktop, false),
    computer("Desktop 1080p", 1920, 1080, FormFactor::Desktop, false),
    computer("Desktop 1440p", 2560, 1440, FormFactor::Desktop, false),
];

/// Returns the whole catalog.
#[must_use]
pub fn all() -> &'static [DeviceDescriptor] {
    DEVICES
}

/// Looks up a device by its stable key.
#[must_use]
pub fn find(id: DeviceId) -> Option<&'static DeviceDescriptor> {
    DEVICES.iter().find(|device| device.name == id.as_str())
}

/// Looks up a device by display name (used for CLI and config values).
#[must_use]
pub fn find_by_name(name: &str) -> Option<&'static DeviceDescriptor> {
    DEVICES.iter().find(|device| device.name.eq_ignore_ascii_case(name))
}

/// Devices matching the grid filter; `None` shows everything.
pub fn filtered(filter: Option<FormFactor>) -> impl Iterator<Item = &'static DeviceDescriptor> {
    DEVICES
        .iter()
        .filter(move |device| filter.is_none_or(|form_factor| device.form_factor == form_factor))
}

/// Devices eligible for a carousel slot.
pub fn for_category(
    category: CarouselCategory,
) -> impl Iterator<Item = &'static DeviceDescriptor> {
    DEVICES
        .iter()
        .filter(move |device| category.accepts(device.form_factor))
}

/// Default carousel selection for a category: the first eligible device.
#[must_use]
pub fn default_for_category(category: CarouselCategory) -> &'static DeviceDescriptor {
    // The catalog holds at least one device per category (checked in tests).
    for_category(category).next().unwrap_or(&DEVICES[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_device_has_positive_dimensions() {
        for device in all() {
            assert!(device.width > 0, "{} has zero width", device.name);
            assert!(device.height > 0, "{} has zero height", device.name);
        }
    }

    #[test]
    fn device_names_are_unique() {
        let names: HashSet<_> = all().iter().map(|device| device.name).collect();
        assert_eq!(names.len(), all().len());
    }

    #[test]
    fn every_carousel_category_has_a_device() {
        for category in CarouselCategory::ALL {
            let device = default_for_category(category);
            assert!(category.accepts(device.form_factor));
        }
    }

    #[test]
    fn filter_none_returns_everything() {
        assert_eq!(filtered(None).count(), all().len());
    }

    #[test]
    fn filter_by_form_factor_only_returns_that_kind() {
        for form_factor in FormFactor::ALL {
            let devices: Vec<_> = filtered(Some(form_factor)).collect();
            assert!(!devices.is_empty());
            assert!(devices.iter().all(|d| d.form_factor == form_factor));
        }
    }

    #[test]
    fn find_resolves_ids_and_names() {
        let device = &all()[0];
        assert_eq!(find(device.id()), Some(device));
        assert_eq!(find_by_name("pixel 8").map(|d| d.name), Some("Pixel 8"));
        assert!(find(DeviceId::new("Nokia 3310")).is_none());
    }
}
