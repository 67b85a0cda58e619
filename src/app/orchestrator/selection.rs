// SPDX-License-Identifier: MPL-2.0
//! The device chosen for each carousel category.

use crate::config::CarouselConfig;
use crate::domain::device::{catalog, CarouselCategory, DeviceDescriptor, DeviceId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Indexed by [`CarouselCategory::slot_index`].
    devices: [DeviceId; 3],
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            devices: CarouselCategory::ALL
                .map(|category| catalog::default_for_category(category).id()),
        }
    }
}

impl Selection {
    /// Initial selection from the `[carousel]` config section.
    ///
    /// Unknown names, and names of devices that do not fit the category,
    /// fall back to the category default.
    #[must_use]
    pub fn from_config(config: &CarouselConfig) -> Self {
        let mut selection = Self::default();
        let configured = [
            (CarouselCategory::Phone, config.phone.as_deref()),
            (CarouselCategory::Desktop, config.desktop.as_deref()),
            (CarouselCategory::Tablet, config.tablet.as_deref()),
        ];
        for (category, name) in configured {
            let Some(name) = name else { continue };
            let applied =
                catalog::find_by_name(name).and_then(|device| selection.set(category, device));
            if applied.is_none() {
                log::warn!("ignoring carousel {category:?} device '{name}'");
            }
        }
        selection
    }

    #[must_use]
    pub fn get(&self, category: CarouselCategory) -> DeviceId {
        self.devices[category.slot_index()]
    }

    /// Selects `device` for `category`. Returns the replaced device, or
    /// `None` when the device does not fit the category.
    pub fn set(
        &mut self,
        category: CarouselCategory,
        device: &DeviceDescriptor,
    ) -> Option<DeviceId> {
        if !category.accepts(device.form_factor) {
            return None;
        }
        let slot = &mut self.devices[category.slot_index()];
        Some(std::mem::replace(slot, device.id()))
    }

    /// Selected devices in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (CarouselCategory, DeviceId)> + '_ {
        CarouselCategory::ALL
            .into_iter()
            .map(|category| (category, self.get(category)))
    }

    #[must_use]
    pub fn contains(&self, device: DeviceId) -> bool {
        self.devices.contains(&device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::device::FormFactor;

    #[test]
    fn default_selection_fits_every_category() {
        let selection = Selection::default();
        for (category, id) in selection.iter() {
            let device = catalog::find(id).expect("selected device exists");
            assert!(category.accepts(device.form_factor));
        }
    }

    #[test]
    fn mismatching_device_is_refused() {
        let mut selection = Selection::default();
        let tablet = catalog::filtered(Some(FormFactor::Tablet)).next().unwrap();
        assert_eq!(selection.set(CarouselCategory::Phone, tablet), None);
        assert_eq!(selection, Selection::default());
    }

    #[test]
    fn laptops_fit_the_desktop_slot() {
        let mut selection = Selection::default();
        let laptop = catalog::filtered(Some(FormFactor::Laptop)).last().unwrap();
        assert!(selection.set(CarouselCategory::Desktop, laptop).is_some());
        assert_eq!(selection.get(CarouselCategory::Desktop), laptop.id());
    }

    #[test]
    fn config_names_are_resolved_case_insensitively() {
        let config = CarouselConfig {
            phone: Some("pixel 8".into()),
            tablet: Some("Pixel 8".into()),
            desktop: Some("No Such Device".into()),
            ..CarouselConfig::default()
        };
        let selection = Selection::from_config(&config);
        assert_eq!(selection.get(CarouselCategory::Phone).as_str(), "Pixel 8");
        let defaults = Selection::default();
        assert_eq!(
            selection.get(CarouselCategory::Tablet),
            defaults.get(CarouselCategory::Tablet)
        );
        assert_eq!(
            selection.get(CarouselCategory::Desktop),
            defaults.get(CarouselCategory::Desktop)
        );
    }
}
