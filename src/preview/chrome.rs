// SPDX-License-Identifier: MPL-2.0
//! Device chrome: what to draw around a preview and how big.
//!
//! Everything here is a pure function of the descriptor, the orientation and
//! the render scale, so views can rebuild it on every frame.

use crate::domain::device::{DeviceDescriptor, FormFactor, Orientation};

/// Decorations drawn on or around the device frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ornament {
    Notch,
    DynamicIsland,
    HomeButton,
    /// Front camera dot in the tablet bezel.
    CameraDot,
    /// Keyboard deck below a laptop screen.
    KeyboardDeck,
    /// Monitor stand below a desktop screen.
    Stand,
}

/// Decorations for a device in the given orientation.
///
/// The notch and dynamic island only exist in portrait; the home button
/// stays. Flags are not exclusive, every flag set on the descriptor is drawn.
#[must_use]
pub fn ornaments(device: &DeviceDescriptor, orientation: Orientation) -> Vec<Ornament> {
    let landscape = orientation == Orientation::Landscape && device.form_factor.rotates();
    let mut ornaments = Vec::new();

    if device.has_notch && !landscape {
        ornaments.push(Ornament::Notch);
    }
    if device.has_dynamic_island && !landscape {
        ornaments.push(Ornament::DynamicIsland);
    }
    if device.has_home_button {
        ornaments.push(Ornament::HomeButton);
    }

    match device.form_factor {
        FormFactor::Tablet if !device.has_home_button => ornaments.push(Ornament::CameraDot),
        FormFactor::Laptop => ornaments.push(Ornament::KeyboardDeck),
        FormFactor::Desktop => ornaments.push(Ornament::Stand),
        FormFactor::Phone | FormFactor::Tablet => {}
    }

    ornaments
}

/// Scaled metrics of one device frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Chrome {
    pub scale: f32,
    pub screen_width: f32,
    pub screen_height: f32,
    pub bezel: f32,
    pub radius: f32,
    pub landscape: bool,
    pub ornaments: Vec<Ornament>,
}

impl Chrome {
    #[must_use]
    pub fn new(device: &DeviceDescriptor, orientation: Orientation, scale: f32) -> Self {
        let (width, height) = device.screen_size(orientation);
        Self {
            scale,
            screen_width: width as f32 * scale,
            screen_height: height as f32 * scale,
            bezel: device.bezel_width as f32 * scale,
            radius: device.bezel_radius as f32 * scale,
            landscape: orientation == Orientation::Landscape && device.form_factor.rotates(),
            ornaments: ornaments(device, orientation),
        }
    }

    /// Outer width of the frame including bezel.
    #[must_use]
    pub fn frame_width(&self) -> f32 {
        self.screen_width + 2.0 * self.bezel
    }

    /// Outer height of the frame including bezel.
    #[must_use]
    pub fn frame_height(&self) -> f32 {
        self.screen_height + 2.0 * self.bezel
    }

    #[must_use]
    pub fn has(&self, ornament: Ornament) -> bool {
        self.ornaments.contains(&ornament)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::device::catalog;

    fn device(name: &str) -> &'static DeviceDescriptor {
        catalog::find_by_name(name).expect("device exists in catalog")
    }

    #[test]
    fn notch_only_in_portrait() {
        let phone = device("iPhone 14");
        assert!(ornaments(phone, Orientation::Portrait).contains(&Ornament::Notch));
        assert!(!ornaments(phone, Orientation::Landscape).contains(&Ornament::Notch));
    }

    #[test]
    fn dynamic_island_only_in_portrait() {
        let phone = device("iPhone 15 Pro");
        assert_eq!(
            ornaments(phone, Orientation::Portrait),
            vec![Ornament::DynamicIsland]
        );
        assert!(ornaments(phone, Orientation::Landscape).is_empty());
    }

    #[test]
    fn home_button_survives_rotation() {
        let phone = device("iPhone SE");
        assert!(ornaments(phone, Orientation::Landscape).contains(&Ornament::HomeButton));
    }

    #[test]
    fn laptop_notch_is_not_orientation_specific() {
        let laptop = device("MacBook Pro 16\"");
        let chrome = ornaments(laptop, Orientation::Landscape);
        assert!(chrome.contains(&Ornament::Notch));
        assert!(chrome.contains(&Ornament::KeyboardDeck));
    }

    #[test]
    fn multiple_flags_render_together() {
        let mut phone = *device("iPhone 14");
        phone.has_dynamic_island = true;
        phone.has_home_button = true;
        assert_eq!(ornaments(&phone, Orientation::Portrait).len(), 3);
    }

    #[test]
    fn chrome_scales_every_metric() {
        let phone = device("iPhone 14");
        let chrome = Chrome::new(phone, Orientation::Portrait, 0.5);
        assert_eq!(chrome.screen_width, 195.0);
        assert_eq!(chrome.screen_height, 422.0);
        assert_eq!(chrome.bezel, 6.0);
        assert_eq!(chrome.frame_width(), 207.0);
        assert!(!chrome.landscape);
    }

    #[test]
    fn chrome_reports_landscape_for_rotated_handhelds() {
        let tablet = device("iPad Air");
        let chrome = Chrome::new(tablet, Orientation::Landscape, 1.0);
        assert!(chrome.landscape);
        assert_eq!(chrome.screen_width, 1180.0);
        assert!(chrome.has(Ornament::CameraDot));
    }
}
