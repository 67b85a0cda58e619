// SPDX-License-Identifier: MPL-2.0
//! Domain layer - plain data types shared by every other layer.
//!
//! # Modules
//!
//! - [`device`]: Device descriptors and the static catalog
//!   ([`DeviceDescriptor`](device::DeviceDescriptor), [`FormFactor`](device::FormFactor))
//! - [`layout_mode`]: Grid or carousel arrangement ([`LayoutMode`](layout_mode::LayoutMode))

pub mod device;
pub mod layout_mode;

pub use layout_mode::LayoutMode;
