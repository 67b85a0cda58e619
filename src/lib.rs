// SPDX-License-Identifier: MPL-2.0
//! `iced_mockup` previews a web page inside phone, tablet, laptop and desktop
//! mockups, built with the Iced GUI framework.
//!
//! Devices are shown either as a filterable grid or as a three-device
//! carousel. Each visible device owns a preview whose content is fetched
//! through the [`application::port::ContentViewer`] port.

#![doc(html_root_url = "https://docs.rs/iced_mockup/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod layout;
pub mod logging;
pub mod preview;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
