// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in `application::port`.
//!
//! # Available Adapters
//!
//! - [`http_viewer`]: Preview content loading over HTTP (implements [`ContentViewer`])
//!
//! [`ContentViewer`]: crate::application::port::ContentViewer

pub mod http_viewer;

pub use http_viewer::{HttpContentViewer, UnavailableViewer};
