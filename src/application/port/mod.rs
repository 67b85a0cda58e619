// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! Infrastructure adapters implement these traits; the orchestrator and the
//! preview lifecycle only ever see the port types.
//!
//! # Available Ports
//!
//! - [`content`]: Embedded-content loading for previews
//!
//! # Example
//!
//! ```ignore
//! use iced_mockup::application::port::{ContentViewer, LoadRequest, LoadSignal};
//!
//! async fn is_reachable(viewer: &impl ContentViewer, request: LoadRequest) -> bool {
//!     matches!(viewer.load(request).await, LoadSignal::Loaded(_))
//! }
//! ```

pub mod content;

pub use content::{
    ContentViewer, InspectionDenied, LoadError, LoadRequest, LoadSignal, LoadedContent,
    PermissionProfile, SurfaceInspection,
};
