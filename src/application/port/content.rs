// SPDX-License-Identifier: MPL-2.0
//! Embedded-content viewer port.
//!
//! A [`ContentViewer`] loads one URL for one preview in an isolated,
//! permission-scoped session and reports a single [`LoadSignal`]. The
//! application never looks at the content itself beyond the optional
//! [`SurfaceInspection`], which is only available when the permission
//! profile grants same-origin access.

use crate::domain::device::{DeviceId, FormFactor};
use futures_util::future::BoxFuture;
use thiserror::Error;

// =============================================================================
// PermissionProfile
// =============================================================================

/// Capabilities granted to embedded content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct PermissionProfile {
    pub allow_same_origin: bool,
    pub allow_scripts: bool,
    pub allow_forms: bool,
    pub allow_popups: bool,
}

impl PermissionProfile {
    /// Profile used for every preview: same-origin access, scripts, forms and pop-ups.
    pub const PREVIEW: PermissionProfile = PermissionProfile {
        allow_same_origin: true,
        allow_scripts: true,
        allow_forms: true,
        allow_popups: true,
    };
}

impl Default for PermissionProfile {
    fn default() -> Self {
        Self::PREVIEW
    }
}

// =============================================================================
// LoadRequest
// =============================================================================

/// One load of one preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub device: DeviceId,
    pub form_factor: FormFactor,
    pub url: String,
    /// Load generation of the issuing preview; echoed back with the result.
    pub generation: u64,
    pub profile: PermissionProfile,
}

// =============================================================================
// Signals
// =============================================================================

/// Inspection refused by the viewer, e.g. for an opaque origin.
///
/// Never shown to the user: a denied inspection means "no signal".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("content surface cannot be inspected")]
pub struct InspectionDenied;

/// What a post-load inspection saw on the rendered surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceInspection {
    NonEmpty,
    Empty,
}

/// Summary of successfully loaded content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedContent {
    /// URL after redirects.
    pub final_url: String,
    pub status: u16,
    pub bytes: usize,
    pub title: Option<String>,
    pub surface: Result<SurfaceInspection, InspectionDenied>,
}

/// Failure reported by the viewer's error event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("server answered with HTTP {0}")]
    Status(u16),

    #[error("load timed out")]
    Timeout,
}

impl LoadError {
    /// Returns the i18n key for the technical detail line.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            LoadError::Transport(_) => "load-error-transport",
            LoadError::Status(_) => "load-error-status",
            LoadError::Timeout => "load-error-timeout",
        }
    }
}

/// Outcome of one load: the viewer's success or error event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSignal {
    Loaded(LoadedContent),
    Error(LoadError),
}

// =============================================================================
// ContentViewer
// =============================================================================

/// Loads content for previews.
///
/// Implementations must be cheap to share: the app keeps one behind an
/// `Arc` and calls [`ContentViewer::load`] once per preview load. Loads are
/// independent; completion order is unspecified.
pub trait ContentViewer: Send + Sync {
    fn load(&self, request: LoadRequest) -> BoxFuture<'static, LoadSignal>;
}
