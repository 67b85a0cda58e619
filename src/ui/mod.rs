// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views read the orchestrator state and emit orchestrator messages; they
//! hold no state of their own.
//!
//! # Layouts
//!
//! - [`grid`] - Every filtered device as a card
//! - [`carousel`] - Three devices on a rotating stage
//! - [`overlay`] - Fullscreen and lightbox views of one device
//!
//! # Shared Infrastructure
//!
//! - [`device_frame`] - Device mockup around a preview viewport
//! - [`toolbar`] - URL entry and layout controls
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod carousel;
pub mod design_tokens;
pub mod device_frame;
pub mod grid;
pub mod notifications;
pub mod overlay;
pub mod styles;
pub mod theming;
pub mod toolbar;
