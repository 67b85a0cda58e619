// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Preview**: Placeholder URL and load timeout
//! - **Grid**: Card box and scale ceiling
//! - **Carousel**: Auto-play behavior

use crate::layout::scale::MIN_SCALE;

// ==========================================================================
// Preview Defaults
// ==========================================================================

/// URL previewed before the user commits one.
pub const DEFAULT_URL: &str = "https://example.com";

/// Default time allowed for one preview load (in seconds).
pub const DEFAULT_LOAD_TIMEOUT_SECS: u32 = 15;

/// Minimum load timeout (in seconds).
pub const MIN_LOAD_TIMEOUT_SECS: u32 = 1;

/// Maximum load timeout (in seconds).
pub const MAX_LOAD_TIMEOUT_SECS: u32 = 120;

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Default width of the box each grid card fits its device into.
pub const DEFAULT_CARD_WIDTH: f32 = 320.0;

pub const MIN_CARD_WIDTH: f32 = 160.0;

pub const MAX_CARD_WIDTH: f32 = 1200.0;

/// Default height of the box each grid card fits its device into.
pub const DEFAULT_CARD_HEIGHT: f32 = 520.0;

pub const MIN_CARD_HEIGHT: f32 = 200.0;

pub const MAX_CARD_HEIGHT: f32 = 1600.0;

/// Default scale ceiling: never draw a device larger than its logical size.
pub const DEFAULT_MAX_SCALE: f32 = 1.0;

/// Highest accepted scale ceiling.
pub const MAX_MAX_SCALE: f32 = 4.0;

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Whether the carousel rotates on its own when shown.
pub const DEFAULT_AUTOPLAY: bool = true;

/// Default period between two automatic rotations (in milliseconds).
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 3000;

/// Minimum auto-play period (in milliseconds).
pub const MIN_AUTOPLAY_INTERVAL_MS: u64 = 500;

/// Maximum auto-play period (in milliseconds).
pub const MAX_AUTOPLAY_INTERVAL_MS: u64 = 60_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_LOAD_TIMEOUT_SECS > 0);
    assert!(DEFAULT_LOAD_TIMEOUT_SECS >= MIN_LOAD_TIMEOUT_SECS);
    assert!(DEFAULT_LOAD_TIMEOUT_SECS <= MAX_LOAD_TIMEOUT_SECS);

    assert!(MIN_CARD_WIDTH > 0.0);
    assert!(DEFAULT_CARD_WIDTH >= MIN_CARD_WIDTH);
    assert!(DEFAULT_CARD_WIDTH <= MAX_CARD_WIDTH);
    assert!(MIN_CARD_HEIGHT > 0.0);
    assert!(DEFAULT_CARD_HEIGHT >= MIN_CARD_HEIGHT);
    assert!(DEFAULT_CARD_HEIGHT <= MAX_CARD_HEIGHT);

    assert!(DEFAULT_MAX_SCALE >= MIN_SCALE);
    assert!(DEFAULT_MAX_SCALE <= MAX_MAX_SCALE);

    assert!(MIN_AUTOPLAY_INTERVAL_MS > 0);
    assert!(DEFAULT_AUTOPLAY_INTERVAL_MS >= MIN_AUTOPLAY_INTERVAL_MS);
    assert!(DEFAULT_AUTOPLAY_INTERVAL_MS <= MAX_AUTOPLAY_INTERVAL_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autoplay_interval_defaults_are_valid() {
        assert_eq!(DEFAULT_AUTOPLAY_INTERVAL_MS, 3000);
        assert!(DEFAULT_AUTOPLAY_INTERVAL_MS >= MIN_AUTOPLAY_INTERVAL_MS);
        assert!(DEFAULT_AUTOPLAY_INTERVAL_MS <= MAX_AUTOPLAY_INTERVAL_MS);
    }

    #[test]
    fn default_url_has_a_scheme() {
        assert!(DEFAULT_URL.starts_with("https://"));
    }
}
