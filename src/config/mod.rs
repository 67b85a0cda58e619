// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading user
//! preferences from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language, theme mode and starting layout
//! - `[preview]` - Placeholder URL and load timeout
//! - `[grid]` - Orientation, card box and scale ceiling
//! - `[carousel]` - Auto-play and initial device selection
//!
//! The file is only ever read. Out-of-range values are clamped by the
//! accessor methods so a hand-edited file cannot request nonsensical values.
//!
//! # Examples
//!
//! ```no_run
//! use iced_mockup::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load_with_override(None);
//! println!("auto-play every {:?}", config.autoplay_interval());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::device::Orientation;
use crate::domain::LayoutMode;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Notification key pushed when the config file exists but cannot be used.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,

    /// Layout shown at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutMode>,
}

/// Preview loading settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreviewConfig {
    /// URL previewed at startup.
    #[serde(default = "default_url", skip_serializing_if = "Option::is_none")]
    pub default_url: Option<String>,

    /// Time allowed for one load, in seconds.
    #[serde(
        default = "default_load_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub load_timeout_secs: Option<u32>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            default_url: default_url(),
            load_timeout_secs: default_load_timeout_secs(),
        }
    }
}

/// Grid layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridConfig {
    /// Orientation of phones and tablets at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,

    #[serde(default = "default_card_width", skip_serializing_if = "Option::is_none")]
    pub card_width: Option<f32>,

    #[serde(default = "default_card_height", skip_serializing_if = "Option::is_none")]
    pub card_height: Option<f32>,

    /// Largest scale a device is ever drawn at.
    #[serde(default = "default_max_scale", skip_serializing_if = "Option::is_none")]
    pub max_scale: Option<f32>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            orientation: Some(Orientation::default()),
            card_width: default_card_width(),
            card_height: default_card_height(),
            max_scale: default_max_scale(),
        }
    }
}

/// Carousel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselConfig {
    /// Start rotating when the carousel is shown.
    #[serde(default = "default_autoplay", skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,

    /// Period between two automatic rotations, in milliseconds.
    #[serde(
        default = "default_autoplay_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub autoplay_interval_ms: Option<u64>,

    /// Initially selected phone, by catalog name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Initially selected laptop or desktop, by catalog name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop: Option<String>,

    /// Initially selected tablet, by catalog name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tablet: Option<String>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: default_autoplay(),
            autoplay_interval_ms: default_autoplay_interval_ms(),
            phone: None,
            desktop: None,
            tablet: None,
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub preview: PreviewConfig,

    #[serde(default)]
    pub grid: GridConfig,

    #[serde(default)]
    pub carousel: CarouselConfig,
}

impl Config {
    /// URL previewed at startup.
    #[must_use]
    pub fn default_url(&self) -> &str {
        self.preview.default_url.as_deref().unwrap_or(DEFAULT_URL)
    }

    /// Per-load timeout, clamped to the supported range.
    #[must_use]
    pub fn load_timeout(&self) -> Duration {
        let secs = self
            .preview
            .load_timeout_secs
            .unwrap_or(DEFAULT_LOAD_TIMEOUT_SECS)
            .clamp(MIN_LOAD_TIMEOUT_SECS, MAX_LOAD_TIMEOUT_SECS);
        Duration::from_secs(u64::from(secs))
    }

    /// Grid card box `(width, height)`, clamped to the supported range.
    #[must_use]
    pub fn card_size(&self) -> (f32, f32) {
        let width = self
            .grid
            .card_width
            .unwrap_or(DEFAULT_CARD_WIDTH)
            .clamp(MIN_CARD_WIDTH, MAX_CARD_WIDTH);
        let height = self
            .grid
            .card_height
            .unwrap_or(DEFAULT_CARD_HEIGHT)
            .clamp(MIN_CARD_HEIGHT, MAX_CARD_HEIGHT);
        (width, height)
    }

    /// Scale ceiling, clamped so it never drops below the scale floor.
    #[must_use]
    pub fn max_scale(&self) -> f32 {
        self.grid
            .max_scale
            .unwrap_or(DEFAULT_MAX_SCALE)
            .clamp(crate::layout::scale::MIN_SCALE, MAX_MAX_SCALE)
    }

    #[must_use]
    pub fn autoplay(&self) -> bool {
        self.carousel.autoplay.unwrap_or(DEFAULT_AUTOPLAY)
    }

    /// Auto-play period, clamped to the supported range.
    #[must_use]
    pub fn autoplay_interval(&self) -> Duration {
        let millis = self
            .carousel
            .autoplay_interval_ms
            .unwrap_or(DEFAULT_AUTOPLAY_INTERVAL_MS)
            .clamp(MIN_AUTOPLAY_INTERVAL_MS, MAX_AUTOPLAY_INTERVAL_MS);
        Duration::from_millis(millis)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_url() -> Option<String> {
    Some(DEFAULT_URL.to_string())
}

fn default_load_timeout_secs() -> Option<u32> {
    Some(DEFAULT_LOAD_TIMEOUT_SECS)
}

fn default_card_width() -> Option<f32> {
    Some(DEFAULT_CARD_WIDTH)
}

fn default_card_height() -> Option<f32> {
    Some(DEFAULT_CARD_HEIGHT)
}

fn default_max_scale() -> Option<f32> {
    Some(DEFAULT_MAX_SCALE)
}

fn default_autoplay() -> Option<bool> {
    Some(DEFAULT_AUTOPLAY)
}

fn default_autoplay_interval_ms() -> Option<u64> {
    Some(DEFAULT_AUTOPLAY_INTERVAL_MS)
}

// =============================================================================
// Load Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration, from `base_dir` when given.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    log::debug!("loaded config from {}", path.display());
                    return (config, None);
                }
                Err(err) => {
                    log::warn!("ignoring config at {}: {err}", path.display());
                    return (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML for
/// this schema.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, contents).expect("failed to write config");
        (dir, path)
    }

    #[test]
    fn default_config_uses_default_constants() {
        let config = Config::default();
        assert_eq!(config.default_url(), DEFAULT_URL);
        assert_eq!(
            config.autoplay_interval(),
            Duration::from_millis(DEFAULT_AUTOPLAY_INTERVAL_MS)
        );
        assert_eq!(config.card_size(), (DEFAULT_CARD_WIDTH, DEFAULT_CARD_HEIGHT));
        assert!(config.autoplay());
    }

    #[test]
    fn sections_are_parsed() {
        let (_dir, path) = write_config(
            r#"
[general]
language = "fr"
theme_mode = "dark"
layout = "carousel"

[preview]
default_url = "https://rust-lang.org"

[grid]
orientation = "landscape"

[carousel]
autoplay = false
autoplay_interval_ms = 5000
phone = "Pixel 8"
"#,
        );
        let config = load_from_path(&path).expect("config parses");
        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert_eq!(config.general.layout, Some(LayoutMode::Carousel));
        assert_eq!(config.default_url(), "https://rust-lang.org");
        assert_eq!(config.grid.orientation, Some(Orientation::Landscape));
        assert!(!config.autoplay());
        assert_eq!(config.autoplay_interval(), Duration::from_secs(5));
        assert_eq!(config.carousel.phone.as_deref(), Some("Pixel 8"));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let (_dir, path) = write_config("[general]\nlanguage = \"en-US\"\n");
        let config = load_from_path(&path).expect("config parses");
        assert_eq!(config.preview, PreviewConfig::default());
        assert_eq!(config.carousel, CarouselConfig::default());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let (_dir, path) = write_config(
            r#"
[preview]
load_timeout_secs = 0

[grid]
max_scale = 0.0
card_width = 10.0

[carousel]
autoplay_interval_ms = 1
"#,
        );
        let config = load_from_path(&path).expect("config parses");
        assert_eq!(
            config.load_timeout(),
            Duration::from_secs(u64::from(MIN_LOAD_TIMEOUT_SECS))
        );
        assert_eq!(config.max_scale(), crate::layout::scale::MIN_SCALE);
        assert_eq!(config.card_size().0, MIN_CARD_WIDTH);
        assert_eq!(
            config.autoplay_interval(),
            Duration::from_millis(MIN_AUTOPLAY_INTERVAL_MS)
        );
    }

    #[test]
    fn invalid_file_yields_defaults_and_warning() {
        let (dir, _path) = write_config("not = valid = toml");
        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING_KEY));
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn unknown_theme_mode_is_rejected() {
        let (_dir, path) = write_config("[general]\ntheme_mode = \"sepia\"\n");
        assert!(load_from_path(&path).is_err());
    }
}
