// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! The application only reads one file, `settings.toml`, from its config
//! directory. Session state is never written to disk.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - `--config-dir` CLI argument, or a test path
//! 2. **Environment variable** (`ICED_MOCKUP_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedMockup";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_MOCKUP_CONFIG_DIR";

/// Returns the application config directory path, `override_path` first.
///
/// Without an override, `ICED_MOCKUP_CONFIG_DIR` wins over the platform
/// directory:
///
/// - Linux: `~/.config/IcedMockup/`
/// - macOS: `~/Library/Application Support/IcedMockup/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\IcedMockup\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn explicit_override_wins() {
        let path = PathBuf::from("/tmp/mockup-test-config");
        assert_eq!(
            get_app_config_dir_with_override(Some(path.clone())),
            Some(path)
        );
    }

    #[test]
    fn env_var_overrides_platform_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/tmp/mockup-env-config");
        let resolved = get_app_config_dir_with_override(None);
        std::env::remove_var(ENV_CONFIG_DIR);
        assert_eq!(resolved, Some(PathBuf::from("/tmp/mockup-env-config")));
    }

    #[test]
    fn platform_default_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);
        if let Some(path) = get_app_config_dir_with_override(None) {
            assert!(path.ends_with(APP_NAME));
        }
    }
}
