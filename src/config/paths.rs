// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution for the durable preference store.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to [`get_config_dir_with_override`]
//!    (CLI `--config-dir`, tests)
//! 2. **Environment variable** (`CLUBUP_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate, with the app name appended

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "ClubUp";

/// Preference file name within the config directory.
pub const PREFERENCES_FILE: &str = "preferences.toml";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "CLUBUP_CONFIG_DIR";

/// Returns the config directory path.
///
/// Platform defaults:
/// - Linux: `~/.config/ClubUp/`
/// - macOS: `~/Library/Application Support/ClubUp/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\ClubUp\`
///
/// Returns `None` if the config directory cannot be determined.
pub fn get_config_dir() -> Option<PathBuf> {
    get_config_dir_with_override(None)
}

/// Returns the config directory path with an optional override.
///
/// The override has highest priority, then `CLUBUP_CONFIG_DIR` (if set and
/// non-empty), then the platform config directory.
pub fn get_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
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

/// Returns the full path of the preferences file.
pub fn get_preferences_path_with_override(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    get_config_dir_with_override(override_dir).map(|mut path| {
        path.push(PREFERENCES_FILE);
        path
    })
}
