// SPDX-License-Identifier: MPL-2.0
//! This module reads the application's configuration from a `settings.toml`
//! file. Settings are never written back: the demo keeps all state in memory.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[notifications]` - Toast lifetime and visible count
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable setups:
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set the `ICED_ATELIER_CONFIG_DIR` environment variable
//! 4. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_atelier::config;
//!
//! // Returns defaults plus a warning when the file is unreadable
//! let (config, warning) = config::load();
//! if let Some(message) = warning {
//!     eprintln!("{message}");
//! }
//! println!("toast lifetime: {:?}", config.notifications.duration());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Toast notification settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Lifetime of a toast before it is dismissed automatically.
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,

    /// Number of toasts rendered at the same time.
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_TOAST_DURATION_MS,
            max_visible: DEFAULT_MAX_VISIBLE_TOASTS,
        }
    }
}

impl NotificationsConfig {
    /// Toast lifetime clamped to the supported range.
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(
            self.duration_ms
                .clamp(MIN_TOAST_DURATION_MS, MAX_TOAST_DURATION_MS),
        )
    }

    /// Visible toast count clamped to the supported range.
    #[must_use]
    pub fn max_visible(&self) -> usize {
        self.max_visible
            .clamp(MIN_MAX_VISIBLE_TOASTS, MAX_MAX_VISIBLE_TOASTS)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_duration_ms() -> u64 {
    DEFAULT_TOAST_DURATION_MS
}

fn default_max_visible() -> usize {
    DEFAULT_MAX_VISIBLE_TOASTS
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse::<ThemeMode>().map_err(D::Error::custom)
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

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        log::debug!("No config file at {}, using defaults", path.display());
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => {
            log::info!("Loaded configuration from {}", path.display());
            (config, None)
        }
        Err(err) => {
            log::warn!("Ignoring config file {}: {err}", path.display());
            (
                Config::default(),
                Some(format!("Settings could not be loaded: {err}")),
            )
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.notifications.duration_ms, DEFAULT_TOAST_DURATION_MS);
        assert_eq!(config.notifications.max_visible, DEFAULT_MAX_VISIBLE_TOASTS);
        assert_eq!(config.notifications.duration(), Duration::from_millis(3000));
    }

    #[test]
    fn sectioned_format_loads_correctly() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            r#"
[general]
theme_mode = "dark"

[notifications]
duration_ms = 1500
max_visible = 3
"#,
        )
        .expect("failed to write config");

        let config = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert_eq!(config.notifications.duration(), Duration::from_millis(1500));
        assert_eq!(config.notifications.max_visible(), 3);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"Light\"\n")
            .expect("failed to write config");

        let config = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
        assert_eq!(config.notifications, NotificationsConfig::default());
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"sepia\"\n")
            .expect("failed to write config");

        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = NotificationsConfig {
            duration_ms: 1,
            max_visible: 0,
        };
        assert_eq!(
            config.duration(),
            Duration::from_millis(MIN_TOAST_DURATION_MS)
        );
        assert_eq!(config.max_visible(), MIN_MAX_VISIBLE_TOASTS);

        let config = NotificationsConfig {
            duration_ms: u64::MAX,
            max_visible: usize::MAX,
        };
        assert_eq!(
            config.duration(),
            Duration::from_millis(MAX_TOAST_DURATION_MS)
        );
        assert_eq!(config.max_visible(), MAX_MAX_VISIBLE_TOASTS);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[ broken").expect("failed to write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        let warning = warning.expect("corrupted file should produce a warning");
        assert!(warning.starts_with("Settings could not be loaded"));
    }

    #[test]
    fn load_with_override_reads_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "[notifications]\nduration_ms = 5000\n",
        )
        .expect("failed to write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(config.notifications.duration_ms, 5000);
    }
}
