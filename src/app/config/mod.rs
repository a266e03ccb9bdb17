// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading user
//! preferences from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[popup]` - Popup timing (entrance/close delays) and card size
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Pass `--config-dir` or set `ICED_NEWSLETTER_CONFIG_DIR`
//! 3. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_newsletter::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! let delay = config
//!     .popup
//!     .entrance_delay_ms
//!     .unwrap_or(config::DEFAULT_ENTRANCE_DELAY_MS);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Popup timing and sizing settings.
///
/// Deployed variants of the popup differ only in these values; they are
/// configuration parameters, not behavioral forks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PopupConfig {
    /// Delay between mount and the popup becoming visible (milliseconds).
    #[serde(
        default = "default_entrance_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub entrance_delay_ms: Option<u64>,

    /// Delay between a close request and removal (milliseconds).
    #[serde(
        default = "default_close_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub close_delay_ms: Option<u64>,

    /// Popup card width in logical pixels.
    #[serde(default = "default_popup_width", skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,

    /// Popup card height in logical pixels.
    #[serde(
        default = "default_popup_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub height: Option<f32>,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            entrance_delay_ms: default_entrance_delay_ms(),
            close_delay_ms: default_close_delay_ms(),
            width: default_popup_width(),
            height: default_popup_height(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Popup timing and sizing settings.
    #[serde(default)]
    pub popup: PopupConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_entrance_delay_ms() -> Option<u64> {
    Some(DEFAULT_ENTRANCE_DELAY_MS)
}

fn default_close_delay_ms() -> Option<u64> {
    Some(DEFAULT_CLOSE_DELAY_MS)
}

fn default_popup_width() -> Option<f32> {
    Some(DEFAULT_POPUP_WIDTH)
}

fn default_popup_height() -> Option<f32> {
    Some(DEFAULT_POPUP_HEIGHT)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with a notification key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
