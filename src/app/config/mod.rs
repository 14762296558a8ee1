// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[message]` - Demo message sender and body
//!
//! Reaction tallies are deliberately absent: they are in-memory only and
//! reset on every launch.
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set `ICED_BUBBLE_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory

use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "IcedBubble";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_BUBBLE_CONFIG_DIR";

/// Sender shown when the config does not name one.
pub const DEFAULT_SENDER: &str = "John Doe";

/// Message body shown when the config does not provide one.
pub const DEFAULT_BODY: &str =
    "This is a demo message from an employee regarding the current project status.";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "kebab-case")]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// The demo message shown in the bubble.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MessageConfig {
    /// Display name above the message text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,

    /// The message body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Complete application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub message: MessageConfig,
}

impl Config {
    /// The sender to display, falling back to the default.
    #[must_use]
    pub fn sender(&self) -> &str {
        self.message.sender.as_deref().unwrap_or(DEFAULT_SENDER)
    }

    /// The message body to display, falling back to the default.
    #[must_use]
    pub fn body(&self) -> &str {
        self.message.body.as_deref().unwrap_or(DEFAULT_BODY)
    }
}

// =============================================================================
// Path resolution
// =============================================================================

/// Resolves the config file path: explicit override, then env var, then the
/// platform config directory.
fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = base_dir {
        return Some(dir.join(CONFIG_FILE));
    }
    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE))
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the resolved location.
///
/// Returns the configuration plus an optional warning when an existing file
/// could not be parsed; the defaults are used in that case so startup never
/// fails on a bad preference file.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("could not read {}: {err}", path.display())),
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

/// Saves the configuration to the resolved location.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

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
