// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[diagram]` - Where diagrams come from and which variant opens first
//! - `[interaction]` - Pulse and double-click timing
//! - `[catalog]` - Optional zone catalog file
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument
//! 3. Set `PAIN_MAP_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use pain_map::app::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("ru".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::body::{Gender, Side};
use crate::domain::interaction::{DoubleClickWindow, PulseDuration};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "ru").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Diagram source and startup variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagramConfig {
    /// Local directory holding `pain-map/*.svg`. Takes precedence over
    /// `base_url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<PathBuf>,

    /// HTTP base URL serving `pain-map/*.svg`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Gender of the diagram shown at startup.
    #[serde(default = "default_gender", skip_serializing_if = "Option::is_none")]
    pub initial_gender: Option<Gender>,

    /// Side of the diagram shown at startup.
    #[serde(default = "default_side", skip_serializing_if = "Option::is_none")]
    pub initial_side: Option<Side>,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            assets_dir: None,
            base_url: None,
            initial_gender: default_gender(),
            initial_side: default_side(),
        }
    }
}

/// Interaction timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InteractionConfig {
    /// Length of the zone pulse animation in milliseconds.
    #[serde(
        default = "default_pulse_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub pulse_duration_ms: Option<u64>,

    /// Maximum delay between the two clicks of a double click.
    #[serde(
        default = "default_double_click_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub double_click_ms: Option<u64>,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            pulse_duration_ms: default_pulse_duration_ms(),
            double_click_ms: default_double_click_ms(),
        }
    }
}

/// Zone catalog settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// TOML catalog replacing the built-in zone names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
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
    pub diagram: DiagramConfig,

    #[serde(default)]
    pub interaction: InteractionConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Config {
    /// Pulse length, clamped to the supported range.
    #[must_use]
    pub fn pulse_duration(&self) -> PulseDuration {
        PulseDuration::from_millis(
            self.interaction
                .pulse_duration_ms
                .unwrap_or(DEFAULT_PULSE_DURATION_MS),
        )
    }

    /// Double-click window, clamped to the supported range.
    #[must_use]
    pub fn double_click_window(&self) -> DoubleClickWindow {
        DoubleClickWindow::from_millis(
            self.interaction
                .double_click_ms
                .unwrap_or(DEFAULT_DOUBLE_CLICK_MS),
        )
    }

    #[must_use]
    pub fn initial_gender(&self) -> Gender {
        self.diagram.initial_gender.unwrap_or(DEFAULT_GENDER)
    }

    #[must_use]
    pub fn initial_side(&self) -> Side {
        self.diagram.initial_side.unwrap_or(DEFAULT_SIDE)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_gender() -> Option<Gender> {
    Some(DEFAULT_GENDER)
}

fn default_side() -> Option<Side> {
    Some(DEFAULT_SIDE)
}

fn default_pulse_duration_ms() -> Option<u64> {
    Some(DEFAULT_PULSE_DURATION_MS)
}

fn default_double_click_ms() -> Option<u64> {
    Some(DEFAULT_DOUBLE_CLICK_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

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
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("ignoring {}: {}", path.display(), err);
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

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("ru".to_string()),
            },
            diagram: DiagramConfig {
                assets_dir: Some(PathBuf::from("/srv/static")),
                base_url: None,
                initial_gender: Some(Gender::Female),
                initial_side: Some(Side::Back),
            },
            interaction: InteractionConfig {
                pulse_duration_ms: Some(600),
                double_click_ms: Some(300),
            },
            catalog: CatalogConfig {
                file: Some(PathBuf::from("zones.toml")),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"ru\"\n").expect("parse");
        assert_eq!(config.initial_gender(), DEFAULT_GENDER);
        assert_eq!(config.initial_side(), DEFAULT_SIDE);
        assert_eq!(
            config.pulse_duration().as_millis(),
            DEFAULT_PULSE_DURATION_MS
        );
        assert_eq!(
            config.double_click_window().as_millis(),
            DEFAULT_DOUBLE_CLICK_MS
        );
    }

    #[test]
    fn out_of_range_timings_are_clamped() {
        let config: Config = toml::from_str(
            "[interaction]\npulse_duration_ms = 5\ndouble_click_ms = 99999\n",
        )
        .expect("parse");
        assert_eq!(config.pulse_duration().as_millis(), MIN_PULSE_DURATION_MS);
        assert_eq!(config.double_click_window().as_millis(), MAX_DOUBLE_CLICK_MS);
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
    fn invalid_file_yields_defaults_and_warning_key() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "[diagram]\ninitial_gender = \"robot\"\n",
        )
        .expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn absent_file_yields_defaults_silently() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        config.diagram.initial_side = Some(Side::Back);

        save_with_override(&config, Some(temp_dir.path().to_path_buf())).expect("save");
        assert!(temp_dir.path().join(CONFIG_FILE).exists());

        let (loaded, _) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(loaded.initial_side(), Side::Back);
    }
}
