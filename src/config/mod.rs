// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[slider]` - Hero carousel timing and swipe threshold
//! - `[catalog]` - Price filter bounds
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ADENA_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use adena::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

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

/// Hero carousel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SliderConfig {
    /// Fade-out duration before the slide index changes.
    #[serde(default = "default_exit_delay_ms", skip_serializing_if = "Option::is_none")]
    pub exit_delay_ms: Option<u64>,

    /// Fade-in duration after the slide index changed.
    #[serde(default = "default_entry_delay_ms", skip_serializing_if = "Option::is_none")]
    pub entry_delay_ms: Option<u64>,

    /// Interval between automatic advances.
    #[serde(
        default = "default_cycle_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub cycle_interval_ms: Option<u64>,

    /// Horizontal travel that turns a drag into a swipe.
    #[serde(
        default = "default_drag_threshold_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub drag_threshold_px: Option<f32>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            exit_delay_ms: default_exit_delay_ms(),
            entry_delay_ms: default_entry_delay_ms(),
            cycle_interval_ms: default_cycle_interval_ms(),
            drag_threshold_px: default_drag_threshold_px(),
        }
    }
}

impl SliderConfig {
    /// Exit delay, clamped to the supported range.
    #[must_use]
    pub fn exit_delay(&self) -> Duration {
        let ms = self.exit_delay_ms.unwrap_or(DEFAULT_EXIT_DELAY_MS);
        Duration::from_millis(ms.min(MAX_TRANSITION_DELAY_MS))
    }

    /// Entry delay, clamped to the supported range.
    #[must_use]
    pub fn entry_delay(&self) -> Duration {
        let ms = self.entry_delay_ms.unwrap_or(DEFAULT_ENTRY_DELAY_MS);
        Duration::from_millis(ms.min(MAX_TRANSITION_DELAY_MS))
    }

    /// Automatic cycle interval, clamped to the supported range.
    #[must_use]
    pub fn cycle_interval(&self) -> Duration {
        let ms = self
            .cycle_interval_ms
            .unwrap_or(DEFAULT_CYCLE_INTERVAL_MS)
            .clamp(MIN_CYCLE_INTERVAL_MS, MAX_CYCLE_INTERVAL_MS);
        Duration::from_millis(ms)
    }

    /// Swipe threshold, clamped to the supported range.
    #[must_use]
    pub fn drag_threshold(&self) -> f32 {
        let px = self.drag_threshold_px.unwrap_or(DEFAULT_DRAG_THRESHOLD_PX);
        if px.is_finite() {
            px.clamp(MIN_DRAG_THRESHOLD_PX, MAX_DRAG_THRESHOLD_PX)
        } else {
            DEFAULT_DRAG_THRESHOLD_PX
        }
    }
}

/// Product listing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Upper bound of the price filter.
    #[serde(default = "default_max_price", skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u32>,

    /// Price slider step.
    #[serde(default = "default_price_step", skip_serializing_if = "Option::is_none")]
    pub price_step: Option<u32>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            max_price: default_max_price(),
            price_step: default_price_step(),
        }
    }
}

impl CatalogConfig {
    /// Price filter upper bound, never below [`MIN_MAX_PRICE`].
    #[must_use]
    pub fn max_price(&self) -> u32 {
        self.max_price.unwrap_or(DEFAULT_MAX_PRICE).max(MIN_MAX_PRICE)
    }

    /// Price slider step, between 1 and the price upper bound.
    #[must_use]
    pub fn price_step(&self) -> u32 {
        self.price_step
            .unwrap_or(DEFAULT_PRICE_STEP)
            .clamp(1, self.max_price())
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

    /// Hero carousel settings.
    #[serde(default)]
    pub slider: SliderConfig,

    /// Product listing settings.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::Dark
}

fn default_exit_delay_ms() -> Option<u64> {
    Some(DEFAULT_EXIT_DELAY_MS)
}

fn default_entry_delay_ms() -> Option<u64> {
    Some(DEFAULT_ENTRY_DELAY_MS)
}

fn default_cycle_interval_ms() -> Option<u64> {
    Some(DEFAULT_CYCLE_INTERVAL_MS)
}

fn default_drag_threshold_px() -> Option<f32> {
    Some(DEFAULT_DRAG_THRESHOLD_PX)
}

fn default_max_price() -> Option<u32> {
    Some(DEFAULT_MAX_PRICE)
}

fn default_price_step() -> Option<u32> {
    Some(DEFAULT_PRICE_STEP)
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
/// default config with a warning message explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
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
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            slider: SliderConfig {
                exit_delay_ms: Some(300),
                entry_delay_ms: Some(200),
                cycle_interval_ms: Some(6_000),
                drag_threshold_px: Some(80.0),
            },
            catalog: CatalogConfig {
                max_price: Some(50_000),
                price_step: Some(250),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
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
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert_eq!(config.slider.exit_delay(), Duration::from_millis(500));
        assert_eq!(config.slider.entry_delay(), Duration::from_millis(500));
        assert_eq!(config.slider.cycle_interval(), Duration::from_millis(4_000));
        assert_eq!(config.slider.drag_threshold(), 50.0);
        assert_eq!(config.catalog.max_price(), 20_000);
        assert_eq!(config.catalog.price_step(), 100);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"light\"\n")
            .expect("partial config should parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
        assert_eq!(config.slider, SliderConfig::default());
        assert_eq!(config.catalog, CatalogConfig::default());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"SYSTEM\"\n")
            .expect("config should parse");
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn unknown_theme_mode_is_rejected() {
        let parsed: std::result::Result<Config, _> =
            toml::from_str("[general]\ntheme_mode = \"sepia\"\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn out_of_range_slider_values_are_clamped() {
        let slider = SliderConfig {
            exit_delay_ms: Some(60_000),
            entry_delay_ms: Some(0),
            cycle_interval_ms: Some(10),
            drag_threshold_px: Some(f32::NAN),
        };
        assert_eq!(
            slider.exit_delay(),
            Duration::from_millis(MAX_TRANSITION_DELAY_MS)
        );
        assert_eq!(slider.entry_delay(), Duration::ZERO);
        assert_eq!(
            slider.cycle_interval(),
            Duration::from_millis(MIN_CYCLE_INTERVAL_MS)
        );
        assert_eq!(slider.drag_threshold(), DEFAULT_DRAG_THRESHOLD_PX);
    }

    #[test]
    fn catalog_step_never_exceeds_max_price() {
        let catalog = CatalogConfig {
            max_price: Some(10),
            price_step: Some(5_000),
        };
        assert_eq!(catalog.max_price(), MIN_MAX_PRICE);
        assert_eq!(catalog.price_step(), MIN_MAX_PRICE);
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            ..Config::default()
        };

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");
        assert!(base_dir.join(CONFIG_FILE).exists());

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join(CONFIG_FILE), "[general\nbroken").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
        assert_eq!(config, Config::default());
    }
}
