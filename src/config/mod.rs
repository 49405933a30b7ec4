// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[viewer]` - Instructions delay, render size and auto-rotation
//! - `[gallery]` - Remote gallery endpoints
//! - `[export]` - Where exports and screenshots are written
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `MODEL_LENS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use model_lens::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//!
//! // Write a starter file on first launch; an existing file is left alone
//! let created = config::save_if_missing(&config).expect("Failed to save config");
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

    /// Initial theme mode (light, dark, or system). Toggling at runtime is not saved.
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

/// Viewport settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Delay before the instructions banner hides (milliseconds).
    #[serde(
        default = "default_instructions_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub instructions_delay_ms: Option<u64>,

    /// Width of the rendered frame in pixels.
    #[serde(
        default = "default_render_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub render_width: Option<u32>,

    /// Height of the rendered frame in pixels.
    #[serde(
        default = "default_render_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub render_height: Option<u32>,

    /// Orbit auto-rotation speed while no model is loaded.
    #[serde(
        default = "default_auto_rotate_speed",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_rotate_speed: Option<f32>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            instructions_delay_ms: default_instructions_delay_ms(),
            render_width: default_render_width(),
            render_height: default_render_height(),
            auto_rotate_speed: default_auto_rotate_speed(),
        }
    }
}

impl ViewerConfig {
    /// Render size clamped to the supported range.
    #[must_use]
    pub fn render_size(&self) -> (u32, u32) {
        let clamp = |v: u32| v.clamp(MIN_RENDER_DIMENSION, MAX_RENDER_DIMENSION);
        (
            clamp(self.render_width.unwrap_or(DEFAULT_RENDER_WIDTH)),
            clamp(self.render_height.unwrap_or(DEFAULT_RENDER_HEIGHT)),
        )
    }
}

/// Remote gallery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// API root; `generate_report/` and uploads are resolved against it.
    #[serde(default = "default_gallery_base_url")]
    pub base_url: String,

    /// Root for relative `downloadUrl` values.
    #[serde(default = "default_asset_base_url")]
    pub asset_base_url: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            base_url: default_gallery_base_url(),
            asset_base_url: default_asset_base_url(),
        }
    }
}

/// Export settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ExportConfig {
    /// Target directory for exports, screenshots and downloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl ExportConfig {
    /// Configured directory, else the platform download directory, else the
    /// current directory.
    #[must_use]
    pub fn resolved_directory(&self) -> PathBuf {
        paths::get_export_dir_with_override(self.directory.clone())
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

    /// Viewport settings.
    #[serde(default)]
    pub viewer: ViewerConfig,

    /// Remote gallery settings.
    #[serde(default)]
    pub gallery: GalleryConfig,

    /// Export settings.
    #[serde(default)]
    pub export: ExportConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::Dark
}

fn default_instructions_delay_ms() -> Option<u64> {
    Some(DEFAULT_INSTRUCTIONS_DELAY_MS)
}

fn default_render_width() -> Option<u32> {
    Some(DEFAULT_RENDER_WIDTH)
}

fn default_render_height() -> Option<u32> {
    Some(DEFAULT_RENDER_HEIGHT)
}

fn default_auto_rotate_speed() -> Option<f32> {
    Some(DEFAULT_AUTO_ROTATE_SPEED)
}

fn default_gallery_base_url() -> String {
    DEFAULT_GALLERY_BASE_URL.to_string()
}

fn default_asset_base_url() -> String {
    DEFAULT_ASSET_BASE_URL.to_string()
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
/// default config with a warning key explaining what went wrong.
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

/// Writes `config` to the default path when no settings file exists yet.
///
/// Returns whether a file was written.
pub fn save_if_missing(config: &Config) -> Result<bool> {
    save_if_missing_with_override(config, None)
}

/// Same as [`save_if_missing`] inside a custom directory.
pub fn save_if_missing_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<bool> {
    match get_config_path_with_override(base_dir) {
        Some(path) if !path.exists() => {
            save_to_path(config, &path)?;
            Ok(true)
        }
        _ => Ok(false),
    }
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
            viewer: ViewerConfig {
                instructions_delay_ms: Some(2500),
                render_width: Some(640),
                render_height: Some(480),
                auto_rotate_speed: Some(1.0),
            },
            gallery: GalleryConfig {
                base_url: "https://models.example.com/api/models/".into(),
                asset_base_url: "https://models.example.com/".into(),
            },
            export: ExportConfig {
                directory: Some(PathBuf::from("/tmp/exports")),
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

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_warns_and_falls_back_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general\nbroken")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_returns_defaults_silently() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[gallery]\nbase_url = \"https://example.org/api/\"\n",
        )
        .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.gallery.base_url, "https://example.org/api/");
        assert_eq!(loaded.gallery.asset_base_url, DEFAULT_ASSET_BASE_URL);
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
        assert_eq!(
            loaded.viewer.instructions_delay_ms,
            Some(DEFAULT_INSTRUCTIONS_DELAY_MS)
        );
    }

    #[test]
    fn theme_mode_parsing_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"LIGHT\"\n").expect("valid toml");
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn render_size_is_clamped() {
        let viewer = ViewerConfig {
            render_width: Some(10),
            render_height: Some(100_000),
            ..ViewerConfig::default()
        };
        assert_eq!(
            viewer.render_size(),
            (MIN_RENDER_DIMENSION, MAX_RENDER_DIMENSION)
        );
    }

    #[test]
    fn save_if_missing_never_overwrites() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = Some(temp_dir.path().to_path_buf());

        let created = save_if_missing_with_override(&Config::default(), base_dir.clone())
            .expect("save should succeed");
        assert!(created);
        assert!(temp_dir.path().join(CONFIG_FILE).exists());

        let mut edited = Config::default();
        edited.general.language = Some("fr".to_string());
        let created =
            save_if_missing_with_override(&edited, base_dir).expect("save should succeed");
        assert!(!created);

        let loaded = load_from_path(&temp_dir.path().join(CONFIG_FILE)).expect("loads");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn export_directory_prefers_configured_path() {
        let export = ExportConfig {
            directory: Some(PathBuf::from("/srv/exports")),
        };
        assert_eq!(export.resolved_directory(), PathBuf::from("/srv/exports"));
    }
}
