// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language
//! - `[catalog]` - Optional seed for the mock catalog generator
//! - `[hero]` - Hero banner auto-advance cadence
//! - `[rows]` - Content row arrow paging and scroll animation
//! - `[images]` - Remote poster/backdrop fetching
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `ICED_FLIX_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_flix::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Pin the catalog so every launch shows the same ratings and genres
//! config.catalog.seed = Some(42);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Mock catalog generation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Seed for the random fields of generated items.
    /// Absent means a fresh catalog on every launch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Hero banner settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeroConfig {
    /// Delay between automatic advances (milliseconds).
    #[serde(
        default = "default_hero_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_advance_ms: Option<u64>,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            auto_advance_ms: default_hero_interval_ms(),
        }
    }
}

/// Content row settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RowsConfig {
    /// Fraction of the visible width scrolled per arrow click.
    #[serde(
        default = "default_scroll_page_fraction",
        skip_serializing_if = "Option::is_none"
    )]
    pub scroll_page_fraction: Option<f32>,

    /// Duration of the smooth scroll (milliseconds, 0 jumps).
    #[serde(
        default = "default_scroll_animation_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub scroll_animation_ms: Option<u64>,
}

impl Default for RowsConfig {
    fn default() -> Self {
        Self {
            scroll_page_fraction: default_scroll_page_fraction(),
            scroll_animation_ms: default_scroll_animation_ms(),
        }
    }
}

impl RowsConfig {
    /// Paging fraction clamped to the supported range. Non-finite values
    /// fall back to the default.
    #[must_use]
    pub fn page_fraction(&self) -> f32 {
        self.scroll_page_fraction
            .filter(|fraction| fraction.is_finite())
            .unwrap_or(DEFAULT_SCROLL_PAGE_FRACTION)
            .clamp(MIN_SCROLL_PAGE_FRACTION, MAX_SCROLL_PAGE_FRACTION)
    }

    /// Scroll animation duration clamped to the supported range.
    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        let millis = self
            .scroll_animation_ms
            .unwrap_or(DEFAULT_SCROLL_ANIMATION_MS)
            .min(MAX_SCROLL_ANIMATION_MS);
        Duration::from_millis(millis)
    }
}

/// Remote image settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImagesConfig {
    /// Fetch posters and backdrops. When false every image shows its placeholder.
    #[serde(default = "default_images_enabled", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Timeout of a single image request (seconds).
    #[serde(
        default = "default_image_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout_secs: Option<u64>,

    /// Number of image requests allowed in flight at once.
    #[serde(
        default = "default_max_concurrent_images",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_concurrent: Option<usize>,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            enabled: default_images_enabled(),
            timeout_secs: default_image_timeout_secs(),
            max_concurrent: default_max_concurrent_images(),
        }
    }
}

impl ImagesConfig {
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    /// Request timeout clamped to the supported range.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        let secs = self
            .timeout_secs
            .unwrap_or(DEFAULT_IMAGE_TIMEOUT_SECS)
            .clamp(MIN_IMAGE_TIMEOUT_SECS, MAX_IMAGE_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    /// Concurrency limit clamped to the supported range.
    #[must_use]
    pub fn concurrency(&self) -> usize {
        self.max_concurrent
            .unwrap_or(DEFAULT_MAX_CONCURRENT_IMAGES)
            .clamp(MIN_MAX_CONCURRENT_IMAGES, MAX_MAX_CONCURRENT_IMAGES)
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
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub hero: HeroConfig,

    #[serde(default)]
    pub rows: RowsConfig,

    #[serde(default)]
    pub images: ImagesConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_hero_interval_ms() -> Option<u64> {
    Some(DEFAULT_HERO_INTERVAL_MS)
}

fn default_scroll_page_fraction() -> Option<f32> {
    Some(DEFAULT_SCROLL_PAGE_FRACTION)
}

fn default_scroll_animation_ms() -> Option<u64> {
    Some(DEFAULT_SCROLL_ANIMATION_MS)
}

fn default_images_enabled() -> Option<bool> {
    Some(true)
}

fn default_image_timeout_secs() -> Option<u64> {
    Some(DEFAULT_IMAGE_TIMEOUT_SECS)
}

fn default_max_concurrent_images() -> Option<usize> {
    Some(DEFAULT_MAX_CONCURRENT_IMAGES)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
#[must_use]
pub fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
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
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("{}: {err}", path.display())),
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
