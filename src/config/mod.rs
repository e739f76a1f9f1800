// SPDX-License-Identifier: MPL-2.0
//! User preferences read from a `settings.toml` file. The application only
//! reads it; `save_to_path` exists for tooling and tests that write one.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Listing prefix, page size, image cache size
//! - `[viewer]` - Zoom bounds and gesture tuning
//! - `[backend]` - Which storage/data backend to talk to
//! - `[account]` - Identity shown in the dashboard
//! - `[logging]` - Tracing filter
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `SKYBOARD_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use skyboard::config;
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("settings ignored: {key}");
//! }
//! println!("{} images per page", config.gallery.page_size());
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
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Gallery listing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Folder prefix listed by the gallery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Items requested per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// Capacity of the resolved image cache.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_images: Option<usize>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            prefix: Some(DEFAULT_GALLERY_PREFIX.to_string()),
            page_size: Some(DEFAULT_PAGE_SIZE),
            cache_images: Some(DEFAULT_IMAGE_CACHE_ENTRIES),
        }
    }
}

impl GalleryConfig {
    /// Returns the listing prefix, normalized to end with a `/`.
    #[must_use]
    pub fn prefix(&self) -> String {
        let raw = self
            .prefix
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_GALLERY_PREFIX);
        if raw.ends_with('/') {
            raw.to_string()
        } else {
            format!("{raw}/")
        }
    }

    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE)
    }

    #[must_use]
    pub fn cache_images(&self) -> usize {
        self.cache_images
            .unwrap_or(DEFAULT_IMAGE_CACHE_ENTRIES)
            .clamp(MIN_IMAGE_CACHE_ENTRIES, MAX_IMAGE_CACHE_ENTRIES)
    }
}

/// Full-size viewer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_zoom: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_zoom: Option<f32>,

    /// Scale change per step button, wheel tick or key press.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom_step: Option<f32>,

    /// Maximum delay between two taps of a double tap, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_tap_ms: Option<u64>,

    /// Scale reached by a double tap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_tap_scale: Option<f32>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            min_zoom: Some(DEFAULT_MIN_ZOOM),
            max_zoom: Some(DEFAULT_MAX_ZOOM),
            zoom_step: Some(DEFAULT_ZOOM_STEP),
            double_tap_ms: Some(DEFAULT_DOUBLE_TAP_MS),
            double_tap_scale: Some(DEFAULT_DOUBLE_TAP_SCALE),
        }
    }
}

/// Which backend family the dashboard talks to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    /// Files under a local directory, todos in a local CBOR file.
    #[default]
    Local,
    /// Storage over HTTP, todos kept in a local CBOR file.
    Http,
}

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BackendConfig {
    #[serde(default)]
    pub kind: BackendKind,

    /// Root directory for the local storage backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_root: Option<PathBuf>,

    /// Base URL for the HTTP storage backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// File holding todo records. Defaults to `todos.cbor` in the data dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub todo_file: Option<PathBuf>,
}

/// Identity shown in the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AccountConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_id: Option<String>,
}

/// Tracing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive such as `info` or `skyboard=debug`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl LoggingConfig {
    #[must_use]
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
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
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub viewer: ViewerConfig,

    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub account: AccountConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
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
/// default config with a notification key explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), %err, "ignoring unreadable config");
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
