// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Every directory below is resolved the same way:
//! 1. **Explicit override** - parameter to the `_with_override()` functions (tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`, `--backend-root`), see [`init_cli_overrides`]
//! 3. **Environment variables** (`SKYBOARD_DATA_DIR`, `SKYBOARD_CONFIG_DIR`, `SKYBOARD_STORAGE_ROOT`)
//! 4. **Platform default** via the `dirs` crate
//!
//! The local storage root has one extra step between 3 and 4: the
//! `[backend] local_root` value from `settings.toml`.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Application name used for directory naming.
pub const APP_NAME: &str = "Skyboard";

pub const ENV_DATA_DIR: &str = "SKYBOARD_DATA_DIR";
pub const ENV_CONFIG_DIR: &str = "SKYBOARD_CONFIG_DIR";
pub const ENV_STORAGE_ROOT: &str = "SKYBOARD_STORAGE_ROOT";

/// Subdirectory of the data dir used by the local storage backend by default.
const STORAGE_DIR: &str = "storage";

/// File holding todo records when no `[backend] todo_file` is configured.
const TODO_FILE: &str = "todos.cbor";

/// Directory overrides collected from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub data_dir: Option<PathBuf>,
    pub config_dir: Option<PathBuf>,
    pub backend_root: Option<PathBuf>,
}

static CLI_OVERRIDES: OnceLock<CliOverrides> = OnceLock::new();

/// Records CLI directory overrides. Only the first call has an effect.
pub fn init_cli_overrides(overrides: CliOverrides) {
    if CLI_OVERRIDES.set(overrides).is_err() {
        tracing::warn!("CLI path overrides were already initialized, keeping the first set");
    }
}

fn cli() -> Option<&'static CliOverrides> {
    CLI_OVERRIDES.get()
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn platform_dir(base: Option<PathBuf>) -> Option<PathBuf> {
    base.map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the application data directory (state, todos, local storage).
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(|| cli().and_then(|c| c.data_dir.clone()))
        .or_else(|| env_path(ENV_DATA_DIR))
        .or_else(|| platform_dir(dirs::data_dir()))
}

/// Returns the directory holding `settings.toml`.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(|| cli().and_then(|c| c.config_dir.clone()))
        .or_else(|| env_path(ENV_CONFIG_DIR))
        .or_else(|| platform_dir(dirs::config_dir()))
}

/// Returns the root directory of the local storage backend.
///
/// `configured` is the `[backend] local_root` value, consulted after the CLI
/// and the environment.
pub fn get_storage_root(configured: Option<&Path>) -> Option<PathBuf> {
    get_storage_root_with_override(None, configured)
}

pub fn get_storage_root_with_override(
    override_path: Option<PathBuf>,
    configured: Option<&Path>,
) -> Option<PathBuf> {
    override_path
        .or_else(|| cli().and_then(|c| c.backend_root.clone()))
        .or_else(|| env_path(ENV_STORAGE_ROOT))
        .or_else(|| configured.map(Path::to_path_buf))
        .or_else(|| {
            get_app_data_dir().map(|mut path| {
                path.push(STORAGE_DIR);
                path
            })
        })
}

/// Returns the todo record file: the configured one, else `todos.cbor` in the data dir.
pub fn get_todo_file(configured: Option<&Path>) -> Option<PathBuf> {
    configured.map(Path::to_path_buf).or_else(|| {
        get_app_data_dir().map(|mut path| {
            path.push(TODO_FILE);
            path
        })
    })
}
