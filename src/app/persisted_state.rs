// SPDX-License-Identifier: MPL-2.0
//! Session state persisted in CBOR next to the application data.
//!
//! Unlike `settings.toml`, this file is owned by the application: it remembers
//! the dashboard's dark-mode toggle and where the last upload was picked from.

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

const STATE_FILE: &str = "state.cbor";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Dashboard dark-mode toggle. `None` until the user flips it once, in
    /// which case the configured theme mode decides.
    #[serde(default)]
    pub dark_mode: Option<bool>,

    /// Directory the upload picker opens in.
    #[serde(default)]
    pub last_upload_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads state from the default location.
    ///
    /// Returns the state and an optional notification key when the file
    /// exists but could not be read.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path(base_dir) else {
            return (Self::default(), None);
        };
        if !path.exists() {
            return (Self::default(), None);
        }

        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "cannot open state file");
                return (
                    Self::default(),
                    Some("notification-state-read-error".to_string()),
                );
            }
        };
        match ciborium::from_reader(BufReader::new(file)) {
            Ok(state) => (state, None),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "cannot decode state file");
                (
                    Self::default(),
                    Some("notification-state-parse-error".to_string()),
                )
            }
        }
    }

    /// Saves state to the default location, returning a notification key on failure.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };
        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-state-write-error".to_string());
            }
        }
        let written = fs::File::create(&path)
            .map_err(|err| err.to_string())
            .and_then(|file| {
                ciborium::into_writer(self, BufWriter::new(file)).map_err(|err| err.to_string())
            });
        match written {
            Ok(()) => None,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "cannot write state file");
                Some("notification-state-write-error".to_string())
            }
        }
    }

    fn state_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }

    /// Remembers the parent directory of an uploaded file.
    pub fn set_last_upload_directory_from_file(&mut self, file_path: &Path) {
        if let Some(parent) = file_path.parent() {
            self.last_upload_directory = Some(parent.to_path_buf());
        }
    }
}
