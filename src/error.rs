// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Errors carry their message as a `String` so they stay `Clone` and can travel
//! inside Iced messages between async tasks and the update loop.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    /// The storage backend refused or failed a request.
    #[error("Storage Error: {0}")]
    Storage(String),
    /// Transport-level failure talking to a remote backend.
    #[error("Network Error: {0}")]
    Network(String),
    /// The data service (todo records) failed.
    #[error("Data Error: {0}")]
    Data(String),
    #[error("Image Error: {0}")]
    Image(String),
}

impl Error {
    /// Returns the i18n key used when this error is surfaced to the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Storage(_) => "error-storage",
            Error::Network(_) => "error-network",
            Error::Data(_) => "error-data",
            Error::Image(_) => "error-image",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_status() {
            Error::Storage(err.to_string())
        } else {
            Error::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Storage(format!("malformed response: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
