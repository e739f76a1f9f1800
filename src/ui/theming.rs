// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme selection.
//!
//! The configured [`ThemeMode`] picks the starting theme. The header toggle
//! stores an explicit choice in the persisted state, which then wins.

use iced::Theme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detection failures fall back to light, matching the header toggle default.
                matches!(dark_light::detect(), Ok(dark_light::Mode::Dark))
            }
        }
    }
}

/// Resolves the dark flag from a saved toggle, falling back to the mode.
#[must_use]
pub fn resolve_dark_mode(mode: ThemeMode, saved: Option<bool>) -> bool {
    saved.unwrap_or_else(|| mode.is_dark())
}

/// Maps the dark flag to the Iced built-in theme.
#[must_use]
pub fn iced_theme(dark: bool) -> Theme {
    if dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}
