// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dashboard card surface.
///
/// Colors come from the active Iced `Theme` so cards follow the dark-mode
/// toggle without hard-coded values.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Header bar across the top of the dashboard.
pub fn header(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.primary.strong.color)),
        text_color: Some(palette.primary.strong.text),
        ..Default::default()
    }
}

/// Placeholder shown in a thumbnail slot until its image resolves.
pub fn placeholder(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.strong.color)),
        text_color: Some(palette.background.strong.text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Toast card outlined in the severity accent.
pub fn toast(theme: &Theme, accent: Color) -> container::Style {
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(Background::Color(base.color)),
        text_color: Some(base.text),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}
