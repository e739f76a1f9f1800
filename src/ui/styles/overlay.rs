// SPDX-License-Identifier: MPL-2.0
//! Styles for the full-window image viewer.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
    radius,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dimmed backdrop covering the dashboard while an image is open.
#[must_use]
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Toolbar holding the zoom controls.
#[must_use]
pub fn toolbar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..BLACK
        })),
        text_color: Some(WHITE),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
