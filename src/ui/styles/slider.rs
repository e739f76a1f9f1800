// SPDX-License-Identifier: MPL-2.0
//! Slider style for the viewer zoom control.

use crate::ui::design_tokens::{opacity, palette};
use iced::widget::slider;
use iced::{Background, Border, Color, Theme};

/// Light-on-dark slider readable over the viewer backdrop.
pub fn zoom(_theme: &Theme, status: slider::Status) -> slider::Style {
    let handle = match status {
        slider::Status::Hovered | slider::Status::Dragged => palette::PRIMARY_400,
        slider::Status::Active => palette::WHITE,
    };

    slider::Style {
        rail: slider::Rail {
            backgrounds: (
                Background::Color(palette::PRIMARY_500),
                Background::Color(Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..palette::GRAY_200
                }),
            ),
            width: 4.0,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 2.0.into(),
            },
        },
        handle: slider::Handle {
            shape: slider::HandleShape::Circle { radius: 7.0 },
            background: Background::Color(handle),
            border_width: 1.0,
            border_color: palette::GRAY_400,
        },
    }
}
