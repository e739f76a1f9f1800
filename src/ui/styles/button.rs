// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Main call to action (upload, add todo, load more).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color, shadow) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD),
        button::Status::Disabled => (palette::GRAY_200, palette::GRAY_400, shadow::NONE),
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM)
        }
    };
    let text_color = if matches!(status, button::Status::Disabled) {
        palette::GRAY_400
    } else {
        WHITE
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Destructive actions (delete todo, sign out).
pub fn danger(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::ERROR_500
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: if matches!(status, button::Status::Disabled) {
            base.text.scale_alpha(opacity::OVERLAY_MEDIUM)
        } else {
            palette::ERROR_500
        },
        border: Border {
            color: palette::ERROR_500,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Gallery thumbnail tile; only the hover state is visible.
pub fn thumbnail(theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_500,
        _ => theme.extended_palette().background.strong.color,
    };

    button::Style {
        background: None,
        text_color: theme.palette().text,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Buttons drawn over the dark viewer backdrop.
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_theme: &Theme, status: button::Status| {
        let (alpha, text_color) = match status {
            button::Status::Hovered => (alpha_hover, text_color),
            button::Status::Pressed => (opacity::OVERLAY_PRESSED, text_color),
            button::Status::Disabled => (alpha_normal, text_color.scale_alpha(opacity::OVERLAY_MEDIUM)),
            button::Status::Active => (alpha_normal, text_color),
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Borderless "×" on toasts; a faint gray wash marks hover and press.
pub fn dismiss(theme: &Theme, status: button::Status) -> button::Style {
    let text = theme.extended_palette().background.base.text;
    let wash = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: wash.map(|a| Background::Color(Color { a, ..palette::GRAY_400 })),
        text_color: if matches!(status, button::Status::Disabled) {
            text.scale_alpha(opacity::OVERLAY_MEDIUM)
        } else {
            text
        },
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
