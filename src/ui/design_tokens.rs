// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the dashboard, the gallery and the viewer overlay.
//!
//! Spacing sits on a 4px grid. The const block at the bottom keeps every
//! scale ordered, so a retuned value that breaks the ordering fails to build.

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.42, 0.44, 0.47);
    pub const GRAY_200: Color = Color::from_rgb(0.78, 0.80, 0.82);

    /// Sky blue, lightest to darkest.
    pub const PRIMARY_400: Color = Color::from_rgb(0.38, 0.71, 0.98);
    pub const PRIMARY_500: Color = Color::from_rgb(0.22, 0.60, 0.92);
    pub const PRIMARY_600: Color = Color::from_rgb(0.13, 0.48, 0.80);

    pub const SUCCESS_500: Color = Color::from_rgb(0.26, 0.70, 0.40);
    pub const INFO_500: Color = Color::from_rgb(0.39, 0.59, 1.0);
    pub const WARNING_500: Color = Color::from_rgb(0.95, 0.65, 0.13);
    pub const ERROR_500: Color = Color::from_rgb(0.90, 0.22, 0.21);
}

/// Alpha values for washes drawn over other content.
pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    /// Viewer backdrop behind an opened image.
    pub const BACKDROP: f32 = 0.85;
    pub const OVERLAY_PRESSED: f32 = 0.9;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    /// Square gallery thumbnail edge.
    pub const THUMBNAIL: f32 = 120.0;
    pub const THUMBNAILS_PER_ROW: usize = 4;
    /// Height of the scrollable area holding the thumbnail grid; the to-do
    /// list uses the same height so both cards line up.
    pub const GALLERY_HEIGHT: f32 = 420.0;
    /// Analytics and settings placeholders.
    pub const CARD_MIN_HEIGHT: f32 = 180.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const ZOOM_SLIDER_WIDTH: f32 = 200.0;
}

/// Font sizes, largest first.
pub mod typography {
    /// Signed-out heading.
    pub const TITLE_LG: f32 = 30.0;
    /// App name in the header.
    pub const TITLE_MD: f32 = 20.0;
    /// Card headers and toast glyphs.
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY: f32 = 14.0;
    /// Thumbnail captions and viewer hints.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

pub mod shadow {
    use super::palette::BLACK;
    use iced::{Shadow, Vector};

    const fn drop(y: f32, blur_radius: f32) -> Shadow {
        Shadow {
            color: BLACK,
            offset: Vector { x: 0.0, y },
            blur_radius,
        }
    }

    pub const NONE: Shadow = drop(0.0, 0.0);
    pub const SM: Shadow = drop(2.0, 4.0);
    pub const MD: Shadow = drop(4.0, 8.0);
}

const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::BACKDROP > opacity::OVERLAY_STRONG && opacity::BACKDROP < 1.0);

    assert!(sizing::THUMBNAILS_PER_ROW > 0);
    assert!(sizing::GALLERY_HEIGHT > sizing::THUMBNAIL);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(radius::LG > radius::MD && radius::MD > radius::SM);
};
