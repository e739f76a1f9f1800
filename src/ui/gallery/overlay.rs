// SPDX-License-Identifier: MPL-2.0
//! Full-window viewer overlay.
//!
//! Layout, from the outside in: a backdrop that closes the viewer when
//! clicked, a toolbar that swallows clicks, and the stage where the image is
//! drawn at `fit * scale` and shifted by the pan offset.

use super::component::Message;
use super::viewer::ViewerController;
use crate::i18n::fluent::I18n;
use crate::media::ImageSlot;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::state::ZoomState;
use crate::ui::styles;
use iced::widget::{
    button, container, image, mouse_area, responsive, slider, text, tooltip, Column, Row,
};
use iced::{alignment, mouse, Element, Length, Padding, Size};

pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub viewer: &'a ViewerController,
    pub slot: ImageSlot,
}

pub fn view(env: ViewEnv<'_>) -> Element<'_, Message> {
    let ViewEnv { i18n, viewer, slot } = env;
    let zoom = viewer.zoom();
    let dragging = viewer.is_dragging();

    let toolbar = mouse_area(
        container(controls(viewer, i18n))
            .padding(spacing::XS)
            .style(styles::overlay::toolbar),
    )
    .on_press(Message::ControlsPressed);

    let stage = responsive(move |available: Size| stage(&slot, zoom, dragging, available, i18n));

    let hint_key = if zoom.is_zoomed() {
        "viewer-hint-zoomed"
    } else {
        "viewer-hint"
    };
    let hint = text(i18n.tr(hint_key))
        .size(typography::CAPTION)
        .color(palette::GRAY_200);

    let content = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(toolbar)
        .push(stage)
        .push(hint);

    mouse_area(
        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::BackdropPressed)
    .into()
}

fn controls<'a>(viewer: &ViewerController, i18n: &'a I18n) -> Element<'a, Message> {
    let zoom = viewer.zoom();
    let limits = viewer.limits();
    let control_style = styles::button::overlay(palette::WHITE, opacity::OVERLAY_MEDIUM, opacity::OVERLAY_HOVER);

    let zoom_out = with_tooltip(
        button(text("−").size(typography::TITLE_SM))
            .on_press_maybe(zoom.can_zoom_out(limits).then_some(Message::ZoomOut))
            .style(control_style.clone()),
        i18n.tr("viewer-zoom-out"),
    );
    let zoom_in = with_tooltip(
        button(text("+").size(typography::TITLE_SM))
            .on_press_maybe(zoom.can_zoom_in(limits).then_some(Message::ZoomIn))
            .style(control_style.clone()),
        i18n.tr("viewer-zoom-in"),
    );

    let percent = i18n.tr_with_args("viewer-zoom-label", &[("percent", &zoom.percent().to_string())]);
    let scale_slider = slider(limits.min()..=limits.max(), zoom.scale, Message::SliderChanged)
        .step(limits.slider_step())
        .width(Length::Fixed(sizing::ZOOM_SLIDER_WIDTH))
        .style(styles::slider::zoom);

    let reset = button(text(i18n.tr("viewer-zoom-reset")).size(typography::BODY))
        .on_press(Message::ResetZoom)
        .style(control_style.clone());
    let close = button(text(i18n.tr("viewer-close")).size(typography::BODY))
        .on_press(Message::Close)
        .style(control_style);

    Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(zoom_out)
        .push(text(percent).size(typography::BODY).width(Length::Fixed(56.0)).center())
        .push(zoom_in)
        .push(scale_slider)
        .push(reset)
        .push(close)
        .into()
}

fn with_tooltip<'a>(
    control: impl Into<Element<'a, Message>>,
    label: String,
) -> Element<'a, Message> {
    tooltip(control, text(label).size(typography::CAPTION), tooltip::Position::Bottom)
        .gap(spacing::XXS)
        .style(styles::overlay::toolbar)
        .into()
}

fn stage<'a>(
    slot: &ImageSlot,
    zoom: ZoomState,
    dragging: bool,
    available: Size,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match slot {
        ImageSlot::Ready(cached) => {
            let size = displayed_size(cached.width, cached.height, available, zoom.scale);
            let interaction = if dragging {
                mouse::Interaction::Grabbing
            } else if zoom.is_zoomed() {
                mouse::Interaction::Grab
            } else {
                mouse::Interaction::Idle
            };
            mouse_area(
                image(cached.handle.clone())
                    .width(Length::Fixed(size.width))
                    .height(Length::Fixed(size.height)),
            )
            .on_press(Message::ImagePressed)
            .interaction(interaction)
            .into()
        }
        ImageSlot::Failed => text(i18n.tr("gallery-image-failed")).color(palette::WHITE).into(),
        ImageSlot::Loading | ImageSlot::Missing => {
            text(i18n.tr("gallery-image-loading")).color(palette::WHITE).into()
        }
    };

    container(content)
        .padding(offset_padding(zoom.translate_x, zoom.translate_y))
        .center(Length::Fill)
        .clip(true)
        .into()
}

/// Size of an image fitted into `available` (never upscaled), times `scale`.
fn displayed_size(width: u32, height: u32, available: Size, scale: f32) -> Size {
    if width == 0 || height == 0 {
        return Size::ZERO;
    }
    #[allow(clippy::cast_precision_loss)]
    let (width, height) = (width as f32, height as f32);
    let fit = (available.width / width)
        .min(available.height / height)
        .clamp(0.0, 1.0);
    Size::new(width * fit * scale, height * fit * scale)
}

/// Padding that moves a centered child by `(dx, dy)`.
fn offset_padding(dx: f32, dy: f32) -> Padding {
    Padding {
        top: (2.0 * dy).max(0.0),
        right: (-2.0 * dx).max(0.0),
        bottom: (-2.0 * dy).max(0.0),
        left: (2.0 * dx).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_images_are_not_upscaled_when_fitted() {
        let size = displayed_size(200, 100, Size::new(800.0, 600.0), 1.0);
        assert_eq!(size, Size::new(200.0, 100.0));
    }

    #[test]
    fn large_images_fit_the_limiting_side() {
        let size = displayed_size(1600, 800, Size::new(800.0, 600.0), 1.0);
        assert_eq!(size, Size::new(800.0, 400.0));
    }

    #[test]
    fn zoom_multiplies_fitted_size() {
        let size = displayed_size(1600, 800, Size::new(800.0, 600.0), 2.0);
        assert_eq!(size, Size::new(1600.0, 800.0));
    }

    #[test]
    fn empty_image_has_no_size() {
        assert_eq!(displayed_size(0, 10, Size::new(10.0, 10.0), 1.0), Size::ZERO);
    }

    #[test]
    fn padding_shifts_towards_pan() {
        let padding = offset_padding(10.0, -5.0);
        assert_eq!(padding.left, 20.0);
        assert_eq!(padding.right, 0.0);
        assert_eq!(padding.top, 0.0);
        assert_eq!(padding.bottom, 10.0);

        let none = offset_padding(0.0, 0.0);
        assert_eq!(none, Padding::ZERO);
    }
}
