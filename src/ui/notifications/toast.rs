// SPDX-License-Identifier: MPL-2.0
//! Toast overlay, anchored to the bottom-right corner of the window.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, row, text, Column, Space};
use iced::{alignment, Element, Length};

/// Every shown toast, newest on top. Renders nothing when the queue is empty.
pub fn overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
    if !manager.has_notifications() {
        return Space::new().into();
    }

    let toasts = Column::with_children(manager.shown().map(|n| toast(n, i18n)))
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

    container(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

fn toast<'a>(notification: &Notification, i18n: &I18n) -> Element<'a, Message> {
    let accent = notification.severity().accent();

    let body = row![
        text(notification.severity().glyph())
            .size(typography::TITLE_SM)
            .color(accent),
        text(notification.text(i18n))
            .size(typography::BODY)
            .width(Length::Fill),
        button(text("×").size(typography::BODY))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(styles::button::dismiss),
    ]
    .spacing(spacing::SM)
    .align_y(alignment::Vertical::Center);

    container(body)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme| styles::container::toast(theme, accent))
        .into()
}
