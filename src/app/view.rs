// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: the current screen, the gallery viewer overlay when
//! an image is open, and the toast notifications.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::dashboard::{self, Dashboard};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{self, toast};
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Stack};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub dashboard: Option<&'a Dashboard>,
    pub login_id: &'a str,
    pub dark_mode: bool,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let ViewContext {
        i18n,
        screen,
        dashboard,
        login_id,
        dark_mode,
        notifications,
    } = ctx;

    let mut stack = Stack::new().width(Length::Fill).height(Length::Fill);

    match (screen, dashboard) {
        (Screen::Dashboard, Some(dashboard)) => {
            stack = stack.push(
                dashboard
                    .view(dashboard::ViewEnv {
                        i18n,
                        login_id,
                        dark_mode,
                    })
                    .map(Message::Dashboard),
            );
            if let Some(overlay) = dashboard.view_overlay(i18n) {
                stack = stack.push(overlay.map(Message::Dashboard));
            }
        }
        _ => stack = stack.push(view_signed_out(i18n)),
    }

    stack
        .push(toast::overlay(notifications, i18n).map(Message::Notification))
        .into()
}

fn view_signed_out(i18n: &I18n) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(text(i18n.tr("signed-out-title")).size(typography::TITLE_LG))
        .push(text(i18n.tr("signed-out-body")).size(typography::BODY))
        .push(
            button(text(i18n.tr("signed-out-quit")).size(typography::BODY))
                .on_press(Message::Quit)
                .style(styles::button::primary),
        );

    container(content).center(Length::Fill).into()
}
