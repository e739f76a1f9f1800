// SPDX-License-Identifier: MPL-2.0
//! Update handlers for the application.
//!
//! Each handler receives an [`UpdateContext`] borrowing the parts of `App` it
//! may touch, and turns component effects into application-level changes.

use super::persisted_state::AppState;
use super::{Message, Screen};
use crate::application::port::AuthGate;
use crate::error::Result;
use crate::ui::dashboard::{self, Dashboard};
use crate::ui::notifications::{self, Notification};
use iced::Task;
use std::sync::Arc;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub dashboard: &'a mut Option<Dashboard>,
    pub auth: &'a Arc<dyn AuthGate>,
    pub dark_mode: &'a mut bool,
    pub app_state: &'a mut AppState,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_dashboard_message(ctx: &mut UpdateContext<'_>, message: dashboard::Message) -> Task<Message> {
    let Some(dashboard) = ctx.dashboard.as_mut() else {
        // Late results after sign-out have nowhere to go.
        tracing::debug!(?message, "dropping dashboard message after sign-out");
        return Task::none();
    };

    let (effect, task) = dashboard.handle_message(message);
    let task = task.map(Message::Dashboard);
    let follow_up = apply_effect(ctx, effect);
    Task::batch([task, follow_up])
}

fn apply_effect(ctx: &mut UpdateContext<'_>, effect: dashboard::Effect) -> Task<Message> {
    match effect {
        dashboard::Effect::None => Task::none(),
        dashboard::Effect::Notify(notification) => {
            ctx.notifications.push(notification);
            Task::none()
        }
        dashboard::Effect::DismissNotification(key) => {
            ctx.notifications.dismiss_key(key);
            Task::none()
        }
        dashboard::Effect::DarkModeChanged(dark) => {
            *ctx.dark_mode = dark;
            ctx.app_state.dark_mode = Some(dark);
            persist_state(ctx);
            Task::none()
        }
        dashboard::Effect::UploadDirectoryChanged(dir) => {
            ctx.app_state.last_upload_directory = Some(dir);
            persist_state(ctx);
            Task::none()
        }
        dashboard::Effect::SignOutRequested => {
            tracing::info!("signing out");
            Task::perform(ctx.auth.sign_out(), Message::SignedOut)
        }
    }
}

/// Leaves the dashboard once the auth gate confirms the sign-out.
///
/// Dropping the dashboard drops the to-do panel, which ends its store
/// subscription.
pub fn handle_signed_out(ctx: &mut UpdateContext<'_>, result: Result<()>) -> Task<Message> {
    match result {
        Ok(()) => {
            *ctx.dashboard = None;
            *ctx.screen = Screen::SignedOut;
            ctx.notifications.clear();
        }
        Err(err) => {
            ctx.notifications
                .push(Notification::failure("notification-sign-out-error", &err));
        }
    }
    Task::none()
}

fn persist_state(ctx: &mut UpdateContext<'_>) {
    if let Some(key) = ctx.app_state.save() {
        ctx.notifications.push(Notification::warning(&key));
    }
}
