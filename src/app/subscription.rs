// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native input is only routed while the gallery viewer is open: the overlay
//! covers the window then, so every keyboard, mouse and touch event belongs to
//! it. Events are forwarded regardless of capture status because the image
//! and backdrop mouse areas capture the presses the viewer needs to see.

use super::Message;
use crate::ui::dashboard;
use crate::ui::gallery;
use iced::{event, time, Subscription};
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Routes raw input to the viewer while it is open.
pub fn create_event_subscription(viewer_open: bool) -> Subscription<Message> {
    if !viewer_open {
        return Subscription::none();
    }

    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Keyboard(..) | event::Event::Mouse(..) | event::Event::Touch(..) => {
            Some(Message::Dashboard(dashboard::Message::Gallery(
                gallery::Message::RawEvent(event),
            )))
        }
        _ => None,
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
