// SPDX-License-Identifier: MPL-2.0
//! Toast queue.
//!
//! At most [`MAX_SHOWN`] toasts are on screen; the rest wait in arrival
//! order. Pushing a toast whose text is already shown or waiting restarts
//! that toast instead of adding a duplicate, so a failing page load that is
//! retried several times leaves a single error.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;
use std::time::Instant;

pub const MAX_SHOWN: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    shown: VecDeque<Notification>,
    waiting: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Warning => tracing::warn!(
                key = notification.message_key(),
                args = ?notification.message_args(),
                "notification"
            ),
            Severity::Error => tracing::error!(
                key = notification.message_key(),
                args = ?notification.message_args(),
                "notification"
            ),
            Severity::Success | Severity::Info => tracing::debug!(
                key = notification.message_key(),
                "notification"
            ),
        }

        let now = Instant::now();
        if let Some(existing) = self
            .shown
            .iter_mut()
            .chain(self.waiting.iter_mut())
            .find(|existing| existing.same_message(&notification))
        {
            existing.refresh(now);
            return;
        }

        if self.shown.len() < MAX_SHOWN {
            self.shown.push_front(notification);
        } else {
            self.waiting.push_back(notification);
        }
    }

    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.len();
        self.shown.retain(|n| n.id() != id);
        self.waiting.retain(|n| n.id() != id);
        self.fill();
        self.len() < before
    }

    /// Removes every toast with `key`, e.g. a stale error once the failing
    /// operation succeeds.
    pub fn dismiss_key(&mut self, key: &str) {
        self.shown.retain(|n| n.message_key() != key);
        self.waiting.retain(|n| n.message_key() != key);
        self.fill();
    }

    /// Drops shown toasts whose lifetime ended at `now`.
    pub fn expire(&mut self, now: Instant) {
        self.shown.retain(|n| !n.is_expired(now));
        self.fill();
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    pub fn shown(&self) -> impl Iterator<Item = &Notification> {
        self.shown.iter()
    }

    #[must_use]
    pub fn waiting_count(&self) -> usize {
        self.waiting.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        self.len() > 0
    }

    pub fn clear(&mut self) {
        self.shown.clear();
        self.waiting.clear();
    }

    fn len(&self) -> usize {
        self.shown.len() + self.waiting.len()
    }

    fn fill(&mut self) {
        while self.shown.len() < MAX_SHOWN {
            let Some(next) = self.waiting.pop_front() else {
                break;
            };
            self.shown.push_back(next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn keys(manager: &Manager) -> Vec<&str> {
        manager.shown().map(Notification::message_key).collect()
    }

    #[test]
    fn overflow_waits_in_order() {
        let mut manager = Manager::new();
        for key in ["a", "b", "c", "d", "e"] {
            manager.push(Notification::error(key));
        }
        assert_eq!(keys(&manager), ["c", "b", "a"]);
        assert_eq!(manager.waiting_count(), 2);

        let newest = manager.shown().next().map(Notification::id).expect("shown");
        assert!(manager.dismiss(newest));
        assert_eq!(keys(&manager), ["b", "a", "d"]);
        assert_eq!(manager.waiting_count(), 1);
    }

    #[test]
    fn repeated_failures_collapse() {
        let mut manager = Manager::new();
        let error = crate::error::Error::Network("offline".into());
        for _ in 0..4 {
            manager.push(Notification::failure("notification-gallery-error", &error));
        }
        assert_eq!(keys(&manager), ["notification-gallery-error"]);
        assert_eq!(manager.waiting_count(), 0);
    }

    #[test]
    fn different_arguments_are_distinct() {
        let mut manager = Manager::new();
        manager.push(Notification::success("notification-upload-success").with_arg("name", "a.png"));
        manager.push(Notification::success("notification-upload-success").with_arg("name", "b.png"));
        assert_eq!(manager.shown().count(), 2);
    }

    #[test]
    fn dismiss_key_clears_stale_errors() {
        let mut manager = Manager::new();
        manager.push(Notification::error("notification-gallery-error"));
        manager.push(Notification::warning("notification-state-write-error"));
        manager.push(Notification::error("notification-todo-error"));
        manager.push(Notification::info("queued"));

        manager.dismiss_key("notification-gallery-error");
        assert!(manager.shown().all(|n| n.message_key() != "notification-gallery-error"));
        assert_eq!(manager.shown().count(), 3);
        assert_eq!(manager.waiting_count(), 0);
    }

    #[test]
    fn expire_keeps_errors() {
        let mut manager = Manager::new();
        manager.push(Notification::success("notification-upload-success"));
        manager.push(Notification::error("notification-sign-out-error"));

        manager.expire(Instant::now() + Duration::from_secs(60));
        assert_eq!(keys(&manager), ["notification-sign-out-error"]);
    }

    #[test]
    fn unknown_id_is_not_dismissed() {
        let mut manager = Manager::new();
        let stray = Notification::info("stray").id();
        manager.push(Notification::info("kept"));
        assert!(!manager.dismiss(stray));
        assert!(manager.has_notifications());

        let kept = manager.shown().next().map(Notification::id).expect("shown");
        manager.handle_message(&Message::Dismiss(kept));
        assert!(!manager.has_notifications());
    }
}
