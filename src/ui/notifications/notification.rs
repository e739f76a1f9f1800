// SPDX-License-Identifier: MPL-2.0
//! A single toast: severity, localized message key and its arguments.

use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    /// Stays until dismissed.
    Error,
}

impl Severity {
    #[must_use]
    pub fn accent(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Info => "i",
            Severity::Warning | Severity::Error => "!",
        }
    }

    /// How long a toast of this severity stays on screen, `None` for sticky.
    #[must_use]
    pub fn lifetime(self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(6)),
            Severity::Error => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    key: String,
    args: Vec<(String, String)>,
    shown_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            key: key.into(),
            args: Vec::new(),
            shown_at: Instant::now(),
        }
    }

    pub fn success(key: impl Into<String>) -> Self {
        Self::new(Severity::Success, key)
    }

    pub fn info(key: impl Into<String>) -> Self {
        Self::new(Severity::Info, key)
    }

    pub fn warning(key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, key)
    }

    pub fn error(key: impl Into<String>) -> Self {
        Self::new(Severity::Error, key)
    }

    /// Error toast for a failed backend call; the message receives the error
    /// text as `$reason`.
    pub fn failure(key: impl Into<String>, error: &Error) -> Self {
        Self::error(key).with_arg("reason", error.to_string())
    }

    #[must_use]
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.args
    }

    /// Whether `other` would display the same text.
    #[must_use]
    pub fn same_message(&self, other: &Notification) -> bool {
        self.key == other.key && self.args == other.args
    }

    /// Restarts the display timer.
    pub(super) fn refresh(&mut self, now: Instant) {
        self.shown_at = now;
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.severity
            .lifetime()
            .is_some_and(|lifetime| now.saturating_duration_since(self.shown_at) >= lifetime)
    }

    /// Resolves the message in the current locale.
    #[must_use]
    pub fn text(&self, i18n: &I18n) -> String {
        if self.args.is_empty() {
            return i18n.tr(&self.key);
        }
        let args: Vec<(&str, &str)> = self
            .args
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        i18n.tr_with_args(&self.key, &args)
    }
}
