// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Result;
use crate::ui::dashboard;
use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Dashboard(dashboard::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving toast auto-dismiss.
    Tick(Instant),
    /// Result of asking the auth gate to end the session.
    SignedOut(Result<()>),
    Quit,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
}
