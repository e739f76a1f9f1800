// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for upload results and backend failures.
//!
//! Notifications carry an i18n key plus named arguments and are resolved
//! at render time, so a language switch also updates visible toasts.
//!
//! - [`notification`] - `Notification` with severity levels
//! - [`manager`] - `Manager` for queuing, dedup and expiry
//! - [`toast`] - rendering in the bottom-right corner

mod manager;
mod notification;
pub mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
