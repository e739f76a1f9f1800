// SPDX-License-Identifier: MPL-2.0
//! Localized UI strings.
//!
//! Messages live in Fluent files under `assets/i18n/` (`en-US`, `fr`) and are
//! compiled into the binary. The locale is taken from `--lang`, then the
//! `[general] language` setting, then the OS, and `en-US` fills any message a
//! translation lacks.

pub mod fluent;

pub use fluent::I18n;
