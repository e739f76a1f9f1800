// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one exposes `handle_message` returning an `Effect` for the application and
//! a `Task` for asynchronous work, plus a `view` taking its environment.
//!
//! # Screens and cards
//!
//! - [`dashboard`] - Header, card grid and upload section
//! - [`gallery`] - Paginated thumbnail grid with the zoom/pan viewer overlay
//! - [`todos`] - Live to-do list with an inline prompt
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable state (zoom, drag, touch gestures)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod dashboard;
pub mod design_tokens;
pub mod gallery;
pub mod notifications;
pub mod state;
pub mod styles;
pub mod theming;
pub mod todos;
