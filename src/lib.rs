// SPDX-License-Identifier: MPL-2.0
//! `skyboard` is a desktop dashboard built with the Iced GUI framework.
//!
//! It shows a paginated gallery of images kept in object storage, with a
//! zoom/pan viewer, next to a live to-do list. Backends sit behind the traits
//! in [`application::port`]; [`infrastructure`] provides local-file, HTTP and
//! in-process implementations.

#![doc(html_root_url = "https://docs.rs/skyboard/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod ui;
