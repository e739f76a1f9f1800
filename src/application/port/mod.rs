// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines the contracts the dashboard consumes from its
//! backend. Infrastructure adapters implement them; tests substitute fakes.
//!
//! # Available Ports
//!
//! - [`storage`]: Paginated object listing, image resolution and upload
//! - [`data`]: Todo records with live snapshots
//! - [`auth`]: Current identity and sign-out
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no HTTP types)
//! - Traits are `Send + Sync` so one instance can be shared behind an `Arc`
//! - Asynchronous methods return a boxed `'static` future instead of using
//!   `async fn`, so callers can hand them straight to `Task::perform`

pub mod auth;
pub mod data;
pub mod storage;

pub use auth::AuthGate;
pub use data::{TodoStore, TodoSubscription};
pub use storage::{ImageResolver, ImageUploader, StorageLister};
