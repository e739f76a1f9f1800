// SPDX-License-Identifier: MPL-2.0
//! Query services (CQRS read-side).
//!
//! - [`gallery`]: Incremental storage listing (`PageLoader`)
//!
//! Query services never mutate backend data. They own the client-side view
//! of it and the bookkeeping needed to fetch more.

pub mod gallery;

pub use gallery::{FooterStatus, LoadOutcome, LoadState, PageLoader, PendingLoad};
