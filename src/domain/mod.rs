// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains plain value types shared by the ports, the
//! infrastructure adapters and the UI. It depends on `std` only.
//!
//! # Modules
//!
//! - [`gallery`]: Storage listing types ([`FileItem`](gallery::FileItem),
//!   [`Cursor`](gallery::Cursor), [`ListRequest`](gallery::ListRequest),
//!   [`ListPage`](gallery::ListPage))
//! - [`todo`]: Todo records ([`Todo`](todo::Todo), [`TodoId`](todo::TodoId))
//! - [`account`]: Signed-in identity ([`User`](account::User))

pub mod account;
pub mod gallery;
pub mod todo;

pub use account::User;
pub use gallery::{Cursor, FileItem, ListPage, ListRequest};
pub use todo::{Todo, TodoId};
