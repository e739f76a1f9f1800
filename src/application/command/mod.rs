// SPDX-License-Identifier: MPL-2.0
//! Command services (CQRS write-side).
//!
//! - [`todos`]: Todo list mutations (`TodoList`, `InputProvider`)

pub mod todos;

pub use todos::{InputProvider, TodoList};
