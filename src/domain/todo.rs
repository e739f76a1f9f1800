// SPDX-License-Identifier: MPL-2.0
//! Todo records.

use std::fmt;

/// Identifier assigned to a todo by the data service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(String);

impl TodoId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A todo as seen by the UI.
///
/// The identifier is optional: a record that has not been acknowledged by
/// the data service yet has none, and mutations on it are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: Option<TodoId>,
    pub content: String,
    pub is_done: bool,
}

impl Todo {
    #[must_use]
    pub fn new(id: TodoId, content: impl Into<String>, is_done: bool) -> Self {
        Self {
            id: Some(id),
            content: content.into(),
            is_done,
        }
    }
}
