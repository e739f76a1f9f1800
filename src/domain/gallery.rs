// SPDX-License-Identifier: MPL-2.0
//! Storage listing types.
//!
//! A listing is requested page by page under a folder prefix. Each page
//! carries an opaque [`Cursor`] pointing at the next page, or none when the
//! listing is exhausted.

/// One object listed in remote storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileItem {
    /// Full object key, unique within the listed prefix.
    pub path: String,
}

impl FileItem {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Returns `true` if this entry is the folder marker for `prefix` itself.
    #[must_use]
    pub fn is_marker_for(&self, prefix: &str) -> bool {
        self.path == prefix
    }

    /// Returns the last path segment, used as a caption.
    #[must_use]
    pub fn display_name(&self) -> &str {
        let trimmed = self.path.trim_end_matches('/');
        trimmed.rsplit('/').next().unwrap_or(trimmed)
    }
}

/// Opaque continuation token returned by a listing call.
///
/// Only the backend that produced a cursor knows how to interpret it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cursor(String);

impl Cursor {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Parameters of one listing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub prefix: String,
    pub page_size: u32,
    /// `None` requests the first page.
    pub cursor: Option<Cursor>,
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListPage {
    pub items: Vec<FileItem>,
    /// `None` signals the end of the listing.
    pub next_cursor: Option<Cursor>,
}
