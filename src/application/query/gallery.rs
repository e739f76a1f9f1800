// SPDX-License-Identifier: MPL-2.0
//! Incremental gallery listing.
//!
//! [`PageLoader`] accumulates the objects stored under one prefix, one page
//! per call. At most one fetch is in flight at a time and, once the backend
//! returns a page without a cursor, the loader never fetches again.
//!
//! The loader is split in two halves so the UI can drive it from its update
//! loop: [`PageLoader::begin`] produces the request to send and
//! [`PageLoader::finish`] applies the response. [`PageLoader::load_next_page`]
//! chains both for callers that can simply await.

use crate::application::port::StorageLister;
use crate::domain::gallery::{Cursor, FileItem, ListPage, ListRequest};
use crate::error::{Error, Result};
use std::collections::HashSet;

/// Whether a fetch is currently outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
}

/// A request handed out by [`PageLoader::begin`].
///
/// The generation ties the response back to the loader state that asked for
/// it; results from before a [`PageLoader::reset`] are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLoad {
    pub request: ListRequest,
    pub generation: u64,
}

/// What [`PageLoader::finish`] did with a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The page was applied; `added` items were appended.
    Appended { added: usize },
    /// The fetch failed. Nothing changed and the user may try again.
    Failed(Error),
    /// The response belonged to an earlier mount and was discarded.
    Stale,
}

/// Pagination footer to display under the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterStatus {
    Loading,
    /// More pages exist; the payload is the page size.
    LoadMore(u32),
    AllLoaded,
    Empty,
}

#[derive(Debug, Clone)]
pub struct PageLoader {
    prefix: String,
    page_size: u32,
    items: Vec<FileItem>,
    seen: HashSet<String>,
    cursor: Option<Cursor>,
    has_more: bool,
    state: LoadState,
    generation: u64,
}

impl PageLoader {
    #[must_use]
    pub fn new(prefix: impl Into<String>, page_size: u32) -> Self {
        Self {
            prefix: prefix.into(),
            page_size: page_size.max(1),
            items: Vec::new(),
            seen: HashSet::new(),
            cursor: None,
            has_more: true,
            state: LoadState::Idle,
            generation: 0,
        }
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Items accumulated so far, first page first.
    #[must_use]
    pub fn items(&self) -> &[FileItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&FileItem> {
        self.items.get(index)
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    #[must_use]
    pub fn state(&self) -> LoadState {
        self.state
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    #[must_use]
    pub fn cursor(&self) -> Option<&Cursor> {
        self.cursor.as_ref()
    }

    #[must_use]
    pub fn footer(&self) -> FooterStatus {
        match (self.state, self.has_more) {
            (LoadState::Loading, _) => FooterStatus::Loading,
            (LoadState::Idle, true) => FooterStatus::LoadMore(self.page_size),
            (LoadState::Idle, false) if self.items.is_empty() => FooterStatus::Empty,
            (LoadState::Idle, false) => FooterStatus::AllLoaded,
        }
    }

    /// Starts a fetch if none is in flight and more pages exist.
    ///
    /// Returns `None` (and changes nothing) otherwise.
    pub fn begin(&mut self) -> Option<PendingLoad> {
        if self.state == LoadState::Loading || !self.has_more {
            return None;
        }
        self.state = LoadState::Loading;
        let request = ListRequest {
            prefix: self.prefix.clone(),
            page_size: self.page_size,
            cursor: self.cursor.clone(),
        };
        tracing::debug!(
            prefix = %request.prefix,
            page_size = request.page_size,
            cursor = ?request.cursor.as_ref().map(Cursor::as_str),
            "requesting gallery page"
        );
        Some(PendingLoad {
            request,
            generation: self.generation,
        })
    }

    /// Applies the response to a request produced by [`begin`](Self::begin).
    pub fn finish(&mut self, generation: u64, result: Result<ListPage>) -> LoadOutcome {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "dropping stale page");
            return LoadOutcome::Stale;
        }
        self.state = LoadState::Idle;

        match result {
            Ok(page) => {
                let before = self.items.len();
                for item in page.items {
                    if item.is_marker_for(&self.prefix) {
                        continue;
                    }
                    if self.seen.insert(item.path.clone()) {
                        self.items.push(item);
                    } else {
                        tracing::debug!(path = %item.path, "skipping already listed item");
                    }
                }
                self.has_more = page.next_cursor.is_some();
                self.cursor = page.next_cursor;
                let added = self.items.len() - before;
                tracing::debug!(added, total = self.items.len(), has_more = self.has_more, "gallery page applied");
                LoadOutcome::Appended { added }
            }
            Err(err) => {
                tracing::warn!(prefix = %self.prefix, %err, "failed to load gallery page");
                LoadOutcome::Failed(err)
            }
        }
    }

    /// Fetches and applies the next page through `lister`.
    ///
    /// Returns `None` without calling the backend when a fetch is already in
    /// flight or the listing is exhausted.
    pub async fn load_next_page(&mut self, lister: &dyn StorageLister) -> Option<LoadOutcome> {
        let pending = self.begin()?;
        let result = lister.list(pending.request).await;
        Some(self.finish(pending.generation, result))
    }

    /// Clears everything, as on a fresh mount. Outstanding fetches become stale.
    pub fn reset(&mut self) {
        self.items.clear();
        self.seen.clear();
        self.cursor = None;
        self.has_more = true;
        self.state = LoadState::Idle;
        self.generation = self.generation.wrapping_add(1);
    }
}
