// SPDX-License-Identifier: MPL-2.0
//! Cache of resolved gallery images.
//!
//! Images are fetched through the storage resolver once and kept as Iced
//! handles, keyed by object path.
//!
//! # Design
//!
//! - **LRU eviction**: Least recently used images are evicted first
//! - **Count-bounded**: Capacity starts at `[gallery] cache_images` and grows
//!   with the listing through [`ImageCache::reserve`], so every listed
//!   thumbnail stays resident once fetched
//! - **Request tracking**: A path is fetched at most once while in flight
//! - **Validation**: Bytes that do not look like a supported image are rejected

use crate::error::{Error, Result};
use iced::widget::image::Handle;
use image_rs::ImageReader;
use lru::LruCache;
use std::collections::HashSet;
use std::io::Cursor;
use std::num::NonZeroUsize;

/// A decoded-on-demand image with its pixel size.
#[derive(Debug, Clone)]
pub struct CachedImage {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

/// Display status of one path.
#[derive(Debug, Clone)]
pub enum ImageSlot {
    /// Never requested, or evicted since.
    Missing,
    Loading,
    Ready(CachedImage),
    Failed,
}

/// Hit/miss counters, logged when the cache is cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

pub struct ImageCache {
    ready: LruCache<String, CachedImage>,
    pending: HashSet<String>,
    failed: HashSet<String>,
    stats: CacheStats,
}

impl ImageCache {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            ready: LruCache::new(capacity),
            pending: HashSet::new(),
            failed: HashSet::new(),
            stats: CacheStats::default(),
        }
    }

    /// Returns the current status of `path` without touching recency.
    #[must_use]
    pub fn slot(&self, path: &str) -> ImageSlot {
        if let Some(image) = self.ready.peek(path) {
            ImageSlot::Ready(image.clone())
        } else if self.pending.contains(path) {
            ImageSlot::Loading
        } else if self.failed.contains(path) {
            ImageSlot::Failed
        } else {
            ImageSlot::Missing
        }
    }

    /// Marks `path` as wanted.
    ///
    /// Returns `true` when the caller should start a fetch: the image is
    /// neither cached nor already in flight. A previous failure is retried.
    pub fn request(&mut self, path: &str) -> bool {
        if self.ready.get(path).is_some() {
            self.stats.hits += 1;
            return false;
        }
        if self.pending.contains(path) {
            return false;
        }
        self.stats.misses += 1;
        self.failed.remove(path);
        self.pending.insert(path.to_string());
        true
    }

    /// Stores fetched bytes for `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Image`] if the bytes are not a recognizable image;
    /// the path is then marked as failed.
    pub fn insert(&mut self, path: &str, bytes: Vec<u8>) -> Result<()> {
        self.pending.remove(path);
        let (width, height) = match read_dimensions(&bytes) {
            Ok(size) => size,
            Err(err) => {
                self.failed.insert(path.to_string());
                return Err(Error::Image(format!("{path}: {err}")));
            }
        };
        let image = CachedImage {
            handle: Handle::from_bytes(bytes),
            width,
            height,
        };
        if let Some((evicted, _)) = self.ready.push(path.to_string(), image) {
            if evicted != path {
                self.stats.evictions += 1;
                tracing::trace!(path = %evicted, "evicted cached image");
            }
        }
        Ok(())
    }

    /// Grows the capacity so that `count` images fit. Never shrinks.
    ///
    /// Returns `true` when the capacity changed.
    pub fn reserve(&mut self, count: usize) -> bool {
        match NonZeroUsize::new(count) {
            Some(wanted) if wanted > self.ready.cap() => {
                tracing::debug!(from = self.ready.cap().get(), to = count, "growing image cache");
                self.ready.resize(wanted);
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.ready.cap().get()
    }

    /// Records a failed fetch for `path`.
    pub fn fail(&mut self, path: &str) {
        self.pending.remove(path);
        self.failed.insert(path.to_string());
    }

    pub fn clear(&mut self) {
        tracing::debug!(stats = ?self.stats, cached = self.ready.len(), "clearing image cache");
        self.ready.clear();
        self.pending.clear();
        self.failed.clear();
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ready.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ready.is_empty()
    }
}

/// Reads the pixel size from the image header without decoding pixels.
fn read_dimensions(bytes: &[u8]) -> image_rs::ImageResult<(u32, u32)> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .into_dimensions()
}
