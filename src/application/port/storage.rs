// SPDX-License-Identifier: MPL-2.0
//! Object storage ports.

use crate::domain::gallery::{FileItem, ListPage, ListRequest};
use crate::error::Result;
use futures_util::future::BoxFuture;

/// Lists objects under a prefix, one page at a time.
///
/// Implementations must paginate stably: for a given prefix, following the
/// returned cursors visits every object once and eventually yields a page
/// without a cursor.
pub trait StorageLister: Send + Sync {
    fn list(&self, request: ListRequest) -> BoxFuture<'static, Result<ListPage>>;
}

/// Turns a listed path into displayable image bytes.
pub trait ImageResolver: Send + Sync {
    fn resolve(&self, path: &str) -> BoxFuture<'static, Result<Vec<u8>>>;
}

/// Stores a new object.
pub trait ImageUploader: Send + Sync {
    /// Uploads `bytes` under the full object key `path` and returns the stored item.
    fn upload(&self, path: String, bytes: Vec<u8>) -> BoxFuture<'static, Result<FileItem>>;
}
