// SPDX-License-Identifier: MPL-2.0
//! Object storage backed by a local directory.
//!
//! Object keys are `/`-separated paths relative to the root. Listing behaves
//! like a cloud object store: keys come back in lexical order, and a folder
//! prefix that exists as a directory is itself listed as a marker entry.
//! Cursors encode the last key of the previous page.

use crate::application::port::{ImageResolver, ImageUploader, StorageLister};
use crate::domain::gallery::{Cursor, FileItem, ListPage, ListRequest};
use crate::error::{Error, Result};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: Arc<PathBuf>,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Arc::new(root.into()),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the root directory if needed.
    pub fn ensure_root(&self) -> Result<()> {
        fs::create_dir_all(self.root.as_path())?;
        Ok(())
    }
}

/// Maps an object key to a file below `root`, refusing keys that escape it.
fn object_path(root: &Path, key: &str) -> Result<PathBuf> {
    if key.is_empty() || key.ends_with('/') || key.contains('\\') {
        return Err(Error::Storage(format!("invalid object key: {key:?}")));
    }
    let relative = Path::new(key);
    let mut path = root.to_path_buf();
    for component in relative.components() {
        match component {
            Component::Normal(part) => path.push(part),
            _ => return Err(Error::Storage(format!("object key escapes storage root: {key:?}"))),
        }
    }
    Ok(path)
}

fn collect_keys(dir: &Path, key_prefix: &str, out: &mut Vec<String>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            tracing::debug!(path = %entry.path().display(), "skipping non UTF-8 file name");
            continue;
        };
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            let nested = format!("{key_prefix}{name}/");
            out.push(nested.clone());
            collect_keys(&entry.path(), &nested, out)?;
        } else if file_type.is_file() {
            out.push(format!("{key_prefix}{name}"));
        }
    }
    Ok(())
}

/// Returns every key starting with `prefix`, sorted.
fn list_keys(root: &Path, prefix: &str) -> Result<Vec<String>> {
    let (dir_part, _) = prefix.rsplit_once('/').unwrap_or(("", prefix));
    let dir_key = if dir_part.is_empty() {
        String::new()
    } else {
        format!("{dir_part}/")
    };
    let dir = if dir_key.is_empty() {
        root.to_path_buf()
    } else {
        object_path(root, dir_part)?
    };
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut keys = Vec::new();
    if !dir_key.is_empty() {
        keys.push(dir_key.clone());
    }
    collect_keys(&dir, &dir_key, &mut keys)?;
    keys.retain(|key| key.starts_with(prefix));
    keys.sort();
    Ok(keys)
}

fn encode_cursor(key: &str) -> Cursor {
    let mut token = String::with_capacity(key.len() * 2);
    for byte in key.bytes() {
        token.push_str(&format!("{byte:02x}"));
    }
    Cursor::new(token)
}

fn decode_cursor(cursor: &Cursor) -> Result<String> {
    let token = cursor.as_str();
    let invalid = || Error::Storage(format!("invalid continuation token: {token:?}"));
    if token.len() % 2 != 0 {
        return Err(invalid());
    }
    let bytes = (0..token.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&token[i..i + 2], 16).map_err(|_| invalid()))
        .collect::<Result<Vec<u8>>>()?;
    String::from_utf8(bytes).map_err(|_| invalid())
}

fn list_page(root: &Path, request: &ListRequest) -> Result<ListPage> {
    let keys = list_keys(root, &request.prefix)?;
    let start = match &request.cursor {
        Some(cursor) => {
            let after = decode_cursor(cursor)?;
            keys.partition_point(|key| key.as_str() <= after.as_str())
        }
        None => 0,
    };
    let page_size = request.page_size.max(1) as usize;
    let end = (start + page_size).min(keys.len());
    let items: Vec<FileItem> = keys[start..end].iter().map(FileItem::new).collect();
    let next_cursor = if end < keys.len() {
        items.last().map(|item| encode_cursor(&item.path))
    } else {
        None
    };
    Ok(ListPage { items, next_cursor })
}

async fn blocking<T: Send + 'static>(job: impl FnOnce() -> Result<T> + Send + 'static) -> Result<T> {
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|err| Error::Io(format!("storage worker failed: {err}")))?
}

impl StorageLister for LocalStorage {
    fn list(&self, request: ListRequest) -> BoxFuture<'static, Result<ListPage>> {
        let root = Arc::clone(&self.root);
        blocking(move || list_page(&root, &request)).boxed()
    }
}

impl ImageResolver for LocalStorage {
    fn resolve(&self, path: &str) -> BoxFuture<'static, Result<Vec<u8>>> {
        let target = object_path(&self.root, path);
        let key = path.to_string();
        async move {
            let target = target?;
            tokio::fs::read(&target).await.map_err(|err| match err.kind() {
                io::ErrorKind::NotFound => Error::Storage(format!("no such object: {key}")),
                _ => Error::from(err),
            })
        }
        .boxed()
    }
}

impl ImageUploader for LocalStorage {
    fn upload(&self, path: String, bytes: Vec<u8>) -> BoxFuture<'static, Result<FileItem>> {
        let target = object_path(&self.root, &path);
        async move {
            let target = target?;
            if let Some(parent) = target.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(&target, &bytes).await?;
            tracing::info!(key = %path, size = bytes.len(), "stored object");
            Ok(FileItem::new(path))
        }
        .boxed()
    }
}
