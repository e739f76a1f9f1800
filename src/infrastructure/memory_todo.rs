// SPDX-License-Identifier: MPL-2.0
//! In-process todo store with live snapshots.
//!
//! Records live in memory and, when a file is configured, are written back
//! as CBOR after every mutation. Observers receive the full list through a
//! `tokio::sync::watch` channel.
//!
//! Writes are serialised by an async lock and always encode the records as
//! they are when the lock is taken, so the file never falls behind memory
//! however mutations interleave. Each write goes to a sibling temp file
//! that is then renamed over the store.

use crate::application::port::{TodoStore, TodoSubscription};
use crate::domain::todo::{Todo, TodoId};
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use futures_util::future::BoxFuture;
use futures_util::stream::{self, StreamExt};
use futures_util::FutureExt;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::watch;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct TodoRecord {
    id: String,
    content: String,
    #[serde(default)]
    is_done: bool,
    created_at: DateTime<Utc>,
}

impl TodoRecord {
    fn to_todo(&self) -> Todo {
        Todo::new(TodoId::new(self.id.clone()), self.content.clone(), self.is_done)
    }
}

struct Inner {
    records: Mutex<Vec<TodoRecord>>,
    snapshots: watch::Sender<Vec<Todo>>,
    file: Option<PathBuf>,
    /// Held across encode and write.
    write_lock: tokio::sync::Mutex<()>,
    next_id: AtomicU64,
    subscribers: AtomicUsize,
}

impl Inner {
    fn lock(&self) -> Result<MutexGuard<'_, Vec<TodoRecord>>> {
        self.records
            .lock()
            .map_err(|_| Error::Data("todo store lock poisoned".into()))
    }

    fn new_id(&self, now: DateTime<Utc>) -> String {
        let seq = self.next_id.fetch_add(1, Ordering::Relaxed);
        format!("{:x}-{seq:x}", now.timestamp_micros())
    }

    /// Applies `change` and publishes the new list.
    fn mutate<T>(&self, change: impl FnOnce(&mut Vec<TodoRecord>) -> Result<T>) -> Result<T> {
        let mut records = self.lock()?;
        let value = change(&mut records)?;
        let snapshot: Vec<Todo> = records.iter().map(TodoRecord::to_todo).collect();
        drop(records);
        self.snapshots.send_replace(snapshot);
        Ok(value)
    }

    /// Writes the current records to the backing file, if any.
    async fn persist(&self) -> Result<()> {
        let Some(path) = &self.file else {
            return Ok(());
        };
        let _guard = self.write_lock.lock().await;

        let mut bytes = Vec::new();
        {
            let records = self.lock()?;
            ciborium::into_writer(&*records, &mut bytes)
                .map_err(|err| Error::Data(format!("cannot encode todos: {err}")))?;
        }

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let staging = staging_path(path);
        tokio::fs::write(&staging, bytes).await?;
        tokio::fs::rename(&staging, path).await?;
        Ok(())
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Todo store kept in process memory.
#[derive(Clone)]
pub struct MemoryTodoStore {
    inner: Arc<Inner>,
}

impl MemoryTodoStore {
    /// Creates an empty store that is not persisted.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_records(Vec::new(), None)
    }

    /// Opens a store persisted in `path`, loading existing records.
    ///
    /// A missing file starts an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or decoded.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let records = load_records(&path)?;
        tracing::debug!(path = %path.display(), count = records.len(), "opened todo store");
        Ok(Self::with_records(records, Some(path)))
    }

    fn with_records(records: Vec<TodoRecord>, file: Option<PathBuf>) -> Self {
        let snapshot = records.iter().map(TodoRecord::to_todo).collect();
        let (snapshots, _) = watch::channel(snapshot);
        Self {
            inner: Arc::new(Inner {
                records: Mutex::new(records),
                snapshots,
                file,
                write_lock: tokio::sync::Mutex::new(()),
                next_id: AtomicU64::new(0),
                subscribers: AtomicUsize::new(0),
            }),
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.load(Ordering::SeqCst)
    }
}

fn load_records(path: &Path) -> Result<Vec<TodoRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let file = fs::File::open(path)?;
    ciborium::from_reader(BufReader::new(file))
        .map_err(|err| Error::Data(format!("cannot decode {}: {err}", path.display())))
}

fn missing(id: &TodoId) -> Error {
    Error::Data(format!("no todo with id {id}"))
}

impl TodoStore for MemoryTodoStore {
    fn create(&self, content: String) -> BoxFuture<'static, Result<Todo>> {
        let inner = Arc::clone(&self.inner);
        async move {
            let now = Utc::now();
            let record = TodoRecord {
                id: inner.new_id(now),
                content,
                is_done: false,
                created_at: now,
            };
            let todo = record.to_todo();
            inner.mutate(|records| {
                records.push(record);
                Ok(())
            })?;
            inner.persist().await?;
            Ok(todo)
        }
        .boxed()
    }

    fn update(&self, id: TodoId, is_done: bool) -> BoxFuture<'static, Result<()>> {
        let inner = Arc::clone(&self.inner);
        async move {
            inner.mutate(|records| {
                let record = records
                    .iter_mut()
                    .find(|r| r.id == id.as_str())
                    .ok_or_else(|| missing(&id))?;
                record.is_done = is_done;
                Ok(())
            })?;
            inner.persist().await
        }
        .boxed()
    }

    fn delete(&self, id: TodoId) -> BoxFuture<'static, Result<()>> {
        let inner = Arc::clone(&self.inner);
        async move {
            inner.mutate(|records| {
                let index = records
                    .iter()
                    .position(|r| r.id == id.as_str())
                    .ok_or_else(|| missing(&id))?;
                records.remove(index);
                Ok(())
            })?;
            inner.persist().await
        }
        .boxed()
    }

    fn observe(&self) -> TodoSubscription {
        let receiver = self.inner.snapshots.subscribe();
        self.inner.subscribers.fetch_add(1, Ordering::SeqCst);

        let snapshots = stream::unfold((receiver, true), |(mut receiver, first)| async move {
            if !first {
                receiver.changed().await.ok()?;
            }
            let snapshot = receiver.borrow_and_update().clone();
            Some((snapshot, (receiver, false)))
        })
        .boxed();

        let inner = Arc::clone(&self.inner);
        TodoSubscription::new(snapshots, move || {
            inner.subscribers.fetch_sub(1, Ordering::SeqCst);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn subscription_starts_with_current_list() {
        let store = MemoryTodoStore::in_memory();
        store.create("first".into()).await.unwrap();

        let mut subscription = store.observe();
        let snapshot = subscription.next().await.unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].content, "first");
    }

    #[tokio::test]
    async fn mutations_are_pushed_to_observers() {
        let store = MemoryTodoStore::in_memory();
        let mut subscription = store.observe();
        assert!(subscription.next().await.unwrap().is_empty());

        let created = store.create("buy milk".into()).await.unwrap();
        let snapshot = subscription.next().await.unwrap();
        assert_eq!(snapshot, [created.clone()]);

        let id = created.id.clone().unwrap();
        store.update(id.clone(), true).await.unwrap();
        let snapshot = subscription.next().await.unwrap();
        assert!(snapshot[0].is_done);

        store.delete(id).await.unwrap();
        assert!(subscription.next().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_id_is_a_data_error() {
        let store = MemoryTodoStore::in_memory();
        let result = store.update(TodoId::new("nope"), true).await;
        assert!(matches!(result, Err(Error::Data(_))));
        let result = store.delete(TodoId::new("nope")).await;
        assert!(matches!(result, Err(Error::Data(_))));
    }

    #[tokio::test]
    async fn dropping_subscription_unsubscribes() {
        let store = MemoryTodoStore::in_memory();
        let first = store.observe();
        let second = store.observe();
        assert_eq!(store.subscriber_count(), 2);

        drop(first);
        assert_eq!(store.subscriber_count(), 1);
        drop(second);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn ids_are_unique() {
        let store = MemoryTodoStore::in_memory();
        let a = store.create("a".into()).await.unwrap();
        let b = store.create("b".into()).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn records_survive_reopen() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("data").join("todos.cbor");

        let store = MemoryTodoStore::open(&path).unwrap();
        store.create("persisted".into()).await.unwrap();
        drop(store);

        let reopened = MemoryTodoStore::open(&path).unwrap();
        let snapshot = reopened.observe().next().await.unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].content, "persisted");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_all_reach_the_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("todos.cbor");

        for round in 0..10 {
            let store = MemoryTodoStore::open(&path).unwrap();
            let handles: Vec<_> = (0..16)
                .map(|i| tokio::spawn(store.create(format!("todo {round}-{i}"))))
                .collect();
            for handle in handles {
                handle.await.unwrap().unwrap();
            }
            let in_memory = store.observe().next().await.unwrap().len();
            drop(store);

            let reopened = MemoryTodoStore::open(&path).unwrap();
            let on_disk = reopened.observe().next().await.unwrap().len();
            assert_eq!(on_disk, in_memory);
            assert_eq!(on_disk, 16 * (round + 1));
        }
        assert!(!staging_path(&path).exists());
    }

    #[test]
    fn corrupted_file_is_reported() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("todos.cbor");
        fs::write(&path, b"\xff garbage").unwrap();

        assert!(matches!(MemoryTodoStore::open(&path), Err(Error::Data(_))));
    }
}
