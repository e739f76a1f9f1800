// SPDX-License-Identifier: MPL-2.0
//! Todo data port.
//!
//! Mutations are fire-and-forget from the UI's point of view: the list shown
//! on screen only ever changes through snapshots delivered by a
//! [`TodoSubscription`].

use crate::domain::todo::{Todo, TodoId};
use crate::error::Result;
use futures_util::future::BoxFuture;
use futures_util::stream::{BoxStream, Stream, StreamExt};
use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};

pub trait TodoStore: Send + Sync {
    fn create(&self, content: String) -> BoxFuture<'static, Result<Todo>>;

    fn update(&self, id: TodoId, is_done: bool) -> BoxFuture<'static, Result<()>>;

    fn delete(&self, id: TodoId) -> BoxFuture<'static, Result<()>>;

    /// Registers a listener. The first item is the current list; every
    /// later item is the full list after a change.
    fn observe(&self) -> TodoSubscription;
}

/// Live list of todos. Dropping the handle unregisters the listener.
pub struct TodoSubscription {
    snapshots: BoxStream<'static, Vec<Todo>>,
    on_unsubscribe: Option<Box<dyn FnOnce() + Send>>,
}

impl TodoSubscription {
    pub fn new(
        snapshots: BoxStream<'static, Vec<Todo>>,
        on_unsubscribe: impl FnOnce() + Send + 'static,
    ) -> Self {
        Self {
            snapshots,
            on_unsubscribe: Some(Box::new(on_unsubscribe)),
        }
    }
}

impl Stream for TodoSubscription {
    type Item = Vec<Todo>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.snapshots.poll_next_unpin(cx)
    }
}

impl Drop for TodoSubscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.on_unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl fmt::Debug for TodoSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoSubscription").finish_non_exhaustive()
    }
}
