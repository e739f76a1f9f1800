// SPDX-License-Identifier: MPL-2.0
//! Todo list mutations.
//!
//! [`TodoList`] keeps the last snapshot received from the data service and
//! turns user intents into store calls. It never edits its own copy of the
//! list: the next snapshot is the only source of change.

use crate::application::port::{TodoStore, TodoSubscription};
use crate::domain::todo::{Todo, TodoId};
use crate::error::Result;
use futures_util::future::BoxFuture;
use std::sync::Arc;

/// Supplies the content of a new todo, e.g. a text prompt.
pub trait InputProvider {
    /// Returns the entered text, or `None` if the user cancelled.
    fn take_input(&mut self) -> Option<String>;
}

pub struct TodoList {
    store: Arc<dyn TodoStore>,
    todos: Vec<Todo>,
}

impl TodoList {
    #[must_use]
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self {
            store,
            todos: Vec::new(),
        }
    }

    #[must_use]
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Opens a live subscription on the backing store.
    #[must_use]
    pub fn observe(&self) -> TodoSubscription {
        self.store.observe()
    }

    /// Replaces the list with a snapshot pushed by the store.
    pub fn apply_snapshot(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
    }

    /// Creates a todo from the provider's input. Cancelled or blank input is ignored.
    pub fn create_from(
        &self,
        input: &mut dyn InputProvider,
    ) -> Option<BoxFuture<'static, Result<Todo>>> {
        let content = input.take_input()?;
        self.create(&content)
    }

    pub fn create(&self, content: &str) -> Option<BoxFuture<'static, Result<Todo>>> {
        let content = content.trim();
        if content.is_empty() {
            return None;
        }
        tracing::info!("creating todo");
        Some(self.store.create(content.to_string()))
    }

    /// Flips `is_done` on the todo at `index`. No-op when the row has no id.
    pub fn toggle(&self, index: usize) -> Option<BoxFuture<'static, Result<()>>> {
        let todo = self.todos.get(index)?;
        let id = todo.id.clone()?;
        tracing::info!(%id, is_done = !todo.is_done, "toggling todo");
        Some(self.store.update(id, !todo.is_done))
    }

    /// Deletes a todo. No-op when `id` is missing.
    pub fn delete(&self, id: Option<&TodoId>) -> Option<BoxFuture<'static, Result<()>>> {
        let id = id?.clone();
        tracing::info!(%id, "deleting todo");
        Some(self.store.delete(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream::{self, StreamExt};
    use futures_util::FutureExt;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Create(String),
        Update(TodoId, bool),
        Delete(TodoId),
    }

    #[derive(Default)]
    struct RecordingStore {
        calls: Mutex<Vec<Call>>,
    }

    impl TodoStore for RecordingStore {
        fn create(&self, content: String) -> BoxFuture<'static, Result<Todo>> {
            self.calls.lock().unwrap().push(Call::Create(content.clone()));
            async move { Ok(Todo::new(TodoId::new("new"), content, false)) }.boxed()
        }

        fn update(&self, id: TodoId, is_done: bool) -> BoxFuture<'static, Result<()>> {
            self.calls.lock().unwrap().push(Call::Update(id, is_done));
            async { Ok(()) }.boxed()
        }

        fn delete(&self, id: TodoId) -> BoxFuture<'static, Result<()>> {
            self.calls.lock().unwrap().push(Call::Delete(id));
            async { Ok(()) }.boxed()
        }

        fn observe(&self) -> TodoSubscription {
            TodoSubscription::new(stream::empty().boxed(), || {})
        }
    }

    struct Prompt(Option<String>);

    impl InputProvider for Prompt {
        fn take_input(&mut self) -> Option<String> {
            self.0.take()
        }
    }

    fn list_with(store: &Arc<RecordingStore>, todos: Vec<Todo>) -> TodoList {
        let mut list = TodoList::new(Arc::clone(store) as Arc<dyn TodoStore>);
        list.apply_snapshot(todos);
        list
    }

    #[tokio::test]
    async fn create_trims_and_forwards_content() {
        let store = Arc::new(RecordingStore::default());
        let list = list_with(&store, Vec::new());

        let created = list.create("  buy milk ").expect("content is not blank").await;

        assert_eq!(created.unwrap().content, "buy milk");
        assert_eq!(*store.calls.lock().unwrap(), [Call::Create("buy milk".into())]);
    }

    #[test]
    fn blank_or_cancelled_input_creates_nothing() {
        let store = Arc::new(RecordingStore::default());
        let list = list_with(&store, Vec::new());

        assert!(list.create_from(&mut Prompt(None)).is_none());
        assert!(list.create_from(&mut Prompt(Some("   ".into()))).is_none());
        assert!(store.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn toggle_inverts_done_flag() {
        let store = Arc::new(RecordingStore::default());
        let list = list_with(&store, vec![Todo::new(TodoId::new("1"), "a", false)]);

        assert!(list.toggle(0).is_some());
        assert_eq!(
            *store.calls.lock().unwrap(),
            [Call::Update(TodoId::new("1"), true)]
        );
    }

    #[test]
    fn toggle_without_id_or_index_is_noop() {
        let store = Arc::new(RecordingStore::default());
        let pending = Todo {
            id: None,
            content: "pending".into(),
            is_done: false,
        };
        let list = list_with(&store, vec![pending]);

        assert!(list.toggle(0).is_none());
        assert!(list.toggle(5).is_none());
        assert!(store.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn delete_without_id_is_noop() {
        let store = Arc::new(RecordingStore::default());
        let list = list_with(&store, Vec::new());

        assert!(list.delete(None).is_none());
        assert!(list.delete(Some(&TodoId::new("9"))).is_some());
        assert_eq!(*store.calls.lock().unwrap(), [Call::Delete(TodoId::new("9"))]);
    }

    #[test]
    fn snapshot_replaces_list() {
        let store = Arc::new(RecordingStore::default());
        let mut list = list_with(&store, vec![Todo::new(TodoId::new("1"), "old", false)]);

        list.apply_snapshot(vec![Todo::new(TodoId::new("2"), "new", true)]);

        assert_eq!(list.todos().len(), 1);
        assert_eq!(list.todos()[0].content, "new");
    }
}
