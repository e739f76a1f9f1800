// SPDX-License-Identifier: MPL-2.0
//! To-do card.
//!
//! The card subscribes to the store when it is mounted and keeps the
//! subscription alive through an abort handle. Dropping the panel aborts the
//! subscription task, which in turn drops the store listener.

use crate::application::command::todos::{InputProvider, TodoList};
use crate::application::port::TodoStore;
use crate::domain::todo::{Todo, TodoId};
use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::Notification;
use crate::ui::styles;
use futures_util::future::BoxFuture;
use iced::widget::{button, checkbox, scrollable, text, text_input, Column, Row, Space};
use iced::{alignment, task, Element, Length, Task};
use std::sync::Arc;

const ERROR_KEY: &str = "notification-todo-error";
const INPUT_ID: &str = "todo-input";

#[derive(Debug, Clone)]
pub enum Message {
    Snapshot(Vec<Todo>),
    NewPressed,
    DraftChanged(String),
    Submit,
    Cancel,
    Toggle(usize),
    Delete(Option<TodoId>),
    Created(Result<Todo>),
    Updated(Result<()>),
}

#[derive(Debug, Clone)]
pub enum Effect {
    None,
    Notify(Notification),
}

/// Inline text prompt used as the source of new todo content.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Prompt {
    open: bool,
    draft: String,
}

impl Prompt {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn open(&mut self) {
        self.open = true;
        self.draft.clear();
    }

    pub fn cancel(&mut self) {
        self.open = false;
        self.draft.clear();
    }

    pub fn set_draft(&mut self, draft: String) {
        if self.open {
            self.draft = draft;
        }
    }
}

impl InputProvider for Prompt {
    fn take_input(&mut self) -> Option<String> {
        if !self.open {
            return None;
        }
        self.open = false;
        Some(std::mem::take(&mut self.draft))
    }
}

pub struct TodoPanel {
    list: TodoList,
    prompt: Prompt,
    _subscription: task::Handle,
}

impl std::fmt::Debug for TodoPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoPanel")
            .field("todos", &self.list.todos().len())
            .field("prompt", &self.prompt)
            .finish_non_exhaustive()
    }
}

impl TodoPanel {
    /// Mounts the card and starts listening to the store.
    pub fn new(store: Arc<dyn TodoStore>) -> (Self, Task<Message>) {
        let list = TodoList::new(store);
        let (task, handle) = Task::run(list.observe(), Message::Snapshot).abortable();
        let panel = Self {
            list,
            prompt: Prompt::default(),
            _subscription: handle.abort_on_drop(),
        };
        (panel, task)
    }

    #[must_use]
    pub fn todos(&self) -> &[Todo] {
        self.list.todos()
    }

    #[must_use]
    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::Snapshot(todos) => {
                tracing::debug!(count = todos.len(), "todo snapshot received");
                self.list.apply_snapshot(todos);
                (Effect::None, Task::none())
            }
            Message::NewPressed => {
                self.prompt.open();
                (Effect::None, iced::widget::operation::focus(INPUT_ID))
            }
            Message::DraftChanged(draft) => {
                self.prompt.set_draft(draft);
                (Effect::None, Task::none())
            }
            Message::Submit => {
                let task = perform(self.list.create_from(&mut self.prompt), Message::Created);
                (Effect::None, task)
            }
            Message::Cancel => {
                self.prompt.cancel();
                (Effect::None, Task::none())
            }
            Message::Toggle(index) => (Effect::None, perform(self.list.toggle(index), Message::Updated)),
            Message::Delete(id) => (
                Effect::None,
                perform(self.list.delete(id.as_ref()), Message::Updated),
            ),
            Message::Created(result) => (failure_effect(result.err()), Task::none()),
            Message::Updated(result) => (failure_effect(result.err()), Task::none()),
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n, login_id: &str) -> Element<'a, Message> {
        let greeting = text(i18n.tr_with_args("todos-greeting", &[("login", login_id)]))
            .size(typography::TITLE_SM);
        let new_button = button(text(i18n.tr("todos-new")).size(typography::BODY))
            .on_press_maybe((!self.prompt.is_open()).then_some(Message::NewPressed))
            .style(styles::button::primary);

        let header = Row::new()
            .align_y(alignment::Vertical::Center)
            .push(greeting)
            .push(Space::new().width(Length::Fill))
            .push(new_button);

        let mut content = Column::new().spacing(spacing::SM).push(header);

        if self.prompt.is_open() {
            let input = text_input(&i18n.tr("todos-input-placeholder"), self.prompt.draft())
                .id(INPUT_ID)
                .on_input(Message::DraftChanged)
                .on_submit(Message::Submit)
                .padding(spacing::XS);
            content = content.push(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(alignment::Vertical::Center)
                    .push(input)
                    .push(
                        button(text(i18n.tr("todos-add")))
                            .on_press(Message::Submit)
                            .style(styles::button::primary),
                    )
                    .push(button(text(i18n.tr("todos-cancel"))).on_press(Message::Cancel).style(button::text)),
            );
        }

        if self.list.todos().is_empty() {
            content = content.push(text(i18n.tr("todos-empty")).size(typography::BODY));
        } else {
            let rows = self
                .list
                .todos()
                .iter()
                .enumerate()
                .fold(Column::new().spacing(spacing::XS), |rows, (index, todo)| {
                    rows.push(row(index, todo, i18n))
                });
            content = content.push(scrollable(rows).height(Length::Fixed(sizing::GALLERY_HEIGHT)));
        }

        content.into()
    }
}

fn row<'a>(index: usize, todo: &'a Todo, i18n: &'a I18n) -> Element<'a, Message> {
    let done = checkbox(todo.is_done)
        .label(todo.content.as_str())
        .on_toggle(move |_| Message::Toggle(index))
        .width(Length::Fill);
    let delete = button(text(i18n.tr("todos-delete")).size(typography::CAPTION))
        .on_press(Message::Delete(todo.id.clone()))
        .style(styles::button::danger);

    Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(done)
        .push(delete)
        .into()
}

fn perform<T: Send + 'static>(
    call: Option<BoxFuture<'static, Result<T>>>,
    done: fn(Result<T>) -> Message,
) -> Task<Message> {
    call.map_or_else(Task::none, |future| Task::perform(future, done))
}

fn failure_effect(error: Option<Error>) -> Effect {
    match error {
        Some(err) => Effect::Notify(Notification::failure(ERROR_KEY, &err)),
        None => Effect::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryTodoStore;

    #[test]
    fn prompt_hands_out_draft_once() {
        let mut prompt = Prompt::default();
        assert_eq!(prompt.take_input(), None);

        prompt.open();
        prompt.set_draft("water plants".into());
        assert_eq!(prompt.take_input().as_deref(), Some("water plants"));
        assert!(!prompt.is_open());
        assert_eq!(prompt.take_input(), None);
    }

    #[test]
    fn closed_prompt_ignores_typing() {
        let mut prompt = Prompt::default();
        prompt.set_draft("ghost".into());
        assert_eq!(prompt.draft(), "");
    }

    #[test]
    fn cancel_discards_draft() {
        let mut prompt = Prompt::default();
        prompt.open();
        prompt.set_draft("never mind".into());
        prompt.cancel();
        assert_eq!(prompt.take_input(), None);
    }

    #[tokio::test]
    async fn dropping_panel_releases_subscription() {
        let store = MemoryTodoStore::in_memory();
        let (panel, _task) = TodoPanel::new(Arc::new(store.clone()));
        assert_eq!(store.subscriber_count(), 1);

        drop(_task);
        drop(panel);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn snapshot_replaces_rows() {
        let store = MemoryTodoStore::in_memory();
        let (mut panel, _task) = TodoPanel::new(Arc::new(store));
        panel.handle_message(Message::Snapshot(vec![Todo::new(TodoId::new("1"), "a", false)]));
        assert_eq!(panel.todos().len(), 1);

        panel.handle_message(Message::Snapshot(Vec::new()));
        assert!(panel.todos().is_empty());
    }

    #[test]
    fn submit_closes_prompt() {
        let store = MemoryTodoStore::in_memory();
        let (mut panel, _task) = TodoPanel::new(Arc::new(store));
        panel.handle_message(Message::NewPressed);
        panel.handle_message(Message::DraftChanged("call mom".into()));
        panel.handle_message(Message::Submit);
        assert!(!panel.prompt().is_open());
    }

    #[test]
    fn failed_mutation_notifies() {
        let store = MemoryTodoStore::in_memory();
        let (mut panel, _task) = TodoPanel::new(Arc::new(store));
        let (effect, _) = panel.handle_message(Message::Updated(Err(Error::Data("boom".into()))));
        assert!(matches!(effect, Effect::Notify(_)));
    }
}
