// SPDX-License-Identifier: MPL-2.0
//! Dashboard screen: header bar, card grid and the upload section.
//!
//! The dashboard owns the gallery and to-do cards. It forwards their messages,
//! lifts their effects, and runs the upload flow itself. Sign-out and
//! dark-mode changes are reported to the application as effects because they
//! touch state outside the dashboard.

use crate::application::port::{ImageResolver, ImageUploader, StorageLister, TodoStore};
use crate::config::Config;
use crate::domain::gallery::FileItem;
use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::media::{self, IMAGE_EXTENSIONS};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::gallery::{self, Gallery};
use crate::ui::notifications::Notification;
use crate::ui::styles;
use crate::ui::todos::{self, TodoPanel};
use iced::widget::{button, container, scrollable, text, toggler, Column, Row, Space};
use iced::{alignment, Element, Length, Task};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Backend ports the dashboard cards talk to.
#[derive(Clone)]
pub struct Ports {
    pub lister: Arc<dyn StorageLister>,
    pub resolver: Arc<dyn ImageResolver>,
    pub uploader: Arc<dyn ImageUploader>,
    pub todos: Arc<dyn TodoStore>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Todos(todos::Message),
    DarkModeToggled(bool),
    SignOutPressed,
    UploadPressed,
    UploadPicked(Option<PathBuf>),
    Uploaded { name: String, result: Result<FileItem> },
}

/// Side effects the application must handle after an update.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    Notify(Notification),
    DismissNotification(&'static str),
    DarkModeChanged(bool),
    /// The upload picker was confirmed in this directory.
    UploadDirectoryChanged(PathBuf),
    SignOutRequested,
}

pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub login_id: &'a str,
    pub dark_mode: bool,
}

pub struct Dashboard {
    gallery: Gallery,
    todos: TodoPanel,
    uploader: Arc<dyn ImageUploader>,
    upload_prefix: String,
    upload_directory: Option<PathBuf>,
    uploading: bool,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("gallery", &self.gallery)
            .field("todos", &self.todos)
            .field("uploading", &self.uploading)
            .finish_non_exhaustive()
    }
}

impl Dashboard {
    /// Mounts both cards; the returned task loads the first gallery page and
    /// starts the to-do subscription.
    pub fn new(config: &Config, ports: Ports, upload_directory: Option<PathBuf>) -> (Self, Task<Message>) {
        let (gallery, gallery_task) = Gallery::new(config, ports.lister, ports.resolver);
        let (todos, todos_task) = TodoPanel::new(ports.todos);
        let dashboard = Self {
            gallery,
            todos,
            uploader: ports.uploader,
            upload_prefix: config.gallery.prefix(),
            upload_directory,
            uploading: false,
        };
        let task = Task::batch([
            gallery_task.map(Message::Gallery),
            todos_task.map(Message::Todos),
        ]);
        (dashboard, task)
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    #[must_use]
    pub fn todos(&self) -> &TodoPanel {
        &self.todos
    }

    #[must_use]
    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::Gallery(msg) => {
                let (effect, task) = self.gallery.handle_message(msg);
                let effect = match effect {
                    gallery::Effect::None => Effect::None,
                    gallery::Effect::Notify(notification) => Effect::Notify(notification),
                    gallery::Effect::DismissNotification(key) => Effect::DismissNotification(key),
                };
                (effect, task.map(Message::Gallery))
            }
            Message::Todos(msg) => {
                let (effect, task) = self.todos.handle_message(msg);
                let effect = match effect {
                    todos::Effect::None => Effect::None,
                    todos::Effect::Notify(notification) => Effect::Notify(notification),
                };
                (effect, task.map(Message::Todos))
            }
            Message::DarkModeToggled(dark) => (Effect::DarkModeChanged(dark), Task::none()),
            Message::SignOutPressed => (Effect::SignOutRequested, Task::none()),
            Message::UploadPressed => {
                if self.uploading {
                    return (Effect::None, Task::none());
                }
                (Effect::None, pick_image(self.upload_directory.clone()))
            }
            Message::UploadPicked(None) => (Effect::None, Task::none()),
            Message::UploadPicked(Some(path)) => self.start_upload(path),
            Message::Uploaded { name, result } => {
                self.uploading = false;
                let notification = match result {
                    Ok(item) => {
                        tracing::info!(path = %item.path, "upload finished");
                        Notification::success("notification-upload-success").with_arg("name", name)
                    }
                    Err(Error::Io(reason)) => {
                        tracing::warn!(%name, %reason, "cannot read file picked for upload");
                        Notification::error("notification-upload-read-error")
                    }
                    Err(err) => Notification::failure("notification-upload-error", &err),
                };
                (Effect::Notify(notification), Task::none())
            }
        }
    }

    fn start_upload(&mut self, path: PathBuf) -> (Effect, Task<Message>) {
        let Some(name) = path.file_name().and_then(|n| n.to_str()).map(String::from) else {
            return (
                Effect::Notify(Notification::error("notification-upload-read-error")),
                Task::none(),
            );
        };
        if !media::is_supported_image(&path) {
            tracing::warn!(source = %path.display(), "refusing upload of unsupported file type");
            let err = Error::Image(format!("{name} is not a supported image"));
            return (
                Effect::Notify(Notification::failure("notification-upload-error", &err)),
                Task::none(),
            );
        }

        let target = upload_target(&self.upload_prefix, &name);
        tracing::info!(source = %path.display(), %target, "uploading image");
        self.uploading = true;

        let effect = match path_parent(&path) {
            Some(dir) => {
                self.upload_directory = Some(dir.clone());
                Effect::UploadDirectoryChanged(dir)
            }
            None => Effect::None,
        };

        let uploader = Arc::clone(&self.uploader);
        let label = name.clone();
        let task = Task::perform(
            async move {
                let bytes = tokio::fs::read(&path).await?;
                if !media::looks_like_image(&bytes) {
                    return Err(Error::Image(format!("{label} is not a supported image")));
                }
                uploader.upload(target, bytes).await
            },
            move |result| Message::Uploaded {
                name: name.clone(),
                result,
            },
        );
        (effect, task)
    }

    /// The viewer overlay, drawn above the whole window when open.
    pub fn view_overlay<'a>(&'a self, i18n: &'a I18n) -> Option<Element<'a, Message>> {
        self.gallery
            .view_overlay(i18n)
            .map(|overlay| overlay.map(Message::Gallery))
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let ViewEnv {
            i18n,
            login_id,
            dark_mode,
        } = env;

        let gallery_card = card(
            i18n.tr("card-gallery-title"),
            self.gallery.view(i18n).map(Message::Gallery),
        );
        let todos_card = card(
            i18n.tr("card-todos-title"),
            self.todos.view(i18n, login_id).map(Message::Todos),
        );
        let analytics_card = card(
            i18n.tr("card-analytics-title"),
            text(i18n.tr("card-analytics-body")).size(typography::BODY).into(),
        );
        let settings_card = card(
            i18n.tr("card-settings-title"),
            text(i18n.tr("card-settings-body")).size(typography::BODY).into(),
        );

        let main_row = Row::new()
            .spacing(spacing::MD)
            .push(container(gallery_card).width(Length::FillPortion(2)))
            .push(container(todos_card).width(Length::FillPortion(1)));
        let placeholder_row = Row::new()
            .spacing(spacing::MD)
            .push(container(analytics_card).width(Length::Fill).height(Length::Fixed(sizing::CARD_MIN_HEIGHT)))
            .push(container(settings_card).width(Length::Fill).height(Length::Fixed(sizing::CARD_MIN_HEIGHT)));

        let body = Column::new()
            .spacing(spacing::MD)
            .padding(spacing::MD)
            .push(main_row)
            .push(placeholder_row)
            .push(self.upload_section(i18n));

        Column::new()
            .push(header(i18n, login_id, dark_mode))
            .push(scrollable(body).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn upload_section<'a>(&self, i18n: &'a I18n) -> Element<'a, Message> {
        let label = if self.uploading {
            i18n.tr("upload-in-progress")
        } else {
            i18n.tr("upload-button")
        };
        let upload = button(text(label).size(typography::BODY))
            .on_press_maybe((!self.uploading).then_some(Message::UploadPressed))
            .style(styles::button::primary);

        let content = Column::new()
            .spacing(spacing::SM)
            .push(text(i18n.tr("upload-description")).size(typography::BODY))
            .push(upload)
            .into();

        card(i18n.tr("upload-title"), content)
    }
}

fn header<'a>(i18n: &'a I18n, login_id: &str, dark_mode: bool) -> Element<'a, Message> {
    let title = text(i18n.tr("app-title")).size(typography::TITLE_MD);
    let welcome = text(i18n.tr_with_args("header-welcome", &[("login", login_id)])).size(typography::BODY);

    let dark_toggle = toggler(dark_mode)
        .label(i18n.tr("header-dark-mode"))
        .on_toggle(Message::DarkModeToggled)
        .size(20.0);

    let sign_out = button(text(i18n.tr("header-sign-out")).size(typography::BODY))
        .on_press(Message::SignOutPressed)
        .style(styles::button::danger);

    container(
        Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(title)
            .push(Space::new().width(Length::Fill))
            .push(welcome)
            .push(dark_toggle)
            .push(sign_out),
    )
    .padding([spacing::SM, spacing::MD])
    .width(Length::Fill)
    .style(styles::container::header)
    .into()
}

fn card<'a>(title: String, content: Element<'a, Message>) -> Element<'a, Message> {
    container(
        Column::new()
            .spacing(spacing::SM)
            .push(text(title).size(typography::TITLE_SM))
            .push(content),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

fn pick_image(last_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().add_filter("Images", IMAGE_EXTENSIONS);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::UploadPicked,
    )
}

/// Object path an uploaded file is stored under.
fn upload_target(prefix: &str, file_name: &str) -> String {
    format!("{prefix}{file_name}")
}

fn path_parent(path: &Path) -> Option<PathBuf> {
    path.parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(Path::to_path_buf)
}
