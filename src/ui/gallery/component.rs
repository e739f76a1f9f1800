// SPDX-License-Identifier: MPL-2.0
//! Gallery card state and update logic.
//!
//! Ties the [`PageLoader`] (what is listed), the [`ImageCache`] (what is
//! resolved) and the [`ViewerController`] (what is open and how it is
//! transformed) to Iced messages and tasks.

use super::viewer::{ViewerController, ViewerEvent};
use super::{grid, overlay};
use crate::application::port::{ImageResolver, StorageLister};
use crate::application::query::gallery::{LoadOutcome, PageLoader};
use crate::config::Config;
use crate::domain::gallery::ListPage;
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::notifications::Notification;
use iced::{event, Element, Task};
use std::sync::Arc;
use std::time::Instant;

/// Notification key used for listing failures; cleared on the next success.
pub const LOAD_ERROR_KEY: &str = "notification-gallery-error";

#[derive(Debug, Clone)]
pub enum Message {
    LoadMore,
    /// Drops the listing and starts over, as on a fresh mount.
    Refresh,
    PageLoaded {
        generation: u64,
        result: Result<ListPage>,
    },
    ImageResolved {
        path: String,
        result: Result<Vec<u8>>,
    },
    Open(usize),
    Close,
    /// Click on the dimmed area around the image.
    BackdropPressed,
    ImagePressed,
    /// Click on the toolbar background; swallowed so the viewer stays open.
    ControlsPressed,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    SliderChanged(f32),
    RawEvent(event::Event),
}

/// Side effects the application must handle after an update.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    Notify(Notification),
    DismissNotification(&'static str),
}

pub struct Gallery {
    loader: PageLoader,
    viewer: ViewerController,
    cache: ImageCache,
    lister: Arc<dyn StorageLister>,
    resolver: Arc<dyn ImageResolver>,
}

impl std::fmt::Debug for Gallery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gallery")
            .field("loader", &self.loader)
            .field("viewer", &self.viewer)
            .field("cached_images", &self.cache.len())
            .finish_non_exhaustive()
    }
}

impl Gallery {
    /// Mounts the gallery and issues the first page request.
    pub fn new(
        config: &Config,
        lister: Arc<dyn StorageLister>,
        resolver: Arc<dyn ImageResolver>,
    ) -> (Self, Task<Message>) {
        let mut gallery = Self {
            loader: PageLoader::new(config.gallery.prefix(), config.gallery.page_size()),
            viewer: ViewerController::from_config(&config.viewer),
            cache: ImageCache::new(config.gallery.cache_images()),
            lister,
            resolver,
        };
        let task = gallery.load_next_page();
        (gallery, task)
    }

    #[must_use]
    pub fn loader(&self) -> &PageLoader {
        &self.loader
    }

    #[must_use]
    pub fn viewer(&self) -> &ViewerController {
        &self.viewer
    }

    #[must_use]
    pub fn cache(&self) -> &ImageCache {
        &self.cache
    }

    /// Whether window input should be routed to [`Message::RawEvent`].
    #[must_use]
    pub fn wants_raw_events(&self) -> bool {
        self.viewer.is_open()
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::LoadMore => (Effect::None, self.load_next_page()),
            Message::Refresh => {
                self.viewer.close();
                self.loader.reset();
                self.cache.clear();
                (Effect::None, self.load_next_page())
            }
            Message::PageLoaded { generation, result } => self.apply_page(generation, result),
            Message::ImageResolved { path, result } => {
                match result {
                    Ok(bytes) => {
                        if let Err(err) = self.cache.insert(&path, bytes) {
                            tracing::warn!(%path, %err, "resolved object is not a displayable image");
                        }
                    }
                    Err(err) => {
                        tracing::warn!(%path, %err, "failed to resolve image");
                        self.cache.fail(&path);
                    }
                }
                (Effect::None, Task::none())
            }
            Message::Open(index) => {
                let Some(path) = self.loader.get(index).map(|item| item.path.clone()) else {
                    return (Effect::None, Task::none());
                };
                tracing::debug!(%path, index, "opening image");
                let task = self.resolve(&path);
                self.viewer.open(path);
                (Effect::None, task)
            }
            Message::Close | Message::BackdropPressed => {
                self.viewer.close();
                (Effect::None, Task::none())
            }
            Message::ImagePressed => {
                self.viewer.begin_pointer_drag();
                (Effect::None, Task::none())
            }
            Message::ControlsPressed => (Effect::None, Task::none()),
            Message::ZoomIn => {
                self.viewer.zoom_in();
                (Effect::None, Task::none())
            }
            Message::ZoomOut => {
                self.viewer.zoom_out();
                (Effect::None, Task::none())
            }
            Message::ResetZoom => {
                self.viewer.reset_zoom();
                (Effect::None, Task::none())
            }
            Message::SliderChanged(scale) => {
                self.viewer.set_scale(scale);
                (Effect::None, Task::none())
            }
            Message::RawEvent(event) => {
                if self.viewer.handle_event(&event, Instant::now()) == ViewerEvent::Closed {
                    tracing::debug!("viewer closed from keyboard");
                }
                (Effect::None, Task::none())
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        grid::view(&self.loader, &self.cache, i18n)
    }

    /// The full-window viewer, when an image is open.
    pub fn view_overlay<'a>(&'a self, i18n: &'a I18n) -> Option<Element<'a, Message>> {
        let path = self.viewer.selected()?;
        Some(overlay::view(overlay::ViewEnv {
            i18n,
            viewer: &self.viewer,
            slot: self.cache.slot(path),
        }))
    }

    fn load_next_page(&mut self) -> Task<Message> {
        let Some(pending) = self.loader.begin() else {
            return Task::none();
        };
        let generation = pending.generation;
        Task::perform(self.lister.list(pending.request), move |result| {
            Message::PageLoaded { generation, result }
        })
    }

    fn apply_page(&mut self, generation: u64, result: Result<ListPage>) -> (Effect, Task<Message>) {
        match self.loader.finish(generation, result) {
            LoadOutcome::Appended { added } => {
                let items = self.loader.items();
                // Every listed thumbnail stays resident.
                self.cache.reserve(items.len());
                let paths: Vec<String> = items[items.len() - added..]
                    .iter()
                    .map(|item| item.path.clone())
                    .collect();
                let tasks: Vec<_> = paths.iter().map(|path| self.resolve(path)).collect();
                (
                    Effect::DismissNotification(LOAD_ERROR_KEY),
                    Task::batch(tasks),
                )
            }
            LoadOutcome::Failed(err) => (
                Effect::Notify(Notification::failure(LOAD_ERROR_KEY, &err)),
                Task::none(),
            ),
            LoadOutcome::Stale => (Effect::None, Task::none()),
        }
    }

    /// Starts fetching `path` unless it is cached or already in flight.
    fn resolve(&mut self, path: &str) -> Task<Message> {
        if !self.cache.request(path) {
            return Task::none();
        }
        let owned = path.to_string();
        Task::perform(self.resolver.resolve(path), move |result| {
            Message::ImageResolved { path: owned, result }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::query::gallery::{FooterStatus, LoadState};
    use crate::domain::gallery::{Cursor, FileItem, ListRequest};
    use crate::error::Error;
    use crate::media::ImageSlot;
    use futures_util::future::{self, BoxFuture};
    use futures_util::FutureExt;
    use iced::keyboard::{self, key, Key, Location, Modifiers};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingLister {
        requests: Mutex<Vec<ListRequest>>,
    }

    impl StorageLister for RecordingLister {
        fn list(&self, request: ListRequest) -> BoxFuture<'static, Result<ListPage>> {
            self.requests.lock().unwrap().push(request);
            future::ready(Ok(ListPage::default())).boxed()
        }
    }

    struct NoImages;

    impl ImageResolver for NoImages {
        fn resolve(&self, path: &str) -> BoxFuture<'static, Result<Vec<u8>>> {
            future::ready(Err(Error::Storage(format!("no such object: {path}")))).boxed()
        }
    }

    fn mount() -> (Gallery, Arc<RecordingLister>) {
        let lister = Arc::new(RecordingLister::default());
        let (gallery, _task) = Gallery::new(
            &Config::default(),
            lister.clone(),
            Arc::new(NoImages),
        );
        (gallery, lister)
    }

    fn page(paths: &[&str], next: Option<&str>) -> ListPage {
        ListPage {
            items: paths.iter().map(|p| FileItem::new(*p)).collect(),
            next_cursor: next.map(Cursor::new),
        }
    }

    fn escape() -> event::Event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(key::Named::Escape),
            modified_key: Key::Named(key::Named::Escape),
            physical_key: key::Physical::Code(key::Code::Escape),
            location: Location::Standard,
            modifiers: Modifiers::default(),
            text: None,
            repeat: false,
        })
    }

    #[test]
    fn mounting_requests_first_page() {
        let (gallery, lister) = mount();
        assert_eq!(gallery.loader().state(), LoadState::Loading);

        let requests = lister.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].prefix, "image-submissions/");
        assert!(requests[0].cursor.is_none());
    }

    #[test]
    fn load_more_while_loading_issues_nothing() {
        let (mut gallery, lister) = mount();
        gallery.handle_message(Message::LoadMore);
        assert_eq!(lister.requests.lock().unwrap().len(), 1);
    }

    #[test]
    fn loaded_page_fills_grid_and_requests_images() {
        let (mut gallery, _) = mount();
        let (effect, _) = gallery.handle_message(Message::PageLoaded {
            generation: 0,
            result: Ok(page(
                &["image-submissions/", "image-submissions/a.png", "image-submissions/b.png"],
                Some("next"),
            )),
        });

        assert!(matches!(effect, Effect::DismissNotification(LOAD_ERROR_KEY)));
        assert_eq!(gallery.loader().items().len(), 2);
        assert_eq!(gallery.loader().footer(), FooterStatus::LoadMore(10));
        assert!(matches!(
            gallery.cache().slot("image-submissions/a.png"),
            ImageSlot::Loading
        ));
    }

    #[test]
    fn failed_page_notifies_and_keeps_state() {
        let (mut gallery, lister) = mount();
        let (effect, _) = gallery.handle_message(Message::PageLoaded {
            generation: 0,
            result: Err(Error::Network("timeout".into())),
        });

        assert!(matches!(effect, Effect::Notify(_)));
        assert_eq!(gallery.loader().state(), LoadState::Idle);
        assert!(gallery.loader().has_more());

        gallery.handle_message(Message::LoadMore);
        assert_eq!(lister.requests.lock().unwrap().len(), 2);
    }

    #[test]
    fn refresh_discards_in_flight_page() {
        let (mut gallery, lister) = mount();
        gallery.handle_message(Message::Refresh);
        assert_eq!(lister.requests.lock().unwrap().len(), 2);

        let (effect, _) = gallery.handle_message(Message::PageLoaded {
            generation: 0,
            result: Ok(page(&["image-submissions/old.png"], None)),
        });
        assert!(matches!(effect, Effect::None));
        assert!(gallery.loader().items().is_empty());
        assert!(gallery.loader().is_loading());
    }

    #[test]
    fn open_and_backdrop_close() {
        let (mut gallery, _) = mount();
        gallery.handle_message(Message::PageLoaded {
            generation: 0,
            result: Ok(page(&["image-submissions/a.png"], None)),
        });

        gallery.handle_message(Message::Open(0));
        assert_eq!(gallery.viewer().selected(), Some("image-submissions/a.png"));
        assert!(gallery.wants_raw_events());

        gallery.handle_message(Message::ZoomIn);
        assert!((gallery.viewer().zoom().scale - 1.5).abs() < f32::EPSILON);

        gallery.handle_message(Message::BackdropPressed);
        assert!(!gallery.viewer().is_open());
        assert!(!gallery.wants_raw_events());
    }

    #[test]
    fn toolbar_click_keeps_viewer_open() {
        let (mut gallery, _) = mount();
        gallery.handle_message(Message::PageLoaded {
            generation: 0,
            result: Ok(page(&["image-submissions/a.png"], None)),
        });
        gallery.handle_message(Message::Open(0));
        gallery.handle_message(Message::ControlsPressed);
        assert!(gallery.viewer().is_open());
    }

    #[test]
    fn escape_closes_viewer() {
        let (mut gallery, _) = mount();
        gallery.handle_message(Message::PageLoaded {
            generation: 0,
            result: Ok(page(&["image-submissions/a.png"], None)),
        });
        gallery.handle_message(Message::Open(0));
        gallery.handle_message(Message::RawEvent(escape()));
        assert!(!gallery.viewer().is_open());
    }

    #[test]
    fn open_out_of_range_is_ignored() {
        let (mut gallery, _) = mount();
        gallery.handle_message(Message::Open(3));
        assert!(!gallery.viewer().is_open());
    }

    #[test]
    fn slider_value_is_clamped() {
        let (mut gallery, _) = mount();
        gallery.handle_message(Message::PageLoaded {
            generation: 0,
            result: Ok(page(&["image-submissions/a.png"], None)),
        });
        gallery.handle_message(Message::Open(0));
        gallery.handle_message(Message::SliderChanged(42.0));
        assert!((gallery.viewer().zoom().scale - 5.0).abs() < f32::EPSILON);
    }

    fn png_bytes() -> Vec<u8> {
        let mut bytes = Vec::new();
        image_rs::RgbaImage::new(2, 2)
            .write_to(&mut std::io::Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn thumbnails_beyond_cache_size_stay_loaded() {
        let (mut gallery, _) = mount();
        let capacity = gallery.cache().capacity();
        let pages = capacity / 10 + 2;

        for page_index in 0..pages {
            if page_index > 0 {
                gallery.handle_message(Message::LoadMore);
            }
            let paths: Vec<String> = (0..10)
                .map(|i| format!("image-submissions/{page_index}-{i}.png"))
                .collect();
            let refs: Vec<&str> = paths.iter().map(String::as_str).collect();
            gallery.handle_message(Message::PageLoaded {
                generation: 0,
                result: Ok(page(&refs, Some("more"))),
            });
            for path in paths {
                gallery.handle_message(Message::ImageResolved {
                    path,
                    result: Ok(png_bytes()),
                });
            }
        }

        let listed = gallery.loader().items().len();
        assert!(listed > capacity);
        for item in gallery.loader().items() {
            assert!(
                matches!(gallery.cache().slot(&item.path), ImageSlot::Ready(_)),
                "{} is no longer cached",
                item.path
            );
        }
    }

    #[test]
    fn refresh_drops_cached_images() {
        let (mut gallery, _) = mount();
        gallery.handle_message(Message::PageLoaded {
            generation: 0,
            result: Ok(page(&["image-submissions/a.png"], None)),
        });
        gallery.handle_message(Message::ImageResolved {
            path: "image-submissions/a.png".into(),
            result: Ok(png_bytes()),
        });
        assert!(!gallery.cache().is_empty());

        gallery.handle_message(Message::Refresh);
        assert!(gallery.cache().is_empty());
    }

    #[test]
    fn unresolvable_image_is_marked_failed() {
        let (mut gallery, _) = mount();
        gallery.handle_message(Message::ImageResolved {
            path: "image-submissions/a.png".into(),
            result: Err(Error::Storage("gone".into())),
        });
        assert!(matches!(
            gallery.cache().slot("image-submissions/a.png"),
            ImageSlot::Failed
        ));
    }
}
