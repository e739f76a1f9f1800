// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the dashboard and the
//! signed-out screen.
//!
//! The `App` struct wires together the backends, localization and persisted
//! preferences, and translates component effects into side effects like state
//! persistence or sign-out.

mod backends;
mod message;
pub mod paths;
pub mod persisted_state;
mod screen;
mod subscription;
mod update;
mod view;

pub use backends::{connect, Backends};
pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::port::AuthGate;
use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::dashboard::Dashboard;
use crate::ui::notifications;
use crate::ui::theming;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    dashboard: Option<Dashboard>,
    auth: Arc<dyn AuthGate>,
    login_id: String,
    dark_mode: bool,
    /// Persisted application state (dark-mode toggle, last upload directory).
    app_state: persisted_state::AppState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("login_id", &self.login_id)
            .field("dark_mode", &self.dark_mode)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;
pub const MIN_WINDOW_WIDTH: f32 = 760.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires the boot function to be `Fn`; the flags are only
    // consumed by the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration and state, connects the backends and mounts the
    /// dashboard.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);
        let (app_state, state_warning) = persisted_state::AppState::load();

        let mut notifications = notifications::Manager::new();
        if let Some(key) = config_warning {
            notifications.push(notifications::Notification::warning(&key));
        }
        if let Some(key) = state_warning {
            notifications.push(notifications::Notification::warning(&key));
        }

        let (backends, warnings) = connect(&config);
        for warning in warnings {
            notifications.push(warning);
        }

        let login_id = backends
            .auth
            .current_user()
            .map(|user| user.login_id)
            .unwrap_or_default();
        let dark_mode = theming::resolve_dark_mode(config.general.theme_mode, app_state.dark_mode);

        let (dashboard, task) = Dashboard::new(
            &config,
            backends.ports,
            app_state.last_upload_directory.clone(),
        );
        tracing::info!(%login_id, locale = %i18n.current_locale(), "dashboard mounted");

        let app = App {
            i18n,
            screen: Screen::Dashboard,
            dashboard: Some(dashboard),
            auth: backends.auth,
            login_id,
            dark_mode,
            app_state,
            notifications,
        };
        (app, task.map(Message::Dashboard))
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        theming::iced_theme(self.dark_mode)
    }

    fn subscription(&self) -> Subscription<Message> {
        let viewer_open = self
            .dashboard
            .as_ref()
            .is_some_and(|dashboard| dashboard.gallery().wants_raw_events());
        let event_sub = subscription::create_event_subscription(viewer_open);
        let tick_sub = subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            dashboard: &mut self.dashboard,
            auth: &self.auth,
            dark_mode: &mut self.dark_mode,
            app_state: &mut self.app_state,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Dashboard(dashboard_message) => {
                update::handle_dashboard_message(&mut ctx, dashboard_message)
            }
            Message::SignedOut(result) => update::handle_signed_out(&mut ctx, result),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.expire(now);
                Task::none()
            }
            Message::Quit => iced::exit(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            dashboard: self.dashboard.as_ref(),
            login_id: &self.login_id,
            dark_mode: self.dark_mode,
            notifications: &self.notifications,
        })
    }
}
