// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the pages.
//!
//! The `App` struct owns the shared resources (notification queue, modal
//! overlay, theme mode) and the per-page form state, and hands messages to the
//! handlers in `update`. Startup policy (config loading, CLI overrides, window
//! size) lives here so it is easy to audit.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;
pub use update::confirmation_toast;

use crate::config::{self, Config};
use crate::ui::gallery::modal::Dialog;
use crate::ui::gallery::{checkbox, text_input};
use crate::ui::notifications::{Kind, NotificationQueue};
use crate::ui::overlay::{OverlayController, ScrollFlag};
use crate::ui::showcase;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;

/// Root Iced application state.
pub struct App {
    screen: Screen,
    theme_mode: ThemeMode,
    /// Toast notification queue for user feedback.
    notifications: NotificationQueue,
    /// The single modal surface; holds the scroll lock while open.
    overlay: OverlayController<Dialog, ScrollFlag>,
    /// Number of toasts rendered at once.
    max_visible: usize,
    showcase: showcase::State,
    text_input: text_input::State,
    checkbox: checkbox::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("theme_mode", &self.theme_mode)
            .field("notifications", &self.notifications.len())
            .field("overlay_open", &self.overlay.is_open())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    paths::init_cli_overrides(flags.config_dir.clone());

    // iced 0.14 requires a reusable boot function
    let boot = move || App::new(&flags);

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(&Config::default(), &Flags::default())
    }
}

impl App {
    /// Loads the configuration and surfaces any load problem as a toast.
    fn new(flags: &Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let mut app = Self::with_config(&config, flags);

        if let Some(warning) = config_warning {
            app.notifications.show(Kind::Warning, warning);
        }

        (app, Task::none())
    }

    /// Builds the state from a config with CLI flags applied on top.
    pub fn with_config(config: &Config, flags: &Flags) -> Self {
        let mut notifications_config = config.notifications.clone();
        if let Some(ms) = flags.toast_duration_ms {
            notifications_config.duration_ms = ms;
        }

        let duration: Duration = notifications_config.duration();
        log::debug!(
            "Toast lifetime {:?}, {} visible",
            duration,
            notifications_config.max_visible()
        );

        Self {
            screen: Screen::default(),
            theme_mode: flags.theme.unwrap_or(config.general.theme_mode),
            notifications: NotificationQueue::new().with_duration(duration),
            overlay: OverlayController::new(ScrollFlag::new()),
            max_visible: notifications_config.max_visible(),
            showcase: showcase::State::default(),
            text_input: text_input::State::default(),
            checkbox: checkbox::State::default(),
        }
    }

    fn title(&self) -> String {
        format!("{} - Iced Atelier", self.screen.title())
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_pending_timers());

        Subscription::batch([event_sub, tick_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            theme_mode: &mut self.theme_mode,
            notifications: &mut self.notifications,
            overlay: &mut self.overlay,
            showcase: &mut self.showcase,
            text_input: &mut self.text_input,
            checkbox: &mut self.checkbox,
        };

        update::handle_message(&mut ctx, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            theme_mode: self.theme_mode,
            showcase: &self.showcase,
            text_input: &self.text_input,
            checkbox: &self.checkbox,
            notifications: &self.notifications,
            overlay: &self.overlay,
            max_visible: self.max_visible,
        })
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    #[must_use]
    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    #[must_use]
    pub fn overlay(&self) -> &OverlayController<Dialog, ScrollFlag> {
        &self.overlay
    }

    #[must_use]
    pub fn max_visible(&self) -> usize {
        self.max_visible
    }
}
