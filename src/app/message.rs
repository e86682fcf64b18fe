// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::gallery::{checkbox, modal, text_input, toast};
use crate::ui::notifications;
use crate::ui::overlay::Interaction;
use crate::ui::showcase;
use crate::ui::theming::ThemeMode;
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    SwitchScreen(Screen),
    Showcase(showcase::Message),
    TextInput(text_input::Message),
    Checkbox(checkbox::Message),
    Toast(toast::Message),
    /// Modal page triggers and the buttons inside dialog bodies.
    Modal(modal::Message),
    /// Pointer and keyboard input routed to the open overlay.
    Overlay(Interaction),
    Notification(notifications::NotificationMessage),
    /// `Ctrl+T` keyboard shortcut.
    ToggleTheme,
    Tick(Instant), // Periodic tick for notification expiry
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_ATELIER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Theme mode overriding `[general] theme_mode`.
    pub theme: Option<ThemeMode>,
    /// Toast lifetime in milliseconds overriding `[notifications] duration_ms`.
    pub toast_duration_ms: Option<u64>,
}
