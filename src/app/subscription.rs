// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts are mapped here without looking at application state;
//! whether a shortcut applies (for example the theme toggle while a dialog is
//! open) is decided in `update`.

use super::Message;
use crate::config::TICK_INTERVAL_MS;
use crate::ui::overlay::Interaction;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Event, Subscription};
use std::time::Duration;

/// Listens for the global keyboard shortcuts.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| shortcut(&event))
}

/// Maps a native event to a shortcut message.
///
/// - `Escape` closes the overlay
/// - `Ctrl+T` (`Cmd+T` on macOS) toggles the theme
pub(crate) fn shortcut(event: &Event) -> Option<Message> {
    let Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event else {
        return None;
    };

    match key.as_ref() {
        Key::Named(Named::Escape) => Some(Message::Overlay(Interaction::EscapePressed)),
        Key::Character(c) if modifiers.command() && c.eq_ignore_ascii_case("t") => {
            Some(Message::ToggleTheme)
        }
        _ => None,
    }
}

/// Creates a periodic tick subscription for notification expiry.
///
/// The tick only runs while at least one expiry timer is pending.
pub fn create_tick_subscription(has_pending_timers: bool) -> Subscription<Message> {
    if has_pending_timers {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::{key, Location, Modifiers};

    fn key_press(key: Key, code: key::Code, modifiers: Modifiers) -> Event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: key.clone(),
            modified_key: key,
            physical_key: key::Physical::Code(code),
            location: Location::Standard,
            modifiers,
            text: None,
            repeat: false,
        })
    }

    #[test]
    fn escape_maps_to_overlay_interaction() {
        let message = shortcut(&key_press(
            Key::Named(Named::Escape),
            key::Code::Escape,
            Modifiers::empty(),
        ));
        assert!(matches!(
            message,
            Some(Message::Overlay(Interaction::EscapePressed))
        ));
    }

    #[test]
    fn command_t_toggles_theme() {
        let message = shortcut(&key_press(
            Key::Character("t".into()),
            key::Code::KeyT,
            Modifiers::COMMAND,
        ));
        assert!(matches!(message, Some(Message::ToggleTheme)));
    }

    #[test]
    fn plain_t_is_ignored() {
        let message = shortcut(&key_press(
            Key::Character("t".into()),
            key::Code::KeyT,
            Modifiers::empty(),
        ));
        assert!(message.is_none());
    }

    #[test]
    fn non_keyboard_events_are_ignored() {
        let event = Event::Mouse(iced::mouse::Event::CursorLeft);
        assert!(shortcut(&event).is_none());
    }
}
