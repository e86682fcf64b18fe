// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Pages report what they want as events; the handlers here apply those
//! events to the shared resources (notification queue, overlay, theme).

use super::{Message, Screen};
use crate::ui::gallery::modal::{self, Dialog, Event as ModalEvent};
use crate::ui::gallery::toast::{self, Event as ToastEvent};
use crate::ui::gallery::{checkbox, text_input};
use crate::ui::notifications::{Kind, NotificationMessage, NotificationQueue};
use crate::ui::overlay::{self, Interaction, OverlayController, ScrollFlag};
use crate::ui::showcase::{self, Event as ShowcaseEvent};
use crate::ui::theming::ThemeMode;
use iced::Task;

/// Mutable borrows of the application state needed by the handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub theme_mode: &'a mut ThemeMode,
    pub notifications: &'a mut NotificationQueue,
    pub overlay: &'a mut OverlayController<Dialog, ScrollFlag>,
    pub showcase: &'a mut showcase::State,
    pub text_input: &'a mut text_input::State,
    pub checkbox: &'a mut checkbox::State,
}

/// Toast raised after a dialog's affirmative action, if any.
#[must_use]
pub fn confirmation_toast(dialog: Dialog) -> Option<(Kind, &'static str)> {
    match dialog {
        Dialog::Confirmation => Some((Kind::Success, "Action confirmed successfully!")),
        Dialog::DeleteItem => Some((Kind::Success, "Item deleted")),
        Dialog::Terms => Some((Kind::Info, "Terms accepted")),
        Dialog::Accessibility => None,
    }
}

pub fn handle_message(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::SwitchScreen(target) => handle_screen_switch(ctx, target),
        Message::Showcase(message) => handle_showcase_message(ctx, message),
        Message::TextInput(message) => {
            ctx.text_input.update(message);
            Task::none()
        }
        Message::Checkbox(message) => {
            ctx.checkbox.update(message);
            Task::none()
        }
        Message::Toast(message) => handle_toast_message(ctx, &message),
        Message::Modal(message) => handle_modal_message(ctx, &message),
        Message::Overlay(interaction) => handle_overlay_interaction(ctx, interaction),
        Message::Notification(message) => handle_notification_message(ctx, &message),
        Message::ToggleTheme => handle_toggle_theme(ctx),
        Message::Tick(_) => handle_tick(ctx),
    }
}

fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    if *ctx.screen != target {
        log::debug!("Switching screen: {:?} -> {:?}", ctx.screen, target);
        *ctx.screen = target;
    }
    Task::none()
}

/// Flips the effective theme. Ignored while a dialog is open.
fn handle_toggle_theme(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.overlay.is_open() {
        log::trace!("Theme toggle ignored while the overlay is open");
        return Task::none();
    }

    let next = ctx.theme_mode.toggled();
    log::info!("Theme mode: {} -> {}", ctx.theme_mode, next);
    *ctx.theme_mode = next;
    Task::none()
}

fn handle_showcase_message(
    ctx: &mut UpdateContext<'_>,
    message: showcase::Message,
) -> Task<Message> {
    match ctx.showcase.update(message) {
        ShowcaseEvent::None => Task::none(),
        ShowcaseEvent::ToggleTheme => handle_toggle_theme(ctx),
        ShowcaseEvent::ShowToast(kind, message) => {
            ctx.notifications.show(kind, message);
            Task::none()
        }
        ShowcaseEvent::OpenModal => open_dialog(ctx, Dialog::Confirmation),
    }
}

fn handle_toast_message(ctx: &mut UpdateContext<'_>, message: &toast::Message) -> Task<Message> {
    match toast::update(message) {
        ToastEvent::Show {
            kind,
            message,
            duration: Some(duration),
        } => {
            ctx.notifications.show_with_duration(kind, message, duration);
        }
        ToastEvent::Show {
            kind,
            message,
            duration: None,
        } => {
            ctx.notifications.show(kind, message);
        }
    }
    Task::none()
}

fn handle_modal_message(ctx: &mut UpdateContext<'_>, message: &modal::Message) -> Task<Message> {
    match modal::update(message) {
        ModalEvent::Open(dialog) => open_dialog(ctx, dialog),
        ModalEvent::Close => handle_overlay_interaction(ctx, Interaction::CloseRequested),
        ModalEvent::Confirmed(dialog) => {
            // Stale confirmations from a dialog that is no longer shown are dropped
            if ctx.overlay.content() != Some(&dialog) {
                return Task::none();
            }
            ctx.overlay.request_close();
            if let Some((kind, text)) = confirmation_toast(dialog) {
                ctx.notifications.show(kind, text);
            }
            Task::none()
        }
    }
}

fn open_dialog(ctx: &mut UpdateContext<'_>, dialog: Dialog) -> Task<Message> {
    ctx.overlay.open(dialog.title(), dialog);
    Task::none()
}

fn handle_overlay_interaction(
    ctx: &mut UpdateContext<'_>,
    interaction: Interaction,
) -> Task<Message> {
    if ctx.overlay.update(interaction) == overlay::Event::Closed {
        log::trace!("Overlay closed by {interaction:?}");
    }
    Task::none()
}

fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: &NotificationMessage,
) -> Task<Message> {
    ctx.notifications.handle_message(message);
    Task::none()
}

fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let expired = ctx.notifications.tick();
    if !expired.is_empty() {
        log::trace!("{} notification(s) expired", expired.len());
    }
    Task::none()
}
