// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: the navigation bar and the scrollable page, the
//! toast column, and the modal when one is open.

use super::{Message, Screen};
use crate::ui::design_tokens::spacing;
use crate::ui::gallery::{self, checkbox, modal::Dialog, text_input, toast};
use crate::ui::notifications::{NotificationQueue, Toast};
use crate::ui::overlay::{Interaction, Modal, OverlayController, ScrollFlag};
use crate::ui::showcase;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use crate::ui::widgets::scroll_guard;
use iced::widget::{button, scrollable, Column, Container, Row, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub theme_mode: ThemeMode,
    pub showcase: &'a showcase::State,
    pub text_input: &'a text_input::State,
    pub checkbox: &'a checkbox::State,
    pub notifications: &'a NotificationQueue,
    pub overlay: &'a OverlayController<Dialog, ScrollFlag>,
    pub max_visible: usize,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = Container::new(view_page(&ctx))
        .padding(spacing::XL)
        .center_x(Length::Fill);

    // Wheel events stop reaching the page while the overlay holds the lock
    let body = scroll_guard(
        ctx.overlay.lock().clone(),
        scrollable(page).width(Length::Fill).height(Length::Fill),
    );

    let base = Container::new(
        Column::new()
            .push(view_navbar(ctx.screen))
            .push(body)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::page);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.max_visible, ctx.theme_mode.is_dark())
        .map(Message::Notification);

    let layered: Element<'_, Message> = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(toasts)
        .into();

    match ctx.overlay.state() {
        Some(state) => Modal::new(
            state.title.clone(),
            gallery::modal::body(state.content).map(Message::Modal),
        )
        .on_close(Message::Overlay(Interaction::CloseRequested))
        .on_scrim_press(Message::Overlay(Interaction::ScrimPressed))
        .on_surface_press(Message::Overlay(Interaction::SurfacePressed))
        .view(layered),
        None => layered,
    }
}

fn view_page<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match ctx.screen {
        Screen::Showcase => showcase::view(showcase::ViewContext {
            state: ctx.showcase,
            theme_mode: ctx.theme_mode,
        })
        .map(Message::Showcase),
        Screen::Typography => gallery::typography::view(),
        Screen::TextInput => ctx.text_input.view().map(Message::TextInput),
        Screen::Checkbox => ctx.checkbox.view().map(Message::Checkbox),
        Screen::Toast => toast::view(toast::ViewContext {
            live: ctx.notifications.len(),
        })
        .map(Message::Toast),
        Screen::Modal => gallery::modal::view().map(Message::Modal),
    }
}

fn view_navbar<'a>(current: Screen) -> Element<'a, Message> {
    let tabs = Screen::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XXS), |row, &screen| {
            row.push(
                button(Text::new(screen.title()))
                    .on_press(Message::SwitchScreen(screen))
                    .padding([spacing::XS, spacing::SM])
                    .style(styles::button::nav(screen == current)),
            )
        });

    Container::new(tabs)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .style(styles::container::navbar)
        .into()
}
