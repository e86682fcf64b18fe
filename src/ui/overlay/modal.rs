// SPDX-License-Identifier: MPL-2.0
//! Modal dialog view.
//!
//! Layers, bottom to top:
//! 1. the base view
//! 2. a translucent scrim that reports outside clicks
//! 3. the centered dialog surface, which swallows its own clicks so they
//!    never reach the scrim

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, center, mouse_area, opaque, scrollable, Column, Container, Row, Space, Stack, Text,
};
use iced::{alignment, font, Element, Font, Length};

/// Builder for a modal dialog over a base view.
pub struct Modal<'a, Message> {
    title: String,
    body: Element<'a, Message>,
    on_close: Option<Message>,
    on_scrim_press: Option<Message>,
    on_surface_press: Option<Message>,
}

impl<'a, Message: Clone + 'a> Modal<'a, Message> {
    pub fn new(title: impl Into<String>, body: impl Into<Element<'a, Message>>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            on_close: None,
            on_scrim_press: None,
            on_surface_press: None,
        }
    }

    /// Message emitted by the close button. Scrim clicks fall back to it.
    #[must_use]
    pub fn on_close(mut self, message: Message) -> Self {
        self.on_close = Some(message);
        self
    }

    /// Message emitted when the scrim outside the surface is clicked.
    #[must_use]
    pub fn on_scrim_press(mut self, message: Message) -> Self {
        self.on_scrim_press = Some(message);
        self
    }

    /// Message emitted when the surface itself is clicked.
    #[must_use]
    pub fn on_surface_press(mut self, message: Message) -> Self {
        self.on_surface_press = Some(message);
        self
    }

    /// Renders the dialog stacked over `base`.
    pub fn view(self, base: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
        let title = Text::new(self.title)
            .size(typography::TEXT_XL)
            .font(Font {
                weight: font::Weight::Semibold,
                ..Font::default()
            });

        let mut close = button(Text::new("✕").size(sizing::ICON_MD))
            .padding(spacing::XXS)
            .style(styles::button::ghost);
        if let Some(message) = self.on_close.clone() {
            close = close.on_press(message);
        }

        let header = Container::new(
            Row::new()
                .align_y(alignment::Vertical::Center)
                .push(title)
                .push(Space::new().width(Length::Fill))
                .push(close),
        )
        .padding(spacing::LG);

        let divider = Container::new(Space::new().width(Length::Fill).height(Length::Fixed(1.0)))
            .style(styles::container::divider);

        let body = scrollable(Container::new(self.body).padding(spacing::LG))
            .height(Length::Shrink);

        let surface = Container::new(Column::new().push(header).push(divider).push(body))
            .width(Length::Fill)
            .max_width(sizing::MODAL_MAX_WIDTH)
            .style(styles::container::modal_surface);

        let mut surface = mouse_area(surface);
        if let Some(message) = self.on_surface_press {
            surface = surface.on_press(message);
        }

        let mut scrim = mouse_area(
            Container::new(Space::new().width(Length::Fill).height(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::scrim),
        );
        if let Some(message) = self.on_scrim_press.or(self.on_close) {
            scrim = scrim.on_press(message);
        }

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(base)
            .push(opaque(scrim))
            .push(center(opaque(surface)).padding(spacing::MD))
            .into()
    }
}
