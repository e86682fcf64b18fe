// SPDX-License-Identifier: MPL-2.0
//! Showcase screen: every component on a single page.
//!
//! Mirrors a typical form: a heading block, a required text field, a terms
//! checkbox, toast triggers and a confirmation dialog.

use crate::ui::components::{Checkbox, TextInput, Typography};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::notifications::Kind;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use crate::ui::variants::{TextColor, Variant};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

/// Error shown under the text field while it is empty.
pub const REQUIRED_ERROR: &str = "Text is required";

/// Form state owned by the showcase.
#[derive(Debug, Clone, Default)]
pub struct State {
    text: String,
    accepted: bool,
}

/// Contextual data needed to render the showcase.
pub struct ViewContext<'a> {
    pub state: &'a State,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the showcase.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleTheme,
    TextChanged(String),
    AcceptToggled(bool),
    ShowToast(Kind),
    ShowModal,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    ToggleTheme,
    ShowToast(Kind, String),
    OpenModal,
}

/// Text of the toast each showcase button raises.
#[must_use]
pub fn toast_message(kind: Kind) -> &'static str {
    match kind {
        Kind::Success => "Success message!",
        Kind::Warning => "Warning message!",
        Kind::Error => "Error message!",
        Kind::Info => "Information message!",
    }
}

impl State {
    /// Applies form edits locally and forwards everything else.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::TextChanged(text) => {
                self.text = text;
                Event::None
            }
            Message::AcceptToggled(checked) => {
                self.accepted = checked;
                Event::None
            }
            Message::ToggleTheme => Event::ToggleTheme,
            Message::ShowToast(kind) => Event::ShowToast(kind, toast_message(kind).to_string()),
            Message::ShowModal => Event::OpenModal,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn accepted(&self) -> bool {
        self.accepted
    }

    #[must_use]
    pub fn text_error(&self) -> Option<&'static str> {
        self.text.is_empty().then_some(REQUIRED_ERROR)
    }
}

fn heading<'a>(title: &str) -> Element<'a, Message> {
    Typography::new(title).variant(Variant::H3).view()
}

fn typography_block<'a>() -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(
            Typography::new("Typography Examples")
                .variant(Variant::H1)
                .view(),
        )
        .push(Typography::new("This is a paragraph with default styling.").view())
        .push(
            Typography::new("This is a label")
                .variant(Variant::Label)
                .view(),
        )
        .push(
            Typography::new("This is a caption")
                .variant(Variant::Caption)
                .color(TextColor::Muted)
                .view(),
        )
        .push(
            Typography::new("This is helper text")
                .variant(Variant::Helper)
                .color(TextColor::Muted)
                .view(),
        )
        .into()
}

/// Render the showcase screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let theme_button = button(Text::new(ctx.theme_mode.toggle_label()))
        .on_press(Message::ToggleTheme)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::secondary);

    let input = TextInput::new("Type here...", ctx.state.text())
        .label("Enter Text")
        .error(ctx.state.text_error().unwrap_or_default())
        .width(sizing::FIELD_WIDTH)
        .on_input(Message::TextChanged)
        .view();

    let checkbox = Checkbox::new("Accept Terms", ctx.state.accepted())
        .on_toggle(Message::AcceptToggled)
        .view();

    let toasts = [Kind::Success, Kind::Warning, Kind::Error].iter().fold(
        Row::new().spacing(spacing::SM),
        |row, &kind| {
            row.push(
                button(Text::new(format!("{} Toast", kind.title())))
                    .on_press(Message::ShowToast(kind))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::kind(kind)),
            )
        },
    );

    let modal_button = button(Text::new("Show Modal"))
        .on_press(Message::ShowModal)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let content = Column::new()
        .spacing(spacing::XL)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(theme_button)
        .push(typography_block())
        .push(
            Column::new()
                .spacing(spacing::SM)
                .push(heading("Text Input"))
                .push(input),
        )
        .push(
            Column::new()
                .spacing(spacing::SM)
                .push(heading("Checkbox"))
                .push(checkbox),
        )
        .push(
            Column::new()
                .spacing(spacing::SM)
                .push(heading("Toasts"))
                .push(toasts),
        )
        .push(
            Column::new()
                .spacing(spacing::SM)
                .push(heading("Modal"))
                .push(modal_button),
        );

    Container::new(content).width(Length::Fill).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_field_is_required() {
        let mut state = State::default();
        assert_eq!(state.text_error(), Some(REQUIRED_ERROR));

        assert_eq!(state.update(Message::TextChanged("x".into())), Event::None);
        assert_eq!(state.text(), "x");
        assert_eq!(state.text_error(), None);
    }

    #[test]
    fn checkbox_updates_locally() {
        let mut state = State::default();
        assert_eq!(state.update(Message::AcceptToggled(true)), Event::None);
        assert!(state.accepted());
    }

    #[test]
    fn toast_buttons_forward_their_message() {
        let mut state = State::default();
        assert_eq!(
            state.update(Message::ShowToast(Kind::Warning)),
            Event::ShowToast(Kind::Warning, "Warning message!".into())
        );
        assert_eq!(
            state.update(Message::ShowToast(Kind::Error)),
            Event::ShowToast(Kind::Error, "Error message!".into())
        );
    }

    #[test]
    fn theme_and_modal_are_forwarded() {
        let mut state = State::default();
        assert_eq!(state.update(Message::ToggleTheme), Event::ToggleTheme);
        assert_eq!(state.update(Message::ShowModal), Event::OpenModal);
    }

    #[test]
    fn view_renders() {
        let state = State::default();
        let _element = view(ViewContext {
            state: &state,
            theme_mode: ThemeMode::Dark,
        });
    }
}
