// SPDX-License-Identifier: MPL-2.0
//! Labeled text field with an optional error line.
//!
//! # Usage
//!
//! ```ignore
//! use iced_atelier::ui::components::TextInput;
//!
//! TextInput::new("Type here...", &state.text)
//!     .label("Enter Text")
//!     .error(if state.text.is_empty() { "Text is required" } else { "" })
//!     .on_input(Message::TextChanged)
//!     .view()
//! ```

use super::typography::Typography;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::variants::{TextColor, Variant};
use iced::widget::{text_input, Column};
use iced::{Element, Length};

/// Builder for a labeled text field.
pub struct TextInput<'a, Message> {
    placeholder: String,
    value: &'a str,
    label: Option<String>,
    error: Option<String>,
    disabled: bool,
    secure: bool,
    width: Length,
    on_input: Option<Box<dyn Fn(String) -> Message + 'a>>,
    on_submit: Option<Message>,
}

impl<'a, Message: Clone + 'a> TextInput<'a, Message> {
    pub fn new(placeholder: impl Into<String>, value: &'a str) -> Self {
        Self {
            placeholder: placeholder.into(),
            value,
            label: None,
            error: None,
            disabled: false,
            secure: false,
            width: Length::Fixed(sizing::FIELD_WIDTH),
            on_input: None,
            on_submit: None,
        }
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the error shown under the field. An empty message clears it.
    #[must_use]
    pub fn error(mut self, error: impl Into<String>) -> Self {
        let error = error.into();
        self.error = (!error.is_empty()).then_some(error);
        self
    }

    /// A disabled field ignores input and renders dimmed.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Masks the value, for passwords.
    #[must_use]
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    #[must_use]
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    #[must_use]
    pub fn on_input(mut self, on_input: impl Fn(String) -> Message + 'a) -> Self {
        self.on_input = Some(Box::new(on_input));
        self
    }

    #[must_use]
    pub fn on_submit(mut self, message: Message) -> Self {
        self.on_submit = Some(message);
        self
    }

    #[must_use]
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn view(self) -> Element<'a, Message> {
        let has_error = self.has_error();

        let mut input = text_input(&self.placeholder, self.value)
            .secure(self.secure)
            .padding([spacing::XS, spacing::SM])
            .size(typography::TEXT_BASE)
            .width(self.width)
            .style(styles::text_input::field(has_error));

        if !self.disabled {
            if let Some(on_input) = self.on_input {
                input = input.on_input(on_input);
            }
            if let Some(message) = self.on_submit {
                input = input.on_submit(message);
            }
        }

        let mut column = Column::new().spacing(spacing::XXS);
        if let Some(label) = self.label {
            column = column.push(Typography::new(label).variant(Variant::Label).view());
        }
        column = column.push(input);
        if let Some(error) = self.error {
            column = column.push(
                Typography::new(error)
                    .variant(Variant::Helper)
                    .color(TextColor::Destructive)
                    .view(),
            );
        }

        column.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    enum Message {
        Changed(String),
        Submitted,
    }

    #[test]
    fn empty_error_is_ignored() {
        let input: TextInput<'_, Message> = TextInput::new("Type here...", "").error("");
        assert!(!input.has_error());
    }

    #[test]
    fn error_message_is_kept() {
        let input: TextInput<'_, Message> =
            TextInput::new("Type here...", "").error("Text is required");
        assert!(input.has_error());
    }

    #[test]
    fn full_builder_renders() {
        let _element = TextInput::new("Password", "hunter2")
            .label("Password")
            .secure(true)
            .on_input(Message::Changed)
            .on_submit(Message::Submitted)
            .view();
    }

    #[test]
    fn disabled_field_renders_without_handlers() {
        let _element = TextInput::new("Disabled", "")
            .disabled(true)
            .on_input(Message::Changed)
            .view();
    }
}
