// SPDX-License-Identifier: MPL-2.0
//! Text input page: default, error, disabled, secure and a controlled demo.

use super::{page, section};
use crate::ui::components::{TextInput, Typography};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::variants::{TextColor, Variant};
use iced::widget::Column;
use iced::Element;

/// Values typed into the examples on this page.
#[derive(Debug, Clone, Default)]
pub struct State {
    name: String,
    email: String,
    password: String,
    demo: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    DemoChanged(String),
}

impl State {
    pub fn update(&mut self, message: Message) {
        match message {
            Message::NameChanged(value) => self.name = value,
            Message::EmailChanged(value) => self.email = value,
            Message::PasswordChanged(value) => self.password = value,
            Message::DemoChanged(value) => self.demo = value,
        }
    }

    #[must_use]
    pub fn demo_value(&self) -> &str {
        &self.demo
    }

    /// Echo line under the controlled example.
    #[must_use]
    pub fn demo_echo(&self) -> String {
        let shown = if self.demo.is_empty() {
            "[empty]"
        } else {
            self.demo.as_str()
        };
        format!("Current value: {shown}")
    }

    /// The email example keeps its error until something is typed.
    #[must_use]
    pub fn email_error(&self) -> Option<&'static str> {
        self.email
            .trim()
            .is_empty()
            .then_some("Valid email required")
    }

    pub fn view(&self) -> Element<'_, Message> {
        let default = TextInput::new("Enter your name", &self.name)
            .label("Full Name")
            .width(sizing::FIELD_WIDTH)
            .on_input(Message::NameChanged)
            .view();

        let error = TextInput::new("email@example.com", &self.email)
            .label("Email")
            .error(self.email_error().unwrap_or_default())
            .width(sizing::FIELD_WIDTH)
            .on_input(Message::EmailChanged)
            .view();

        let disabled = TextInput::new("Not editable", "")
            .label("Disabled")
            .disabled(true)
            .width(sizing::FIELD_WIDTH)
            .view();

        let secure = TextInput::new("Enter a password", &self.password)
            .label("Password")
            .secure(true)
            .width(sizing::FIELD_WIDTH)
            .on_input(Message::PasswordChanged)
            .view();

        let demo = Column::new()
            .spacing(spacing::XS)
            .push(
                TextInput::new("Type something...", &self.demo)
                    .label("Controlled Input")
                    .width(sizing::FIELD_WIDTH)
                    .on_input(Message::DemoChanged)
                    .view(),
            )
            .push(
                Typography::new(self.demo_echo())
                    .variant(Variant::Caption)
                    .color(TextColor::Muted)
                    .view(),
            );

        page(
            "Text Input",
            "Labelled single-line fields with error and disabled states.",
            vec![
                section("Default", "A labelled field with a placeholder.", default),
                section(
                    "Error state",
                    "Errors show below the field in the destructive color.",
                    error,
                ),
                section("Disabled", "Disabled fields ignore input.", disabled),
                section("Password", "Secure entry masks the value.", secure),
                section(
                    "Interactive",
                    "The value is owned by the page and echoed back.",
                    demo,
                ),
            ],
        )
    }
}
