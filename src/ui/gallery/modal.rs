// SPDX-License-Identifier: MPL-2.0
//! Modal page and the dialogs the application can open.
//!
//! The overlay itself is owned by the application; this module only decides
//! what each dialog says and which buttons it offers.

use super::{bullets, page, section};
use crate::ui::components::Typography;
use crate::ui::design_tokens::spacing;
use crate::ui::notifications::Kind;
use crate::ui::styles;
use crate::ui::variants::{TextColor, Variant};
use iced::alignment::Horizontal;
use iced::widget::{button, Column, Row, Space, Text};
use iced::{Element, Length};

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod \
tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud \
exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.";

/// Every dialog that can be shown in the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    /// Proceed / cancel prompt from the showcase page.
    Confirmation,
    /// Destructive confirmation.
    DeleteItem,
    /// Long body that scrolls inside the dialog.
    Terms,
    /// Lists how the dialog can be dismissed.
    Accessibility,
}

impl Dialog {
    /// Dialogs demonstrated on the modal page.
    pub const GALLERY: [Dialog; 3] = [Dialog::DeleteItem, Dialog::Terms, Dialog::Accessibility];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Dialog::Confirmation => "Confirmation",
            Dialog::DeleteItem => "Confirm Action",
            Dialog::Terms => "Terms and Conditions",
            Dialog::Accessibility => "Accessibility Features",
        }
    }

    /// Label of the button that opens this dialog on the modal page.
    #[must_use]
    pub fn trigger_label(self) -> &'static str {
        match self {
            Dialog::Confirmation => "Show Modal",
            Dialog::DeleteItem => "Delete Item",
            Dialog::Terms => "View Terms",
            Dialog::Accessibility => "Open Accessibility Demo",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Open(Dialog),
    Cancel,
    Confirm(Dialog),
}

/// Requests for the application, which owns the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Open(Dialog),
    Close,
    /// The dialog's affirmative action was chosen.
    Confirmed(Dialog),
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Open(dialog) => Event::Open(*dialog),
        Message::Cancel => Event::Close,
        Message::Confirm(dialog) => Event::Confirmed(*dialog),
    }
}

fn actions<'a>(dialog: Dialog, confirm_label: &'a str, destructive: bool) -> Element<'a, Message> {
    let cancel = button(Text::new("Cancel"))
        .on_press(Message::Cancel)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::cancel);

    let tone = if destructive { Kind::Error } else { Kind::Info };
    let confirm = button(Text::new(confirm_label))
        .on_press(Message::Confirm(dialog))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::kind(tone));

    Row::new()
        .spacing(spacing::XS)
        .push(Space::new().width(Length::Fill))
        .push(cancel)
        .push(confirm)
        .into()
}

/// Body rendered inside the overlay for `dialog`.
pub fn body<'a>(dialog: Dialog) -> Element<'a, Message> {
    let column = Column::new().spacing(spacing::MD);

    match dialog {
        Dialog::Confirmation => column
            .push(Typography::new("Are you sure you want to proceed?").view())
            .push(actions(dialog, "Confirm", false))
            .into(),
        Dialog::DeleteItem => column
            .push(Typography::new("Are you sure you want to delete this item?").view())
            .push(actions(dialog, "Delete", true))
            .into(),
        Dialog::Terms => column
            .push(Typography::new("1. Introduction").variant(Variant::H4).view())
            .push(Typography::new(LOREM).view())
            .push(Typography::new("2. User Obligations").variant(Variant::H4).view())
            .push(Typography::new(LOREM).view())
            .push(Typography::new("3. Privacy").variant(Variant::H4).view())
            .push(Typography::new(LOREM).view())
            .push(Typography::new("4. Termination").variant(Variant::H4).view())
            .push(Typography::new(LOREM).view())
            .push(
                Column::new().align_x(Horizontal::Right).width(Length::Fill).push(
                    button(Text::new("I Accept"))
                        .on_press(Message::Confirm(dialog))
                        .padding([spacing::XS, spacing::MD])
                        .style(styles::button::primary),
                ),
            )
            .into(),
        Dialog::Accessibility => column
            .push(Typography::new("Dismissal").variant(Variant::H5).view())
            .push(bullets(&[
                "Escape closes the dialog",
                "Clicking the backdrop closes the dialog",
                "The close button in the header closes the dialog",
            ]))
            .push(Typography::new("Page behavior").variant(Variant::H5).view())
            .push(bullets(&[
                "The page behind does not scroll while the dialog is open",
                "Clicks inside the dialog never close it",
            ]))
            .into(),
    }
}

pub fn view<'a>() -> Element<'a, Message> {
    let triggers = Dialog::GALLERY
        .iter()
        .fold(Row::new().spacing(spacing::SM), |row, &dialog| {
            row.push(
                button(Text::new(dialog.trigger_label()))
                    .on_press(Message::Open(dialog))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::primary),
            )
        });

    let anatomy = Column::new()
        .spacing(spacing::XS)
        .push(bullets(&[
            "Backdrop: translucent layer over the whole window",
            "Surface: centered card with a title, close button and body",
            "Body: scrolls on its own when content is long",
        ]))
        .push(
            Typography::new("Only one dialog is shown at a time.")
                .variant(Variant::Caption)
                .color(TextColor::Muted)
                .view(),
        );

    page(
        "Modal",
        "Dialogs that block the page until dismissed.",
        vec![
            section("Examples", "Open a dialog to try it out.", triggers),
            section("Anatomy", "What a dialog is made of.", anatomy),
        ],
    )
}
