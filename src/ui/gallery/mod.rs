// SPDX-License-Identifier: MPL-2.0
//! Example usage pages, one per component.
//!
//! Pages follow the same "state down, messages up" shape as the rest of the
//! UI: stateful pages own a `State` with an `update`, and anything that
//! touches shared resources (the notification queue, the modal overlay) is
//! reported to the application as an `Event`.

pub mod checkbox;
pub mod modal;
pub mod text_input;
pub mod toast;
pub mod typography;

use crate::ui::components::Typography;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use crate::ui::variants::{TextColor, Variant};
use iced::widget::{Column, Container};
use iced::{Element, Length};

/// Page title, intro line and stacked sections.
pub(crate) fn page<'a, Message: 'a>(
    title: &str,
    intro: &str,
    sections: Vec<Element<'a, Message>>,
) -> Element<'a, Message> {
    let header = Column::new()
        .spacing(spacing::XS)
        .push(Typography::new(title).variant(Variant::H2).view())
        .push(
            Typography::new(intro)
                .color(TextColor::Muted)
                .view(),
        );

    Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(header)
        .extend(sections)
        .into()
}

/// Bordered card holding one example.
pub(crate) fn section<'a, Message: 'a>(
    title: &str,
    description: &str,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let inner = Column::new()
        .spacing(spacing::SM)
        .push(Typography::new(title).variant(Variant::H4).view())
        .push(
            Typography::new(description)
                .variant(Variant::Caption)
                .color(TextColor::Muted)
                .view(),
        )
        .push(content);

    Container::new(inner)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::section)
        .into()
}

/// Bulleted list of short lines.
pub(crate) fn bullets<'a, Message: 'a>(items: &[&str]) -> Element<'a, Message> {
    items
        .iter()
        .fold(Column::new().spacing(spacing::XXS), |column, item| {
            column.push(Typography::new(format!("• {item}")).view())
        })
        .into()
}
