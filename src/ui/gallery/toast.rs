// SPDX-License-Identifier: MPL-2.0
//! Toast page: one trigger per notification kind plus a long-lived toast.

use super::{bullets, page, section};
use crate::ui::components::Typography;
use crate::ui::design_tokens::spacing;
use crate::ui::notifications::Kind;
use crate::ui::styles;
use crate::ui::variants::{TextColor, Variant};
use iced::widget::{button, Column, Row, Text};
use iced::Element;
use std::time::Duration;

/// Lifetime of the "long-lived" example toast.
pub const LONG_DURATION: Duration = Duration::from_secs(10);

/// Contextual data needed to render the toast page.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewContext {
    /// Notifications currently alive in the queue.
    pub live: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Trigger(Kind),
    TriggerLong,
}

/// Events propagated to the application, which owns the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Show {
        kind: Kind,
        message: String,
        duration: Option<Duration>,
    },
}

/// Text carried by the example toast of each kind.
#[must_use]
pub fn example_message(kind: Kind) -> &'static str {
    match kind {
        Kind::Success => "Success message!",
        Kind::Error => "Error occurred!",
        Kind::Warning => "Warning message!",
        Kind::Info => "Information message!",
    }
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Trigger(kind) => Event::Show {
            kind: *kind,
            message: example_message(*kind).to_string(),
            duration: None,
        },
        Message::TriggerLong => Event::Show {
            kind: Kind::Info,
            message: format!("This toast stays for {} seconds", LONG_DURATION.as_secs()),
            duration: Some(LONG_DURATION),
        },
    }
}

pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let triggers = Kind::ALL
        .iter()
        .fold(Row::new().spacing(spacing::SM), |row, &kind| {
            row.push(
                button(Text::new(kind.title()))
                    .on_press(Message::Trigger(kind))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::kind(kind)),
            )
        });

    let long = Column::new().spacing(spacing::SM).push(
        button(Text::new("Show long-lived toast"))
            .on_press(Message::TriggerLong)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::secondary),
    );

    let live = Typography::new(format!("Live notifications: {}", ctx.live))
        .variant(Variant::Caption)
        .color(TextColor::Muted)
        .view();

    let behavior = bullets(&[
        "Toasts stack in the bottom-right corner, oldest on top",
        "Each toast dismisses itself after its lifetime",
        "Click a toast or its close button to dismiss it early",
    ]);

    page(
        "Toast",
        "Transient notifications reporting the outcome of an action.",
        vec![
            section(
                "Kinds",
                "Success, warning, error and info toasts.",
                Column::new().spacing(spacing::SM).push(triggers).push(live),
            ),
            section("Duration", "Lifetimes can be set per toast.", long),
            section("Behavior", "How toasts come and go.", behavior),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triggers_use_default_duration() {
        let event = update(&Message::Trigger(Kind::Error));
        assert_eq!(
            event,
            Event::Show {
                kind: Kind::Error,
                message: "Error occurred!".to_string(),
                duration: None,
            }
        );
    }

    #[test]
    fn long_trigger_carries_its_duration() {
        let Event::Show { kind, duration, .. } = update(&Message::TriggerLong);
        assert_eq!(kind, Kind::Info);
        assert_eq!(duration, Some(LONG_DURATION));
    }

    #[test]
    fn every_kind_has_an_example_message() {
        for kind in Kind::ALL {
            assert!(example_message(kind).ends_with('!'));
        }
    }

    #[test]
    fn view_renders() {
        let _element = view(ViewContext { live: 2 });
    }
}
