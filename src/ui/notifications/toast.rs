// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are small cards tinted by notification kind, with a glyph, the
//! message and a close button. The card itself is also clickable: a press
//! anywhere on it dismisses the toast, like the close button does.

use super::manager::{Message, NotificationQueue};
use super::notification::Notification;
use crate::timer::Clock;
use crate::ui::design_tokens::{border, opacity, radius, shadow, sizing, spacing, typography};
use crate::ui::variants::{toast_palette, ToastPalette};
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Text};
use iced::{alignment, font, mouse, Background, Border, Color, Element, Font, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view(notification: &Notification, dark: bool) -> Element<'_, Message> {
        let colors = toast_palette(notification.kind(), dark);
        let id = notification.id();

        let icon = Text::new(notification.kind().icon())
            .size(sizing::ICON_MD)
            .style(move |_theme: &Theme| text::Style {
                color: Some(colors.text),
            });

        let message = Text::new(notification.message())
            .size(typography::TEXT_SM)
            .font(Font {
                weight: font::Weight::Medium,
                ..Font::default()
            })
            .style(move |_theme: &Theme| text::Style {
                color: Some(colors.text),
            });

        let close = button(Text::new("✕").size(sizing::ICON_SM))
            .on_press(Message::Dismiss(id))
            .padding(spacing::XXS)
            .style(move |_theme: &Theme, status| close_button_style(colors, status));

        // Layout: [icon] [message] [close]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Top)
            .push(icon)
            .push(Container::new(message).width(Length::Fill))
            .push(close);

        let card = Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::MD)
            .style(move |_theme: &Theme| toast_container_style(colors));

        // Whole-card dismissal, on top of the close button
        mouse_area(card)
            .on_press(Message::Dismiss(id))
            .interaction(mouse::Interaction::Pointer)
            .into()
    }

    /// Renders the toast overlay with the first `max_visible` notifications.
    ///
    /// Positions toasts in the bottom-right corner, stacked vertically with the
    /// oldest on top.
    pub fn view_overlay<C: Clock>(
        queue: &NotificationQueue<C>,
        max_visible: usize,
        dark: bool,
    ) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> = queue
            .visible(max_visible)
            .map(|notification| Self::view(notification, dark))
            .collect();

        if toasts.is_empty() {
            // Empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::MD)
                .into()
        }
    }
}

/// Style function for the toast card.
fn toast_container_style(colors: ToastPalette) -> container::Style {
    container::Style {
        background: Some(Background::Color(colors.background)),
        border: Border {
            color: colors.accent,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::LG,
        text_color: Some(colors.text),
        ..Default::default()
    }
}

/// Style function for the close button: text-colored glyph that fades on hover.
fn close_button_style(colors: ToastPalette, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Active => opacity::OPAQUE,
        button::Status::Hovered | button::Status::Pressed => opacity::HOVER_DIM,
        button::Status::Disabled => opacity::DISABLED,
    };

    button::Style {
        background: None,
        text_color: Color {
            a: alpha,
            ..colors.text
        },
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Kind;

    #[test]
    fn toast_container_style_uses_kind_palette() {
        let colors = toast_palette(Kind::Success, false);
        let style = toast_container_style(colors);

        assert_eq!(style.border.color, colors.accent);
        assert_eq!(style.background, Some(Background::Color(colors.background)));
        assert_eq!(style.text_color, Some(colors.text));
    }

    #[test]
    fn close_button_dims_on_hover() {
        let colors = toast_palette(Kind::Error, true);
        let active = close_button_style(colors, button::Status::Active);
        let hovered = close_button_style(colors, button::Status::Hovered);

        assert!(hovered.text_color.a < active.text_color.a);
        assert!(active.background.is_none());
    }

    #[test]
    fn empty_queue_renders_without_panicking() {
        let queue = NotificationQueue::new();
        let _ = Toast::view_overlay(&queue, 5, false);
    }
}
