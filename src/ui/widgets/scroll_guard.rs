// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that withholds mouse wheel events from its content while
//! a [`ScrollLock`] is held. The page stays put behind an open modal and
//! scrolls normally otherwise.

use crate::ui::overlay::ScrollLock;
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Rectangle, Size};

/// Wraps (usually scrollable) content and gates wheel events on a lock.
pub struct ScrollGuard<'a, L, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    lock: L,
}

impl<'a, L, Message, Theme, Renderer> ScrollGuard<'a, L, Message, Theme, Renderer>
where
    L: ScrollLock,
{
    pub fn new(lock: L, content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            lock,
        }
    }
}

impl<L, Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for ScrollGuard<'_, L, Message, Theme, Renderer>
where
    L: ScrollLock,
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if blocks(&self.lock, event) {
            return;
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, L, Message, Theme, Renderer> From<ScrollGuard<'a, L, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    L: ScrollLock + 'a,
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(guard: ScrollGuard<'a, L, Message, Theme, Renderer>) -> Self {
        Self::new(guard)
    }
}

/// Helper function to wrap content in a [`ScrollGuard`].
pub fn scroll_guard<'a, L, Message, Theme, Renderer>(
    lock: L,
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> ScrollGuard<'a, L, Message, Theme, Renderer>
where
    L: ScrollLock,
    Renderer: renderer::Renderer,
{
    ScrollGuard::new(lock, content)
}

fn is_wheel_event(event: &Event) -> bool {
    matches!(event, Event::Mouse(mouse::Event::WheelScrolled { .. }))
}

fn blocks(lock: &impl ScrollLock, event: &Event) -> bool {
    lock.is_locked() && is_wheel_event(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::overlay::ScrollFlag;

    fn wheel() -> Event {
        Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 },
        })
    }

    #[test]
    fn wheel_event_is_detected() {
        assert!(is_wheel_event(&wheel()));
    }

    #[test]
    fn other_mouse_events_are_not_detected() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert!(!is_wheel_event(&event));
    }

    #[test]
    fn wheel_passes_through_while_unlocked() {
        let flag = ScrollFlag::new();
        assert!(!blocks(&flag, &wheel()));
    }

    #[test]
    fn wheel_is_blocked_while_locked() {
        let flag = ScrollFlag::new();
        flag.acquire();
        assert!(blocks(&flag, &wheel()));

        let click = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert!(!blocks(&flag, &click));
    }
}
