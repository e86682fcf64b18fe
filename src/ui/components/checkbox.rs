// SPDX-License-Identifier: MPL-2.0
//! Labeled checkbox.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::checkbox;
use iced::Element;

/// Builder for a labeled checkbox.
pub struct Checkbox<'a, Message> {
    label: String,
    checked: bool,
    disabled: bool,
    on_toggle: Option<Box<dyn Fn(bool) -> Message + 'a>>,
}

impl<'a, Message: 'a> Checkbox<'a, Message> {
    pub fn new(label: impl Into<String>, checked: bool) -> Self {
        Self {
            label: label.into(),
            checked,
            disabled: false,
            on_toggle: None,
        }
    }

    #[must_use]
    pub fn on_toggle(mut self, on_toggle: impl Fn(bool) -> Message + 'a) -> Self {
        self.on_toggle = Some(Box::new(on_toggle));
        self
    }

    /// A disabled checkbox keeps its state and ignores clicks.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn is_interactive(&self) -> bool {
        !self.disabled && self.on_toggle.is_some()
    }

    pub fn view(self) -> Element<'a, Message> {
        let mut widget = checkbox(self.checked)
            .label(self.label)
            .size(sizing::CHECKBOX)
            .spacing(spacing::XS)
            .text_size(typography::TEXT_BASE)
            .style(styles::checkbox::standard);

        // No handler means iced renders it disabled
        if !self.disabled {
            if let Some(on_toggle) = self.on_toggle {
                widget = widget.on_toggle(on_toggle);
            }
        }

        widget.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkbox_with_handler_is_interactive() {
        let checkbox = Checkbox::new("Accept Terms", false).on_toggle(|checked| checked);
        assert!(checkbox.is_interactive());
    }

    #[test]
    fn disabled_checkbox_is_not_interactive() {
        let checkbox = Checkbox::new("Disabled", true)
            .on_toggle(|checked| checked)
            .disabled(true);
        assert!(!checkbox.is_interactive());
        let _element: Element<'_, bool> = checkbox.view();
    }

    #[test]
    fn checkbox_without_handler_is_not_interactive() {
        let checkbox: Checkbox<'_, bool> = Checkbox::new("Read only", false);
        assert!(!checkbox.is_interactive());
    }
}
