// SPDX-License-Identifier: MPL-2.0
//! Text primitive rendering one of the typography variants.
//!
//! # Usage
//!
//! ```ignore
//! use iced_atelier::ui::components::Typography;
//! use iced_atelier::ui::variants::{TextColor, Variant};
//!
//! Typography::new("Typography Examples")
//!     .variant(Variant::H1)
//!     .view()
//! ```

use crate::ui::styles::is_dark;
use crate::ui::variants::{resolve, TextColor, Variant};
use iced::widget::{text, Text};
use iced::{Element, Theme};

/// Text with a resolved size, weight and color.
#[derive(Debug, Clone)]
pub struct Typography {
    content: String,
    variant: Variant,
    color: TextColor,
}

impl Typography {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            variant: Variant::default(),
            color: TextColor::default(),
        }
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn color(mut self, color: TextColor) -> Self {
        self.color = color;
        self
    }

    /// Renders the text. The color follows the active theme.
    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let (variant, color) = (self.variant, self.color);
        // Size and weight do not depend on darkness
        let style = resolve(variant, color, false);

        Text::new(self.content)
            .size(style.size)
            .font(style.font())
            .style(move |theme: &Theme| text::Style {
                color: Some(resolve(variant, color, is_dark(theme)).color),
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_paragraph() {
        let typography = Typography::new("body");
        assert_eq!(typography.variant, Variant::P);
        assert_eq!(typography.color, TextColor::Default);
    }

    #[test]
    fn every_variant_renders() {
        for variant in Variant::ALL {
            for color in TextColor::ALL {
                let _element: Element<'_, ()> = Typography::new(variant.name())
                    .variant(variant)
                    .color(color)
                    .view();
            }
        }
    }
}
