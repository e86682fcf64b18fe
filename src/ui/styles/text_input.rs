// SPDX-License-Identifier: MPL-2.0
//! Text input styles.

use super::is_dark;
use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::text_input::{Status, Style};
use iced::{Border, Color, Theme};

/// Bordered field. The border turns red when `has_error` is set and blue
/// while focused.
pub fn field(has_error: bool) -> impl Fn(&Theme, Status) -> Style {
    move |theme: &Theme, status: Status| {
        let dark = is_dark(theme);

        let (background, idle_border, value) = match (status, dark) {
            (Status::Disabled, false) => (palette::GRAY_100, palette::GRAY_300, palette::GRAY_500),
            (Status::Disabled, true) => (palette::GRAY_700, palette::GRAY_600, palette::GRAY_400),
            (_, false) => (palette::WHITE, palette::GRAY_300, palette::BLACK),
            (_, true) => (palette::GRAY_800, palette::GRAY_600, palette::WHITE),
        };

        let (border_color, border_width) = if has_error {
            (palette::RED_500, border::WIDTH_SM)
        } else if matches!(status, Status::Focused { .. }) {
            // focus:ring-2 focus:ring-blue-500
            (palette::BLUE_500, border::WIDTH_MD)
        } else {
            (idle_border, border::WIDTH_SM)
        };

        Style {
            background: background.into(),
            border: Border {
                color: border_color,
                width: border_width,
                radius: radius::SM.into(),
            },
            icon: palette::GRAY_500,
            placeholder: if dark {
                palette::GRAY_400
            } else {
                palette::GRAY_500
            },
            value,
            selection: Color {
                a: 0.4,
                ..palette::BLUE_400
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_border_is_red_in_every_state() {
        let style = field(true);
        for status in [Status::Active, Status::Hovered, Status::Disabled] {
            assert_eq!(style(&Theme::Light, status).border.color, palette::RED_500);
        }
    }

    #[test]
    fn disabled_background_is_dimmed() {
        let style = field(false);
        let active = style(&Theme::Light, Status::Active);
        let disabled = style(&Theme::Light, Status::Disabled);
        assert_ne!(active.background, disabled.background);
    }

    #[test]
    fn dark_theme_uses_dark_surface() {
        let style = field(false)(&Theme::Dark, Status::Active);
        assert_eq!(style.background, palette::GRAY_800.into());
        assert_eq!(style.value, palette::WHITE);
    }
}
