// SPDX-License-Identifier: MPL-2.0
//! Checkbox styles.

use super::is_dark;
use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::checkbox::{Status, Style};
use iced::{Background, Border, Color, Theme};

/// Blue check with a label that mutes when disabled.
pub fn standard(theme: &Theme, status: Status) -> Style {
    let dark = is_dark(theme);

    let (is_checked, disabled) = match status {
        Status::Active { is_checked } | Status::Hovered { is_checked } => (is_checked, false),
        Status::Disabled { is_checked } => (is_checked, true),
    };

    let accent = if dark {
        palette::BLUE_500
    } else {
        palette::BLUE_600
    };
    let accent = if matches!(status, Status::Hovered { .. }) {
        palette::BLUE_700
    } else {
        accent
    };
    let alpha = if disabled {
        opacity::DISABLED
    } else {
        opacity::OPAQUE
    };

    let background = if is_checked {
        accent
    } else if dark {
        palette::GRAY_800
    } else {
        palette::WHITE
    };

    let border_color = if is_checked { accent } else { palette::GRAY_400 };

    let text_color = match (disabled, dark) {
        (true, false) => palette::GRAY_400,
        (true, true) => palette::GRAY_500,
        (false, false) => palette::GRAY_900,
        (false, true) => palette::GRAY_100,
    };

    Style {
        background: Background::Color(Color {
            a: alpha,
            ..background
        }),
        icon_color: palette::WHITE,
        border: Border {
            color: Color {
                a: alpha,
                ..border_color
            },
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        text_color: Some(text_color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_box_is_filled_with_accent() {
        let style = standard(&Theme::Light, Status::Active { is_checked: true });
        assert_eq!(style.background, Background::Color(palette::BLUE_600));
    }

    #[test]
    fn disabled_label_is_muted() {
        let style = standard(&Theme::Light, Status::Disabled { is_checked: false });
        assert_eq!(style.text_color, Some(palette::GRAY_400));
    }

    #[test]
    fn disabled_box_is_translucent() {
        let style = standard(&Theme::Dark, Status::Disabled { is_checked: true });
        match style.background {
            Background::Color(color) => assert!(color.a < 1.0),
            other => panic!("expected color background, got {other:?}"),
        }
    }
}
