// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use super::is_dark;
use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use crate::ui::notifications::Kind;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled button with a hover shade.
fn solid(background: Color, hover: Color, text_color: Color, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Active => background,
        button::Status::Hovered | button::Status::Pressed => hover,
        button::Status::Disabled => Color {
            a: opacity::DISABLED,
            ..background
        },
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Primary action (blue).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    solid(palette::BLUE_600, palette::BLUE_700, WHITE, status)
}

/// Neutral action adapting to light/dark mode (theme toggle).
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    if is_dark(theme) {
        solid(palette::GRAY_700, palette::GRAY_600, WHITE, status)
    } else {
        solid(palette::GRAY_200, palette::GRAY_300, BLACK, status)
    }
}

/// Dismissive action inside dialogs (Cancel).
pub fn cancel(_theme: &Theme, status: button::Status) -> button::Style {
    solid(palette::GRAY_300, palette::GRAY_400, BLACK, status)
}

/// Trigger button tinted by notification kind.
pub fn kind(kind: Kind) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match kind {
            Kind::Success => palette::GREEN_600,
            Kind::Warning => palette::YELLOW_500,
            Kind::Error => palette::RED_600,
            Kind::Info => palette::BLUE_600,
        };
        let mut style = solid(background, background, WHITE, status);
        if matches!(status, button::Status::Hovered | button::Status::Pressed) {
            // hover:opacity-90
            style.background = Some(Background::Color(Color {
                a: 0.9,
                ..background
            }));
        }
        style
    }
}

/// Bare glyph button (dialog close).
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let dark = is_dark(theme);
    let text_color = match (status, dark) {
        (button::Status::Hovered | button::Status::Pressed, false) => palette::GRAY_700,
        (button::Status::Hovered | button::Status::Pressed, true) => palette::GRAY_300,
        (_, false) => palette::GRAY_500,
        (_, true) => palette::GRAY_400,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Navigation tab; `selected` marks the current screen.
pub fn nav(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if selected {
            return solid(palette::BLUE_600, palette::BLUE_700, WHITE, status);
        }

        let dark = is_dark(theme);
        let (text_color, hover) = if dark {
            (palette::GRAY_300, palette::GRAY_800)
        } else {
            (palette::GRAY_700, palette::GRAY_100)
        };
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Some(Background::Color(hover)),
            _ => None,
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
