// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use super::is_dark;
use crate::ui::design_tokens::{radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Full-window page background (white / gray-900).
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_dark(is_dark(theme));

    container::Style {
        background: Some(Background::Color(colors.surface_page)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Section card grouping one example on a gallery page.
pub fn section(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_dark(is_dark(theme));

    container::Style {
        background: Some(Background::Color(colors.surface_raised)),
        border: Border {
            color: colors.divider,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Translucent backdrop behind a modal.
pub fn scrim(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_dark(is_dark(theme));

    container::Style {
        background: Some(Background::Color(colors.scrim)),
        ..Default::default()
    }
}

/// Modal dialog surface (white / gray-800, rounded-xl, shadow-xl).
pub fn modal_surface(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_dark(is_dark(theme));

    container::Style {
        background: Some(Background::Color(colors.surface_raised)),
        text_color: Some(colors.text_primary),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::XL,
        ..Default::default()
    }
}

/// One-pixel separator line.
pub fn divider(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_dark(is_dark(theme));

    container::Style {
        background: Some(Background::Color(colors.divider)),
        ..Default::default()
    }
}

/// Navigation bar strip.
pub fn navbar(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_dark(is_dark(theme));

    container::Style {
        background: Some(Background::Color(colors.surface_raised)),
        border: Border {
            color: colors.divider,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn page_background_follows_theme() {
        let light = page(&Theme::Light);
        let dark = page(&Theme::Dark);
        assert_eq!(light.background, Some(Background::Color(palette::WHITE)));
        assert_eq!(dark.background, Some(Background::Color(palette::GRAY_900)));
    }

    #[test]
    fn scrim_is_translucent() {
        match scrim(&Theme::Light).background {
            Some(Background::Color(color)) => assert!(color.a > 0.0 && color.a < 1.0),
            other => panic!("expected color background, got {other:?}"),
        }
    }

    #[test]
    fn modal_surface_is_raised() {
        let style = modal_surface(&Theme::Dark);
        assert_eq!(style.background, Some(Background::Color(palette::GRAY_800)));
        assert!(style.shadow.blur_radius > 0.0);
    }
}
