// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme handling.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Color palette for a theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    // Surface colors
    pub surface_page: Color,
    pub surface_raised: Color,
    pub surface_muted: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_disabled: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_hover: Color,

    // Semantic colors
    pub destructive: Color,
    pub warning: Color,
    pub success: Color,

    // Borders
    pub border: Color,
    pub divider: Color,

    pub scrim: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_page: palette::WHITE,
            surface_raised: palette::WHITE,
            surface_muted: palette::GRAY_200,

            text_primary: palette::BLACK,
            text_secondary: palette::GRAY_600,
            text_disabled: palette::GRAY_400,

            brand_primary: palette::BLUE_600,
            brand_hover: palette::BLUE_700,

            destructive: palette::RED_600,
            warning: palette::YELLOW_500,
            success: palette::GREEN_600,

            border: palette::GRAY_300,
            divider: palette::GRAY_200,

            scrim: Color {
                a: opacity::SCRIM,
                ..palette::BLACK
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_page: palette::GRAY_900,
            surface_raised: palette::GRAY_800,
            surface_muted: palette::GRAY_700,

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_300,
            text_disabled: palette::GRAY_500,

            brand_primary: palette::BLUE_600,
            brand_hover: palette::BLUE_700,

            destructive: palette::RED_400,
            warning: palette::YELLOW_500,
            success: palette::GREEN_600,

            border: palette::GRAY_600,
            divider: palette::GRAY_700,

            scrim: Color {
                a: opacity::SCRIM,
                ..palette::BLACK
            },
        }
    }

    /// Returns the scheme for the given darkness.
    #[must_use]
    pub fn for_dark(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Detects the system theme and returns the appropriate `ColorScheme`.
    #[must_use]
    pub fn from_system() -> Self {
        Self::for_dark(ThemeMode::System.is_dark())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Default to dark on detection error
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// Flips the effective mode.
    ///
    /// `System` resolves to whatever the desktop currently reports, so the
    /// result is always an explicit `Light` or `Dark`.
    #[must_use]
    pub fn toggled(self) -> Self {
        Self::from_dark(!self.is_dark())
    }

    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// Label of the toggle button, naming the mode it switches to.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        if self.is_dark() {
            "Toggle Light Mode"
        } else {
            "Toggle Dark Mode"
        }
    }

    /// Iced built-in theme matching the effective mode.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        };
        f.write_str(name)
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(format!("invalid theme_mode: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_page.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_page.r < 0.2);
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // Depends on the desktop, only verify it doesn't panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn toggled_flips_explicit_modes() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    #[test]
    fn toggled_system_resolves_to_explicit_mode() {
        let toggled = ThemeMode::System.toggled();
        assert_ne!(toggled, ThemeMode::System);
        assert_eq!(toggled.is_dark(), !ThemeMode::System.is_dark());
    }

    #[test]
    fn toggle_label_names_target_mode() {
        assert_eq!(ThemeMode::Dark.toggle_label(), "Toggle Light Mode");
        assert_eq!(ThemeMode::Light.toggle_label(), "Toggle Dark Mode");
    }

    #[test]
    fn parse_and_display_agree() {
        for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System] {
            assert_eq!(mode.to_string().parse::<ThemeMode>(), Ok(mode));
        }
        assert_eq!(" DARK ".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert!("sepia".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn iced_theme_follows_mode() {
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
        assert_eq!(ThemeMode::Light.iced_theme(), Theme::Light);
    }
}
