// SPDX-License-Identifier: MPL-2.0
//! Style resolution for text variants and toast kinds.
//!
//! Both functions are pure: they map a variant (and the current darkness) to
//! concrete sizes, weights and colors. Widgets call them at view time instead
//! of hard-coding styles, which keeps every component consistent with the
//! same scale.

use crate::ui::design_tokens::{palette, typography};
use crate::ui::notifications::Kind;
use iced::font::{self, Font};
use iced::Color;

/// Text hierarchy level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    #[default]
    P,
    Label,
    Caption,
    Helper,
}

impl Variant {
    pub const ALL: [Variant; 10] = [
        Variant::H1,
        Variant::H2,
        Variant::H3,
        Variant::H4,
        Variant::H5,
        Variant::H6,
        Variant::P,
        Variant::Label,
        Variant::Caption,
        Variant::Helper,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Variant::H1 => "h1",
            Variant::H2 => "h2",
            Variant::H3 => "h3",
            Variant::H4 => "h4",
            Variant::H5 => "h5",
            Variant::H6 => "h6",
            Variant::P => "p",
            Variant::Label => "label",
            Variant::Caption => "caption",
            Variant::Helper => "helper",
        }
    }
}

/// Semantic text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextColor {
    #[default]
    Default,
    Muted,
    Primary,
    Destructive,
}

impl TextColor {
    pub const ALL: [TextColor; 4] = [
        TextColor::Default,
        TextColor::Muted,
        TextColor::Primary,
        TextColor::Destructive,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            TextColor::Default => "default",
            TextColor::Muted => "muted",
            TextColor::Primary => "primary",
            TextColor::Destructive => "destructive",
        }
    }

    #[must_use]
    pub fn resolve(self, dark: bool) -> Color {
        match (self, dark) {
            (TextColor::Default, false) => palette::GRAY_900,
            (TextColor::Default, true) => palette::WHITE,
            (TextColor::Muted, false) => palette::GRAY_600,
            (TextColor::Muted, true) => palette::GRAY_300,
            (TextColor::Primary, false) => palette::BLUE_600,
            (TextColor::Primary, true) => palette::BLUE_400,
            (TextColor::Destructive, false) => palette::RED_600,
            (TextColor::Destructive, true) => palette::RED_400,
        }
    }
}

/// Concrete text style produced by [`resolve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub weight: font::Weight,
    pub color: Color,
}

impl TextStyle {
    #[must_use]
    pub fn font(&self) -> Font {
        Font {
            weight: self.weight,
            ..Font::default()
        }
    }
}

/// Resolves a variant and color into a concrete style.
#[must_use]
pub fn resolve(variant: Variant, color: TextColor, dark: bool) -> TextStyle {
    let (size, weight) = match variant {
        Variant::H1 => (typography::TEXT_4XL, font::Weight::Bold),
        Variant::H2 => (typography::TEXT_3XL, font::Weight::Semibold),
        Variant::H3 => (typography::TEXT_2XL, font::Weight::Semibold),
        Variant::H4 => (typography::TEXT_XL, font::Weight::Medium),
        Variant::H5 => (typography::TEXT_LG, font::Weight::Medium),
        Variant::H6 => (typography::TEXT_BASE, font::Weight::Medium),
        Variant::P => (typography::TEXT_BASE, font::Weight::Normal),
        Variant::Label => (typography::TEXT_SM, font::Weight::Medium),
        Variant::Caption | Variant::Helper => (typography::TEXT_XS, font::Weight::Normal),
    };

    TextStyle {
        size,
        weight,
        color: color.resolve(dark),
    }
}

/// Colors of a toast card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastPalette {
    pub background: Color,
    pub text: Color,
    pub accent: Color,
}

/// Resolves the toast palette for a notification kind.
#[must_use]
pub fn toast_palette(kind: Kind, dark: bool) -> ToastPalette {
    let (light_bg, dark_bg, light_text, dark_text, accent) = match kind {
        Kind::Success => (
            palette::GREEN_100,
            palette::GREEN_900,
            palette::GREEN_800,
            palette::GREEN_100,
            palette::GREEN_600,
        ),
        Kind::Error => (
            palette::RED_100,
            palette::RED_900,
            palette::RED_800,
            palette::RED_100,
            palette::RED_600,
        ),
        Kind::Info => (
            palette::BLUE_100,
            palette::BLUE_900,
            palette::BLUE_800,
            palette::BLUE_100,
            palette::BLUE_600,
        ),
        Kind::Warning => (
            palette::YELLOW_100,
            palette::YELLOW_900,
            palette::YELLOW_800,
            palette::YELLOW_100,
            palette::YELLOW_500,
        ),
    };

    if dark {
        ToastPalette {
            background: dark_bg,
            text: dark_text,
            accent,
        }
    } else {
        ToastPalette {
            background: light_bg,
            text: light_text,
            accent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_variant_is_paragraph() {
        assert_eq!(Variant::default(), Variant::P);
        assert_eq!(TextColor::default(), TextColor::Default);
    }

    #[test]
    fn headings_shrink_monotonically() {
        let sizes: Vec<f32> = [
            Variant::H1,
            Variant::H2,
            Variant::H3,
            Variant::H4,
            Variant::H5,
        ]
        .iter()
        .map(|v| resolve(*v, TextColor::Default, false).size)
        .collect();
        assert!(sizes.windows(2).all(|pair| pair[0] > pair[1]));
    }

    #[test]
    fn heading_weights_match_scale() {
        assert_eq!(resolve(Variant::H1, TextColor::Default, false).weight, font::Weight::Bold);
        assert_eq!(
            resolve(Variant::H2, TextColor::Default, false).weight,
            font::Weight::Semibold
        );
        assert_eq!(resolve(Variant::H6, TextColor::Default, false).weight, font::Weight::Medium);
        assert_eq!(resolve(Variant::P, TextColor::Default, false).weight, font::Weight::Normal);
    }

    #[test]
    fn caption_and_helper_share_size() {
        let caption = resolve(Variant::Caption, TextColor::Muted, false);
        let helper = resolve(Variant::Helper, TextColor::Muted, false);
        assert_eq!(caption.size, 12.0);
        assert_eq!(caption, helper);
    }

    #[test]
    fn color_follows_darkness() {
        assert_eq!(TextColor::Default.resolve(false), palette::GRAY_900);
        assert_eq!(TextColor::Default.resolve(true), palette::WHITE);
        assert_eq!(TextColor::Destructive.resolve(true), palette::RED_400);
    }

    #[test]
    fn font_carries_weight() {
        let style = resolve(Variant::H1, TextColor::Primary, true);
        assert_eq!(style.font().weight, font::Weight::Bold);
    }

    #[test]
    fn toast_palette_inverts_in_dark_mode() {
        let light = toast_palette(Kind::Success, false);
        let dark = toast_palette(Kind::Success, true);
        assert_eq!(light.background, dark.text);
        assert_eq!(light.accent, dark.accent);
    }
}
