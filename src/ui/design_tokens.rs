// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the kit's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors (gray, blue, red, green and yellow ramps)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale used by the text variants
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_atelier::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

// Modal scrim color
let scrim = Color {
    a: opacity::SCRIM,
    ..palette::BLACK
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```

## Modification

Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Grayscale
    pub const GRAY_100: Color = Color::from_rgb8(0xF3, 0xF4, 0xF6);
    pub const GRAY_200: Color = Color::from_rgb8(0xE5, 0xE7, 0xEB);
    pub const GRAY_300: Color = Color::from_rgb8(0xD1, 0xD5, 0xDB);
    pub const GRAY_400: Color = Color::from_rgb8(0x9C, 0xA3, 0xAF);
    pub const GRAY_500: Color = Color::from_rgb8(0x6B, 0x72, 0x80);
    pub const GRAY_600: Color = Color::from_rgb8(0x4B, 0x55, 0x63);
    pub const GRAY_700: Color = Color::from_rgb8(0x37, 0x41, 0x51);
    pub const GRAY_800: Color = Color::from_rgb8(0x1F, 0x29, 0x37);
    pub const GRAY_900: Color = Color::from_rgb8(0x11, 0x18, 0x27);

    // Brand (blue scale)
    pub const BLUE_100: Color = Color::from_rgb8(0xDB, 0xEA, 0xFE);
    pub const BLUE_400: Color = Color::from_rgb8(0x60, 0xA5, 0xFA);
    pub const BLUE_500: Color = Color::from_rgb8(0x3B, 0x82, 0xF6);
    pub const BLUE_600: Color = Color::from_rgb8(0x25, 0x63, 0xEB);
    pub const BLUE_700: Color = Color::from_rgb8(0x1D, 0x4E, 0xD8);
    pub const BLUE_800: Color = Color::from_rgb8(0x1E, 0x40, 0xAF);
    pub const BLUE_900: Color = Color::from_rgb8(0x1E, 0x3A, 0x8A);

    // Destructive (red scale)
    pub const RED_100: Color = Color::from_rgb8(0xFE, 0xE2, 0xE2);
    pub const RED_400: Color = Color::from_rgb8(0xF8, 0x71, 0x71);
    pub const RED_500: Color = Color::from_rgb8(0xEF, 0x44, 0x44);
    pub const RED_600: Color = Color::from_rgb8(0xDC, 0x26, 0x26);
    pub const RED_800: Color = Color::from_rgb8(0x99, 0x1B, 0x1B);
    pub const RED_900: Color = Color::from_rgb8(0x7F, 0x1D, 0x1D);

    // Success (green scale)
    pub const GREEN_100: Color = Color::from_rgb8(0xDC, 0xFC, 0xE7);
    pub const GREEN_600: Color = Color::from_rgb8(0x16, 0xA3, 0x4A);
    pub const GREEN_800: Color = Color::from_rgb8(0x16, 0x65, 0x34);
    pub const GREEN_900: Color = Color::from_rgb8(0x14, 0x53, 0x2D);

    // Warning (yellow scale)
    pub const YELLOW_100: Color = Color::from_rgb8(0xFE, 0xF9, 0xC3);
    pub const YELLOW_500: Color = Color::from_rgb8(0xEA, 0xB3, 0x08);
    pub const YELLOW_800: Color = Color::from_rgb8(0x85, 0x4D, 0x0E);
    pub const YELLOW_900: Color = Color::from_rgb8(0x71, 0x3F, 0x12);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Disabled controls
    pub const DISABLED: f32 = 0.5;
    /// Modal backdrop
    pub const SCRIM: f32 = 0.5;
    /// Close glyph on hover
    pub const HOVER_DIM: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // gap-1
    pub const XS: f32 = 8.0; // gap-2
    pub const SM: f32 = 12.0; // gap-3
    pub const MD: f32 = 16.0; // gap-4, p-4
    pub const LG: f32 = 24.0; // p-6
    pub const XL: f32 = 32.0; // space-y-8
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Glyph icons
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_HEIGHT: f32 = 40.0;
    pub const CHECKBOX: f32 = 20.0;

    // Component widths
    /// Toast card (max-w-xs)
    pub const TOAST_WIDTH: f32 = 320.0;
    /// Modal surface (max-w-md)
    pub const MODAL_MAX_WIDTH: f32 = 448.0;
    /// Form controls in the gallery pages
    pub const FIELD_WIDTH: f32 = 360.0;
    /// Readable column for page content
    pub const CONTENT_MAX_WIDTH: f32 = 720.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale matching the text variants.
    //!
    //! Each constant maps to one step of the heading and body hierarchy.

    pub const TEXT_4XL: f32 = 36.0;
    pub const TEXT_3XL: f32 = 30.0;
    pub const TEXT_2XL: f32 = 24.0;
    pub const TEXT_XL: f32 = 20.0;
    pub const TEXT_LG: f32 = 18.0;
    pub const TEXT_BASE: f32 = 16.0;
    pub const TEXT_SM: f32 = 14.0;
    pub const TEXT_XS: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Inputs, dividers
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Focus ring, toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0; // rounded
    pub const MD: f32 = 8.0; // rounded-lg
    pub const LG: f32 = 12.0; // rounded-xl
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    const SHADOW_COLOR: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.25);

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const LG: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };

    pub const XL: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 16.0 },
        blur_radius: 32.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SCRIM > 0.0 && opacity::SCRIM < 1.0);

    // Sizing validation
    assert!(sizing::MODAL_MAX_WIDTH > sizing::TOAST_WIDTH);
    assert!(sizing::ICON_MD > sizing::ICON_SM);

    // Typography validation
    assert!(typography::TEXT_4XL > typography::TEXT_3XL);
    assert!(typography::TEXT_3XL > typography::TEXT_2XL);
    assert!(typography::TEXT_2XL > typography::TEXT_XL);
    assert!(typography::TEXT_XL > typography::TEXT_LG);
    assert!(typography::TEXT_LG > typography::TEXT_BASE);
    assert!(typography::TEXT_BASE > typography::TEXT_SM);
    assert!(typography::TEXT_SM > typography::TEXT_XS);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn gray_ramp_darkens() {
        assert!(palette::GRAY_100.r > palette::GRAY_300.r);
        assert!(palette::GRAY_300.r > palette::GRAY_600.r);
        assert!(palette::GRAY_600.r > palette::GRAY_900.r);
    }

    #[test]
    fn semantic_ramps_keep_their_hue() {
        assert!(palette::BLUE_600.b > palette::BLUE_600.r);
        assert!(palette::RED_600.r > palette::RED_600.b);
        assert!(palette::GREEN_600.g > palette::GREEN_600.r);
        assert!(palette::YELLOW_500.r > palette::YELLOW_500.b);
    }
}
