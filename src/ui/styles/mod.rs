// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for all UI components.

pub mod button;
pub mod checkbox;
pub mod container;
pub mod text_input;

use iced::Theme;

/// Whether `theme` is one of the dark built-in themes.
#[must_use]
pub fn is_dark(theme: &Theme) -> bool {
    !matches!(theme, Theme::Light)
}
