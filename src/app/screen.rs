// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Showcase,
    Typography,
    TextInput,
    Checkbox,
    Toast,
    Modal,
}

impl Screen {
    /// Navigation order.
    pub const ALL: [Screen; 6] = [
        Screen::Showcase,
        Screen::Typography,
        Screen::TextInput,
        Screen::Checkbox,
        Screen::Toast,
        Screen::Modal,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Screen::Showcase => "Showcase",
            Screen::Typography => "Typography",
            Screen::TextInput => "Text Input",
            Screen::Checkbox => "Checkbox",
            Screen::Toast => "Toast",
            Screen::Modal => "Modal",
        }
    }
}
