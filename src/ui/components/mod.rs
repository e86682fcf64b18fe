// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.
//!
//! Each component is a small builder that resolves its style from the design
//! tokens and returns an Iced `Element`. None of them own state: the caller
//! keeps the value and receives changes through messages.
//!
//! # Components
//!
//! - [`typography`] - Text variants from `h1` down to `helper`
//! - [`text_input`] - Labeled field with an error line
//! - [`checkbox`] - Labeled checkbox with a disabled state

pub mod checkbox;
pub mod text_input;
pub mod typography;

pub use checkbox::Checkbox;
pub use text_input::TextInput;
pub use typography::Typography;
