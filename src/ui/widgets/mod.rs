// SPDX-License-Identifier: MPL-2.0
//! Custom Iced widgets.

pub mod scroll_guard;

pub use scroll_guard::{scroll_guard, ScrollGuard};
