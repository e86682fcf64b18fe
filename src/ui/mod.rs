// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`showcase`] - Every component on a single page
//! - [`gallery`] - One example page per component
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Typography, text input and checkbox builders
//! - [`notifications`] - Toast notification queue and rendering
//! - [`overlay`] - Modal dialog with its scroll lock
//! - [`widgets`] - Custom Iced widgets (scroll guard)
//! - [`styles`] - Centralized styling (buttons, containers, inputs)
//! - [`variants`] - Text and toast variant resolution
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod design_tokens;
pub mod gallery;
pub mod notifications;
pub mod overlay;
pub mod showcase;
pub mod styles;
pub mod theming;
pub mod variants;
pub mod widgets;
