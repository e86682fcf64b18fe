// SPDX-License-Identifier: MPL-2.0
//! `iced_atelier` is a small UI component kit built with the Iced GUI framework.
//!
//! It provides typography primitives, a text input, a checkbox, toast
//! notifications and a modal dialog, plus a gallery of example pages and a
//! composed demo application.
//!
//! The two stateful pieces are framework-agnostic and can be driven without a
//! window:
//!
//! - [`ui::notifications::NotificationQueue`] - transient notifications with
//!   scheduled auto-expiry and manual dismissal by identity
//! - [`ui::overlay::OverlayController`] - single modal surface lifecycle with a
//!   scoped scroll lock

#![doc(html_root_url = "https://docs.rs/iced_atelier/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod timer;
pub mod ui;
