// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to report the outcome of an action
//! without blocking interaction. Each one expires on its own after a fixed
//! lifetime (3 seconds by default) and can be dismissed earlier by clicking it.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct and its `Kind`
//! - [`manager`] - `NotificationQueue` owning live entries and expiry timers
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use iced_atelier::ui::notifications::{Kind, NotificationQueue, Toast};
//!
//! let mut queue = NotificationQueue::new();
//! let id = queue.show(Kind::Success, "Saved");
//!
//! // Drive expiry from a periodic tick
//! let expired = queue.tick();
//!
//! // In your view function, render toasts
//! let toast_overlay = Toast::view_overlay(&queue, 5, dark).map(Message::Notification);
//! ```

pub mod manager;
pub mod notification;
mod toast;

pub use manager::{Message as NotificationMessage, NotificationQueue, DEFAULT_DURATION};
pub use notification::{Kind, Notification, NotificationId};
pub use toast::Toast;
