// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and the `Kind` enum used
//! throughout the notification system.

use std::fmt;
use std::time::Duration;

/// Unique identifier for a notification.
///
/// Identifiers come from a process-wide counter, so two notifications never
/// share one even across separate queues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Notification category.
///
/// Only the presentation depends on the kind (palette, glyph, log level).
/// Lifetime and dismissal rules are identical for every kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
    #[default]
    Success,
    Warning,
    Error,
    Info,
}

impl Kind {
    pub const ALL: [Kind; 4] = [Kind::Success, Kind::Warning, Kind::Error, Kind::Info];

    /// Glyph rendered at the start of the toast.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Kind::Success => "✓",
            Kind::Error => "✕",
            Kind::Info => "ℹ",
            Kind::Warning => "⚠",
        }
    }

    /// Capitalized name, as used on trigger buttons.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Kind::Success => "Success",
            Kind::Warning => "Warning",
            Kind::Error => "Error",
            Kind::Info => "Info",
        }
    }

    #[must_use]
    pub fn log_level(self) -> log::Level {
        match self {
            Kind::Success | Kind::Info => log::Level::Debug,
            Kind::Warning => log::Level::Warn,
            Kind::Error => log::Level::Error,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title().to_lowercase())
    }
}

/// A live notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    message: String,
    /// Delay after which the entry is removed automatically.
    duration: Duration,
}

impl Notification {
    pub(crate) fn new(
        kind: Kind,
        message: impl Into<String>,
        duration: Duration,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            message: message.into(),
            duration,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}
