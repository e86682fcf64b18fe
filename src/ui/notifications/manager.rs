// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `NotificationQueue` owns the ordered set of live notifications. Each
//! entry gets exactly one expiry timer when shown; the timer id is kept next
//! to the entry so a manual dismissal cancels it. A timer whose entry is
//! already gone therefore never fires, and a dismissal after expiry finds
//! nothing to remove.

use super::notification::{Kind, Notification, NotificationId};
use crate::config::DEFAULT_TOAST_DURATION_MS;
use crate::timer::{Clock, SystemClock, TimerId, Timers};
use std::time::{Duration, Instant};

/// Default lifetime of a notification.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(DEFAULT_TOAST_DURATION_MS);

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Fire due expiry timers.
    Tick,
}

#[derive(Debug, Clone)]
struct Entry {
    notification: Notification,
    timer: TimerId,
}

/// Ordered collection of live notifications with scheduled expiry.
#[derive(Debug)]
pub struct NotificationQueue<C: Clock = SystemClock> {
    /// Live entries, oldest first.
    entries: Vec<Entry>,
    timers: Timers<NotificationId>,
    clock: C,
    duration: Duration,
}

impl NotificationQueue<SystemClock> {
    /// Creates an empty queue driven by the wall clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for NotificationQueue<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> NotificationQueue<C> {
    /// Creates an empty queue reading time from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            entries: Vec::new(),
            timers: Timers::new(),
            clock,
            duration: DEFAULT_DURATION,
        }
    }

    /// Sets the lifetime applied by [`show`](Self::show).
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Lifetime applied by [`show`](Self::show).
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Shows a notification with the queue's default lifetime.
    pub fn show(&mut self, kind: Kind, message: impl Into<String>) -> NotificationId {
        self.show_with_duration(kind, message, self.duration)
    }

    /// Shows a notification that expires after `duration`.
    pub fn show_with_duration(
        &mut self,
        kind: Kind,
        message: impl Into<String>,
        duration: Duration,
    ) -> NotificationId {
        let now = self.clock.now();
        let notification = Notification::new(kind, message, duration);
        let id = notification.id();

        log::log!(
            kind.log_level(),
            "Notification {id} ({kind}, {duration:?}): {}",
            notification.message()
        );

        let timer = self.timers.schedule(id, duration, now);
        self.entries.push(Entry {
            notification,
            timer,
        });
        id
    }

    /// Dismisses a notification by its ID and cancels its expiry timer.
    ///
    /// Returns `true` if the notification was found and removed. Unknown or
    /// already removed IDs are ignored.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let Some(pos) = self.position(id) else {
            log::trace!("Dismiss ignored, notification {id} is not live");
            return false;
        };

        let entry = self.entries.remove(pos);
        self.timers.cancel(entry.timer);
        log::trace!("Notification {id} dismissed");
        true
    }

    /// Removes every notification whose timer is due and returns their IDs in
    /// expiry order.
    pub fn tick(&mut self) -> Vec<NotificationId> {
        let now = self.clock.now();
        self.expire_at(now)
    }

    fn expire_at(&mut self, now: Instant) -> Vec<NotificationId> {
        let due = self.timers.expire(now);
        let mut expired = Vec::with_capacity(due.len());
        for id in due {
            if let Some(pos) = self.position(id) {
                self.entries.remove(pos);
                log::trace!("Notification {id} expired");
                expired.push(id);
            }
        }
        expired
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Live notifications, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().map(|entry| &entry.notification)
    }

    /// The first `max` live notifications. The rest stay live and expire
    /// normally.
    pub fn visible(&self, max: usize) -> impl Iterator<Item = &Notification> {
        self.iter().take(max)
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.iter().find(|notification| notification.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.position(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns whether any expiry is still scheduled.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Earliest scheduled expiry.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Removes every notification and cancels their timers.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.timers.clear();
    }

    fn position(&self, id: NotificationId) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.notification.id() == id)
    }
}
