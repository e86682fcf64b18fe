// SPDX-License-Identifier: MPL-2.0
//! Deadline-based timer facility.
//!
//! Components that need "run this later" behavior (notification auto-expiry)
//! store a [`TimerId`] next to the entity the timer refers to, so a manual
//! removal can cancel the timer deterministically. Time is read through a
//! [`Clock`], which lets tests drive expiry with a [`ManualClock`] instead of
//! waiting on the wall clock.
//!
//! Timers never fire on their own: the owner calls [`Timers::expire`] on each
//! scheduling opportunity (an Iced tick in the demo application). A timer with a
//! zero delay is due immediately and fires on the next `expire` call. A delay
//! too large to represent as an [`Instant`] never fires; such a timer stays
//! pending until it is cancelled.
//!
//! # Example
//!
//! ```
//! use iced_atelier::timer::{Clock, ManualClock, Timers};
//! use std::time::Duration;
//!
//! let clock = ManualClock::new();
//! let mut timers = Timers::new();
//! let id = timers.schedule("toast-1", Duration::from_millis(500), clock.now());
//!
//! clock.advance(Duration::from_millis(499));
//! assert!(timers.expire(clock.now()).is_empty());
//!
//! clock.advance(Duration::from_millis(1));
//! assert_eq!(timers.expire(clock.now()), vec!["toast-1"]);
//! assert!(!timers.cancel(id)); // already fired
//! ```

mod clock;

pub use clock::{Clock, ManualClock, SystemClock};

use std::time::{Duration, Instant};

/// Handle returned by [`Timers::schedule`], used to cancel a pending timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Entry<K> {
    id: TimerId,
    /// `None` when the deadline lies beyond what `Instant` can represent.
    deadline: Option<Instant>,
    key: K,
}

impl<K> Entry<K> {
    /// Sort key placing unreachable deadlines after every reachable one.
    fn order(&self) -> (bool, Option<Instant>, TimerId) {
        (self.deadline.is_none(), self.deadline, self.id)
    }

    fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| deadline <= now)
    }
}

/// A set of pending deadlines, each carrying a caller-supplied key.
#[derive(Debug, Clone)]
pub struct Timers<K> {
    /// Pending timers, kept sorted by `Entry::order`.
    pending: Vec<Entry<K>>,
    next_id: u64,
}

impl<K> Default for Timers<K> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            next_id: 0,
        }
    }
}

impl<K> Timers<K> {
    /// Creates an empty timer set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `key` to be returned by [`expire`](Self::expire) once
    /// `now + delay` has been reached.
    ///
    /// If `now + delay` overflows, the timer never becomes due.
    pub fn schedule(&mut self, key: K, delay: Duration, now: Instant) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;

        let entry = Entry {
            id,
            deadline: now.checked_add(delay),
            key,
        };
        // Equal deadlines keep scheduling order since ids are monotonic.
        let order = entry.order();
        let index = self.pending.partition_point(|other| other.order() <= order);
        self.pending.insert(index, entry);
        id
    }

    /// Cancels a pending timer.
    ///
    /// Returns `false` if the timer is unknown, already fired, or already
    /// cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        if let Some(pos) = self.pending.iter().position(|entry| entry.id == id) {
            self.pending.remove(pos);
            true
        } else {
            false
        }
    }

    /// Removes every timer whose deadline is at or before `now` and returns
    /// their keys in firing order.
    pub fn expire(&mut self, now: Instant) -> Vec<K> {
        let due = self.pending.partition_point(|entry| entry.is_due(now));
        self.pending.drain(..due).map(|entry| entry.key).collect()
    }

    /// Returns the earliest reachable pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.first().and_then(|entry| entry.deadline)
    }

    #[cfg(test)]
    fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|entry| entry.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Cancels every pending timer.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
