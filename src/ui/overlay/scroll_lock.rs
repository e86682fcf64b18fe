// SPDX-License-Identifier: MPL-2.0
//! Background scroll suppression.
//!
//! An open modal must keep the page behind it from scrolling. The switch is
//! modeled as a [`ScrollLock`] so the controller can be tested against a
//! shared flag and the application can wire the same flag into its
//! scroll wrapper widget.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Global "background scrolling disabled" switch.
pub trait ScrollLock {
    fn acquire(&self);
    fn release(&self);
    fn is_locked(&self) -> bool;
}

impl<L: ScrollLock + ?Sized> ScrollLock for &L {
    fn acquire(&self) {
        (**self).acquire();
    }

    fn release(&self) {
        (**self).release();
    }

    fn is_locked(&self) -> bool {
        (**self).is_locked()
    }
}

#[derive(Debug, Default)]
struct FlagState {
    holders: AtomicUsize,
    acquisitions: AtomicUsize,
    releases: AtomicUsize,
}

/// Shared scroll lock. Clones observe the same flag.
///
/// The flag counts holders, so it stays locked until every acquisition has
/// been released.
#[derive(Debug, Clone, Default)]
pub struct ScrollFlag {
    state: Arc<FlagState>,
}

impl ScrollFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the lock was acquired.
    #[must_use]
    pub fn acquisitions(&self) -> usize {
        self.state.acquisitions.load(Ordering::SeqCst)
    }

    /// Number of times the lock was released.
    #[must_use]
    pub fn releases(&self) -> usize {
        self.state.releases.load(Ordering::SeqCst)
    }
}

impl ScrollLock for ScrollFlag {
    fn acquire(&self) {
        self.state.acquisitions.fetch_add(1, Ordering::SeqCst);
        let holders = self.state.holders.fetch_add(1, Ordering::SeqCst) + 1;
        log::trace!("Background scroll locked ({holders} holders)");
    }

    fn release(&self) {
        let previous = self
            .state
            .holders
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
        match previous {
            Ok(holders) => {
                self.state.releases.fetch_add(1, Ordering::SeqCst);
                log::trace!("Background scroll released ({} holders)", holders - 1);
            }
            Err(_) => log::warn!("Scroll lock released without a holder"),
        }
    }

    fn is_locked(&self) -> bool {
        self.state.holders.load(Ordering::SeqCst) > 0
    }
}

/// Holds a [`ScrollLock`] for as long as it lives.
///
/// Construction acquires, `Drop` releases. Each guard releases exactly once.
#[derive(Debug)]
pub struct ScrollLockGuard<L: ScrollLock> {
    lock: L,
}

impl<L: ScrollLock> ScrollLockGuard<L> {
    pub fn new(lock: L) -> Self {
        lock.acquire();
        Self { lock }
    }
}

impl<L: ScrollLock> Drop for ScrollLockGuard<L> {
    fn drop(&mut self) {
        self.lock.release();
    }
}
