// SPDX-License-Identifier: MPL-2.0
//! Modal overlay lifecycle.
//!
//! ```text
//! Closed --open()--> Open
//! Open --open()--> Open              (payload refreshed, lock untouched)
//! Open --close request / scrim / escape--> Closed
//! Closed --close request--> Closed   (no-op)
//! ```
//!
//! The scroll lock is held by a guard that lives inside the open state, so
//! the lock is held exactly while the overlay is open and is released once on
//! every path out of it, including dropping the controller.

use super::scroll_lock::{ScrollLock, ScrollLockGuard};

/// Payload of an open overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayState<T> {
    pub title: String,
    pub content: T,
}

/// User input routed to the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// Click on the translucent backdrop outside the surface.
    ScrimPressed,
    /// Click inside the dialog surface.
    SurfacePressed,
    EscapePressed,
    /// Close button or an explicit close action.
    CloseRequested,
}

/// Outcome reported to the owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Event {
    #[default]
    None,
    /// The overlay transitioned from open to closed.
    Closed,
}

#[derive(Debug)]
struct Open<T, L: ScrollLock> {
    state: OverlayState<T>,
    _guard: ScrollLockGuard<L>,
}

/// Governs a single modal surface.
#[derive(Debug)]
pub struct OverlayController<T, L: ScrollLock + Clone> {
    lock: L,
    open: Option<Open<T, L>>,
}

impl<T, L: ScrollLock + Clone> OverlayController<T, L> {
    pub fn new(lock: L) -> Self {
        Self { lock, open: None }
    }

    /// Opens the overlay, or replaces the payload if it is already open.
    pub fn open(&mut self, title: impl Into<String>, content: T) {
        let state = OverlayState {
            title: title.into(),
            content,
        };

        match &mut self.open {
            Some(open) => {
                log::debug!("Overlay refreshed: {}", state.title);
                open.state = state;
            }
            None => {
                log::debug!("Overlay opened: {}", state.title);
                self.open = Some(Open {
                    state,
                    _guard: ScrollLockGuard::new(self.lock.clone()),
                });
            }
        }
    }

    /// Closes the overlay.
    ///
    /// Returns `true` if it was open. Closing a closed overlay does nothing.
    pub fn request_close(&mut self) -> bool {
        match self.open.take() {
            Some(open) => {
                log::debug!("Overlay closed: {}", open.state.title);
                true
            }
            None => false,
        }
    }

    /// Routes an interaction. Clicks inside the surface never close it.
    pub fn update(&mut self, interaction: Interaction) -> Event {
        match interaction {
            Interaction::SurfacePressed => Event::None,
            Interaction::ScrimPressed | Interaction::EscapePressed | Interaction::CloseRequested => {
                if self.request_close() {
                    Event::Closed
                } else {
                    Event::None
                }
            }
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    #[must_use]
    pub fn state(&self) -> Option<&OverlayState<T>> {
        self.open.as_ref().map(|open| &open.state)
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.state().map(|state| state.title.as_str())
    }

    #[must_use]
    pub fn content(&self) -> Option<&T> {
        self.state().map(|state| &state.content)
    }

    /// The lock this controller acquires while open.
    #[must_use]
    pub fn lock(&self) -> &L {
        &self.lock
    }
}
