// SPDX-License-Identifier: MPL-2.0
//! Modal overlay: lifecycle controller, scroll lock and dialog view.
//!
//! # Components
//!
//! - [`controller`] - `OverlayController` state machine (open, close triggers)
//! - [`scroll_lock`] - `ScrollLock` seam, `ScrollFlag` and the RAII guard
//! - [`modal`] - Dialog view layered over the page
//!
//! # Usage
//!
//! ```
//! use iced_atelier::ui::overlay::{Event, Interaction, OverlayController, ScrollFlag, ScrollLock};
//!
//! let flag = ScrollFlag::new();
//! let mut overlay = OverlayController::new(flag.clone());
//!
//! overlay.open("Confirm", "Are you sure?");
//! assert!(flag.is_locked());
//!
//! // Clicks inside the dialog are ignored, the backdrop closes it
//! assert_eq!(overlay.update(Interaction::SurfacePressed), Event::None);
//! assert_eq!(overlay.update(Interaction::ScrimPressed), Event::Closed);
//! assert!(!flag.is_locked());
//! ```

pub mod controller;
pub mod modal;
pub mod scroll_lock;

pub use controller::{Event, Interaction, OverlayController, OverlayState};
pub use modal::Modal;
pub use scroll_lock::{ScrollFlag, ScrollLock, ScrollLockGuard};
