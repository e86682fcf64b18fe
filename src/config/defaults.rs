// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration constants.
//!
//! # Categories
//!
//! - **Notifications**: Toast lifetime and how many are rendered at once
//! - **Ticks**: Polling period used to drive scheduled expiry

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default toast lifetime before automatic dismissal (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

/// Minimum accepted toast lifetime (in milliseconds).
pub const MIN_TOAST_DURATION_MS: u64 = 500;

/// Maximum accepted toast lifetime (in milliseconds).
pub const MAX_TOAST_DURATION_MS: u64 = 60_000;

/// Default number of toasts rendered simultaneously.
pub const DEFAULT_MAX_VISIBLE_TOASTS: usize = 5;

/// Minimum number of toasts rendered simultaneously.
pub const MIN_MAX_VISIBLE_TOASTS: usize = 1;

/// Maximum number of toasts rendered simultaneously.
pub const MAX_MAX_VISIBLE_TOASTS: usize = 20;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Period of the tick subscription while timers are pending (in milliseconds).
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Compile-time validation
// ==========================================================================

const _: () = {
    assert!(MIN_TOAST_DURATION_MS <= DEFAULT_TOAST_DURATION_MS);
    assert!(DEFAULT_TOAST_DURATION_MS <= MAX_TOAST_DURATION_MS);
    assert!(MIN_MAX_VISIBLE_TOASTS <= DEFAULT_MAX_VISIBLE_TOASTS);
    assert!(DEFAULT_MAX_VISIBLE_TOASTS <= MAX_MAX_VISIBLE_TOASTS);
    assert!(TICK_INTERVAL_MS < MIN_TOAST_DURATION_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_duration_matches_three_seconds() {
        assert_eq!(DEFAULT_TOAST_DURATION_MS, 3000);
    }

    #[test]
    fn tick_is_fine_enough_for_shortest_toast() {
        assert!(MIN_TOAST_DURATION_MS / TICK_INTERVAL_MS >= 5);
    }
}
