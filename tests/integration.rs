// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios for the notification queue, the modal overlay and the
//! configuration loader, driven through the public API without a window.

use iced_atelier::config::{self, DEFAULT_TOAST_DURATION_MS};
use iced_atelier::timer::{Clock, ManualClock};
use iced_atelier::ui::notifications::{Kind, NotificationMessage, NotificationQueue};
use iced_atelier::ui::overlay::{
    Event, Interaction, OverlayController, ScrollFlag, ScrollLock,
};
use iced_atelier::ui::theming::ThemeMode;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

const MS: Duration = Duration::from_millis(1);

fn snapshot<C: Clock>(queue: &NotificationQueue<C>) -> Vec<(Kind, String)> {
    queue
        .iter()
        .map(|n| (n.kind(), n.message().to_string()))
        .collect()
}

#[test]
fn success_toast_expires_after_default_lifetime() {
    let clock = ManualClock::new();
    let mut queue = NotificationQueue::with_clock(clock.clone());

    queue.show(Kind::Success, "Saved");
    assert_eq!(snapshot(&queue), vec![(Kind::Success, "Saved".to_string())]);

    clock.advance(MS * (DEFAULT_TOAST_DURATION_MS as u32 - 1));
    assert!(queue.tick().is_empty());
    assert_eq!(queue.len(), 1);

    clock.advance(MS);
    assert_eq!(queue.tick().len(), 1);
    assert!(queue.is_empty());

    // Stays gone on later ticks
    clock.advance(MS * 5000);
    assert!(queue.tick().is_empty());
    assert!(queue.is_empty());
}

#[test]
fn early_dismiss_prevents_later_expiry() {
    let clock = ManualClock::new();
    let mut queue = NotificationQueue::with_clock(clock.clone());

    let first = queue.show(Kind::Info, "first");
    clock.advance(MS * 1000);
    let second = queue.show(Kind::Error, "second");

    queue.handle_message(&NotificationMessage::Dismiss(first));
    assert_eq!(snapshot(&queue), vec![(Kind::Error, "second".to_string())]);

    // The first toast's deadline passes without touching the second
    clock.advance(MS * 2500);
    assert!(queue.tick().is_empty());
    assert!(queue.contains(second));

    clock.advance(MS * 500);
    assert_eq!(queue.tick(), vec![second]);
    assert!(!queue.has_pending_timers());
}

#[test]
fn live_count_tracks_shows_minus_removals() {
    let clock = ManualClock::new();
    let mut queue = NotificationQueue::with_clock(clock.clone());

    let ids: Vec<_> = Kind::ALL
        .iter()
        .map(|&kind| queue.show(kind, kind.title()))
        .collect();
    assert_eq!(queue.len(), 4);

    assert!(queue.dismiss(ids[1]));
    assert!(!queue.dismiss(ids[1]));
    assert_eq!(queue.len(), 3);

    clock.advance(MS * DEFAULT_TOAST_DURATION_MS as u32);
    assert_eq!(queue.tick().len(), 3);
    assert_eq!(queue.len(), 0);

    assert!(!queue.dismiss(ids[0]));
    assert_eq!(queue.len(), 0);
}

#[test]
fn visible_window_shows_oldest_first() {
    let clock = ManualClock::new();
    let mut queue = NotificationQueue::with_clock(clock);

    for n in 0..7 {
        queue.show(Kind::Info, format!("toast {n}"));
    }

    let visible: Vec<_> = queue.visible(5).map(|n| n.message().to_string()).collect();
    assert_eq!(visible.len(), 5);
    assert_eq!(visible.first().map(String::as_str), Some("toast 0"));
    assert_eq!(visible.last().map(String::as_str), Some("toast 4"));
}

#[test]
fn scrim_click_closes_and_unlocks() {
    let flag = ScrollFlag::new();
    let mut overlay = OverlayController::new(flag.clone());

    overlay.open("Confirm", 42_u32);
    assert!(flag.is_locked());
    assert_eq!(overlay.content(), Some(&42));

    assert_eq!(overlay.update(Interaction::SurfacePressed), Event::None);
    assert!(overlay.is_open());

    assert_eq!(overlay.update(Interaction::ScrimPressed), Event::Closed);
    assert!(!overlay.is_open());
    assert!(!flag.is_locked());
}

#[test]
fn reopening_needs_a_single_close() {
    let flag = ScrollFlag::new();
    let mut overlay = OverlayController::new(flag.clone());

    overlay.open("First", ());
    overlay.open("Second", ());
    assert_eq!(overlay.title(), Some("Second"));
    assert_eq!(flag.acquisitions(), 1);

    assert_eq!(overlay.update(Interaction::EscapePressed), Event::Closed);
    assert!(!flag.is_locked());
    assert_eq!(overlay.update(Interaction::CloseRequested), Event::None);
    assert_eq!(flag.releases(), 1);
}

#[test]
fn dropping_open_overlay_releases_lock() {
    let flag = ScrollFlag::new();
    {
        let mut overlay = OverlayController::new(flag.clone());
        overlay.open("Terms", "body");
        assert!(flag.is_locked());
    }
    assert!(!flag.is_locked());
}

#[test]
fn config_file_is_read_from_override_dir() {
    let dir = tempdir().expect("failed to create temp dir");
    fs::write(
        dir.path().join("settings.toml"),
        "[general]\ntheme_mode = \"dark\"\n\n[notifications]\nduration_ms = 1200\nmax_visible = 3\n",
    )
    .expect("failed to write config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    assert_eq!(config.notifications.duration(), Duration::from_millis(1200));
    assert_eq!(config.notifications.max_visible(), 3);
}

#[test]
fn broken_config_falls_back_with_warning() {
    let dir = tempdir().expect("failed to create temp dir");
    fs::write(dir.path().join("settings.toml"), "[general\ntheme_mode = ")
        .expect("failed to write config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, config::Config::default());
    assert!(warning
        .as_deref()
        .is_some_and(|w| w.starts_with("Settings could not be loaded")));
}
