// SPDX-License-Identifier: MPL-2.0
use maintech_ui::config::{DEFAULT_TOAST_DURATION_MS, TOAST_REMOVE_DELAY_MS, TOAST_SHOW_DELAY_MS};
use maintech_ui::ui::notifications::{Manager, Notification, Phase, Severity};
use std::time::{Duration, Instant};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn default_toast_is_removed_after_duration_plus_fade() {
    let start = Instant::now();
    let mut manager = Manager::with_settings(ms(DEFAULT_TOAST_DURATION_MS), 3);
    let toast = Notification::new_at(Severity::Info, "toast-plan-created", start);
    let id = toast.id();
    manager.push_at(toast, start);

    manager.tick(start + ms(TOAST_SHOW_DELAY_MS));
    assert_eq!(manager.get(id).map(Notification::phase), Some(Phase::Shown));

    assert!(manager.tick(start + ms(DEFAULT_TOAST_DURATION_MS - 1)).is_empty());
    assert!(manager.tick(start + ms(DEFAULT_TOAST_DURATION_MS)).is_empty());
    assert!(manager.get(id).is_some_and(Notification::is_hiding));

    let removed = manager.tick(start + ms(DEFAULT_TOAST_DURATION_MS + TOAST_REMOVE_DELAY_MS));
    assert_eq!(removed, vec![id]);
    assert!(!manager.has_notifications());
}

#[test]
fn late_tick_removes_in_one_step() {
    let start = Instant::now();
    let mut manager = Manager::new();
    let toast = Notification::new_at(Severity::Info, "x", start);
    let id = toast.id();
    manager.push_at(toast, start);

    let removed = manager.tick(start + ms(60_000));
    assert_eq!(removed, vec![id]);
}

#[test]
fn manual_dismiss_schedules_a_single_removal() {
    let start = Instant::now();
    let mut manager = Manager::new();
    let toast = Notification::success("toast-asset-saved");
    let id = toast.id();
    manager.push_at(toast, start);

    assert!(manager.dismiss_at(id, start + ms(1000)));
    assert!(!manager.dismiss_at(id, start + ms(1200)));

    assert!(manager.tick(start + ms(1299)).is_empty());
    assert_eq!(manager.tick(start + ms(1300)), vec![id]);
    assert!(!manager.dismiss_at(id, start + ms(1400)));
}

#[test]
fn zero_duration_keeps_toast_until_dismissed() {
    let start = Instant::now();
    let mut manager = Manager::new();
    let toast = Notification::warning("notification-config-save-error").auto_dismiss(Duration::ZERO);
    let id = toast.id();
    manager.push_at(toast, start);

    assert!(manager.tick(start + ms(3_600_000)).is_empty());
    assert!(manager.get(id).is_some());

    manager.dismiss_at(id, start + ms(3_600_000));
    assert_eq!(manager.tick(start + ms(3_600_300)), vec![id]);
}

#[test]
fn queued_toast_gets_a_fresh_timer_when_promoted() {
    let start = Instant::now();
    let mut manager = Manager::with_settings(ms(1000), 1);
    let first = Notification::info("first");
    let second = Notification::info("second");
    let (first_id, second_id) = (first.id(), second.id());
    manager.push_at(first, start);
    manager.push_at(second, start);
    assert_eq!(manager.queued_count(), 1);

    assert_eq!(manager.tick(start + ms(1300)), vec![first_id]);
    assert_eq!(manager.visible_count(), 1);

    // Promoted at 1300ms: hides at 2300ms, gone at 2600ms.
    assert!(manager.tick(start + ms(2599)).is_empty());
    assert_eq!(manager.tick(start + ms(2600)), vec![second_id]);
}
