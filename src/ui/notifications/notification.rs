// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, its `Severity`, and the
//! `Phase` a toast moves through between creation and removal.

use crate::config::{TOAST_REMOVE_DELAY_MS, TOAST_SHOW_DELAY_MS};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
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

/// Severity level determines the accent color and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    #[default]
    Info,
    Warning,
    Danger,
}

impl Severity {
    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Danger => palette::DANGER_500,
        }
    }

    /// Glyph drawn in the toast's icon slot.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Success => "✔",
            Severity::Info => "ℹ",
            Severity::Warning => "⚠",
            Severity::Danger => "✖",
        }
    }

    /// Title key used when a notification doesn't set its own.
    #[must_use]
    pub fn default_title_key(&self) -> &'static str {
        match self {
            Severity::Success => "toast-title-success",
            Severity::Info => "toast-title-info",
            Severity::Warning => "toast-title-warning",
            Severity::Danger => "toast-title-danger",
        }
    }
}

/// How long a notification stays up before hiding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifetime {
    /// Use the manager's configured duration.
    #[default]
    Default,
    /// Hide after this duration.
    After(Duration),
    /// Stay until dismissed manually.
    Sticky,
}

/// Where a toast is in its show/hide cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Displayed but not yet faded in.
    Entering,
    /// Fully shown.
    Shown,
    /// Fading out since the given instant; removed [`TOAST_REMOVE_DELAY_MS`] later.
    Hiding { since: Instant },
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// The i18n key for the toast title.
    title_key: Option<String>,
    /// The i18n key for the notification message.
    message_key: String,
    /// Optional arguments for message interpolation.
    message_args: Vec<(String, String)>,
    created_at: Instant,
    /// When the toast became visible; its timer runs from here.
    displayed_at: Option<Instant>,
    lifetime: Lifetime,
    phase: Phase,
}

impl Notification {
    /// Creates a new notification with the given severity and message key.
    ///
    /// The `message_key` should be a valid i18n key that will be resolved
    /// at render time.
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self::new_at(severity, message_key, Instant::now())
    }

    /// Creates a notification stamped with an explicit creation instant.
    pub fn new_at(severity: Severity, message_key: impl Into<String>, now: Instant) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            title_key: None,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: now,
            displayed_at: None,
            lifetime: Lifetime::Default,
            phase: Phase::Entering,
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn danger(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Danger, message_key)
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_title(mut self, title_key: impl Into<String>) -> Self {
        self.title_key = Some(title_key.into());
        self
    }

    /// Hides the toast after `duration`. A zero duration makes it sticky.
    #[must_use]
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.lifetime = if duration.is_zero() {
            Lifetime::Sticky
        } else {
            Lifetime::After(duration)
        };
        self
    }

    /// Keeps the toast until it is dismissed manually.
    #[must_use]
    pub fn sticky(mut self) -> Self {
        self.lifetime = Lifetime::Sticky;
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn title_key(&self) -> &str {
        self.title_key
            .as_deref()
            .unwrap_or_else(|| self.severity.default_title_key())
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_hiding(&self) -> bool {
        matches!(self.phase, Phase::Hiding { .. })
    }

    /// Marks the toast as displayed. Its timer starts now.
    pub(super) fn display(&mut self, now: Instant) {
        self.displayed_at = Some(now);
        self.phase = Phase::Entering;
    }

    /// Starts the fade-out. Returns `false` if it was already hiding, which
    /// keeps a second trigger from scheduling another removal.
    pub(super) fn hide(&mut self, since: Instant) -> bool {
        if self.is_hiding() {
            return false;
        }
        self.phase = Phase::Hiding { since };
        true
    }

    /// Advances the phase for `now`. Returns `true` once the toast should be
    /// removed.
    pub(super) fn advance(&mut self, now: Instant, default_duration: Duration) -> bool {
        let Some(displayed_at) = self.displayed_at else {
            return false;
        };

        if self.phase == Phase::Entering
            && now >= displayed_at + Duration::from_millis(TOAST_SHOW_DELAY_MS)
        {
            self.phase = Phase::Shown;
        }

        let duration = match self.lifetime {
            Lifetime::Default => Some(default_duration).filter(|d| !d.is_zero()),
            Lifetime::After(duration) => Some(duration),
            Lifetime::Sticky => None,
        };
        if let Some(duration) = duration {
            let deadline = displayed_at + duration;
            if !self.is_hiding() && now >= deadline {
                self.hide(deadline);
            }
        }

        match self.phase {
            Phase::Hiding { since } => {
                now >= since + Duration::from_millis(TOAST_REMOVE_DELAY_MS)
            }
            Phase::Entering | Phase::Shown => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: Duration = Duration::from_millis(5000);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            Severity::Success.color(),
            Severity::Info.color(),
            Severity::Warning.color(),
            Severity::Danger.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn builder_pattern_works() {
        let notification = Notification::danger("asset-save-failed")
            .with_title("toast-title-danger")
            .with_arg("code", "BOMBA-01");

        assert_eq!(notification.severity(), Severity::Danger);
        assert_eq!(notification.message_key(), "asset-save-failed");
        assert_eq!(notification.message_args().len(), 1);
    }

    #[test]
    fn title_falls_back_to_severity_default() {
        assert_eq!(Notification::warning("x").title_key(), "toast-title-warning");
    }

    #[test]
    fn zero_duration_is_sticky() {
        let n = Notification::info("x").auto_dismiss(Duration::ZERO);
        assert_eq!(n.lifetime(), Lifetime::Sticky);
    }

    #[test]
    fn undisplayed_notification_never_expires() {
        let start = Instant::now();
        let mut n = Notification::new_at(Severity::Info, "x", start);
        assert!(!n.advance(start + ms(60_000), DEFAULT));
        assert_eq!(n.phase(), Phase::Entering);
    }

    #[test]
    fn phases_follow_show_hide_remove_timing() {
        let start = Instant::now();
        let mut n = Notification::new_at(Severity::Info, "x", start);
        n.display(start);

        assert!(!n.advance(start + ms(5), DEFAULT));
        assert_eq!(n.phase(), Phase::Entering);

        assert!(!n.advance(start + ms(10), DEFAULT));
        assert_eq!(n.phase(), Phase::Shown);

        assert!(!n.advance(start + ms(5000), DEFAULT));
        assert_eq!(
            n.phase(),
            Phase::Hiding {
                since: start + ms(5000)
            }
        );

        assert!(!n.advance(start + ms(5299), DEFAULT));
        assert!(n.advance(start + ms(5300), DEFAULT));
    }

    #[test]
    fn late_tick_hides_from_deadline_not_from_tick() {
        let start = Instant::now();
        let mut n = Notification::new_at(Severity::Info, "x", start);
        n.display(start);

        // A single coarse tick long after the deadline removes it at once.
        assert!(n.advance(start + ms(9000), DEFAULT));
    }

    #[test]
    fn hide_twice_reports_false() {
        let start = Instant::now();
        let mut n = Notification::new_at(Severity::Info, "x", start);
        n.display(start);
        assert!(n.hide(start + ms(100)));
        assert!(!n.hide(start + ms(200)));
        assert_eq!(
            n.phase(),
            Phase::Hiding {
                since: start + ms(100)
            }
        );
    }

    #[test]
    fn sticky_only_leaves_through_hide() {
        let start = Instant::now();
        let mut n = Notification::new_at(Severity::Danger, "x", start).sticky();
        n.display(start);
        assert!(!n.advance(start + ms(600_000), DEFAULT));
        n.hide(start + ms(600_000));
        assert!(n.advance(start + ms(600_300), DEFAULT));
    }
}
