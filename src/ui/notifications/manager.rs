// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of notifications.
//! It limits the number of visible toasts and drives their auto-dismiss timers
//! from the instants passed to [`Manager::tick`].

use super::notification::{Notification, NotificationId, Severity};
use crate::config::{DEFAULT_MAX_VISIBLE_TOASTS, DEFAULT_TOAST_DURATION_MS};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Tick for checking auto-dismiss timers.
    Tick(Instant),
}

/// Manages the notification queue and visible notifications.
#[derive(Debug)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Queued notifications waiting to be displayed.
    queue: VecDeque<Notification>,
    /// Lifetime applied to notifications that don't set their own.
    default_duration: Duration,
    max_visible: usize,
}

impl Default for Manager {
    fn default() -> Self {
        Self::with_settings(
            Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
            DEFAULT_MAX_VISIBLE_TOASTS,
        )
    }
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager with an explicit default duration and visible limit.
    /// A zero `default_duration` makes untimed notifications sticky.
    #[must_use]
    pub fn with_settings(default_duration: Duration, max_visible: usize) -> Self {
        Self {
            visible: VecDeque::new(),
            queue: VecDeque::new(),
            default_duration,
            max_visible: max_visible.max(1),
        }
    }

    /// Pushes a new notification to be displayed.
    ///
    /// If fewer than `max_visible` notifications are showing, it's displayed
    /// immediately. Otherwise, it's added to the queue and shown when space
    /// becomes available.
    pub fn push(&mut self, notification: Notification) {
        let now = notification.created_at();
        self.push_at(notification, now);
    }

    /// Pushes a notification, treating `now` as the display instant.
    pub fn push_at(&mut self, mut notification: Notification, now: Instant) {
        match notification.severity() {
            Severity::Warning | Severity::Danger => {
                log::warn!("toast ({:?}): {}", notification.severity(), notification.message_key());
            }
            Severity::Success | Severity::Info => {
                log::debug!("toast ({:?}): {}", notification.severity(), notification.message_key());
            }
        }

        if self.visible.len() < self.max_visible {
            notification.display(now);
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and its removal started.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.dismiss_at(id, Instant::now())
    }

    /// Dismisses a notification as of `now`.
    ///
    /// A visible toast starts hiding and is removed by a later tick; its
    /// auto-dismiss timer no longer applies. Returns `false` when the toast
    /// is unknown or already hiding, so a second dismissal schedules nothing.
    /// Queued notifications are dropped straight away.
    pub fn dismiss_at(&mut self, id: NotificationId, now: Instant) -> bool {
        if let Some(notification) = self.visible.iter_mut().find(|n| n.id() == id) {
            return notification.hide(now);
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Advances every visible notification to `now`, removing the ones whose
    /// hide stage has finished. Returns the removed IDs.
    pub fn tick(&mut self, now: Instant) -> Vec<NotificationId> {
        let default_duration = self.default_duration;
        let mut removed = Vec::new();

        self.visible.retain_mut(|n| {
            let done = n.advance(now, default_duration);
            if done {
                removed.push(n.id());
            }
            !done
        });

        if !removed.is_empty() {
            log::trace!("removed {} toast(s)", removed.len());
            self.promote_from_queue(now);
        }
        removed
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick(now) => {
                self.tick(*now);
            }
        }
    }

    /// Returns the currently visible notifications.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    /// Looks up a visible or queued notification.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.visible
            .iter()
            .chain(self.queue.iter())
            .find(|n| n.id() == id)
    }

    /// Returns the number of visible notifications.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Returns the number of queued notifications.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any notifications (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    #[must_use]
    pub fn default_duration(&self) -> Duration {
        self.default_duration
    }

    #[must_use]
    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    /// Clears all notifications (visible and queued).
    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    /// Promotes queued notifications while there's space. Their timers start
    /// at `now`.
    fn promote_from_queue(&mut self, now: Instant) {
        while self.visible.len() < self.max_visible {
            let Some(mut notification) = self.queue.pop_front() else {
                break;
            };
            notification.display(now);
            self.visible.push_back(notification);
        }
    }
}
