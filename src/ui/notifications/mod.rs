// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to report the outcome of an action
//! (plan saved, validation failed, settings could not be read) without
//! blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity and phase
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Timing
//!
//! A toast fades in 10 ms after it is displayed, starts hiding once its
//! duration elapses (5 s unless configured, never when zero) and is removed
//! 300 ms later. Time only moves through [`Manager::tick`].
//!
//! ```
//! use maintech_ui::ui::notifications::{Manager, Notification, Severity};
//! use std::time::{Duration, Instant};
//!
//! let start = Instant::now();
//! let mut manager = Manager::new();
//! manager.push(Notification::new_at(Severity::Success, "toast-plan-created", start));
//!
//! assert!(manager.tick(start + Duration::from_millis(5299)).is_empty());
//! assert_eq!(manager.tick(start + Duration::from_millis(5300)).len(), 1);
//! ```

pub mod manager;
pub mod notification;
pub mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Lifetime, Notification, NotificationId, Phase, Severity};
pub use toast::Toast;
