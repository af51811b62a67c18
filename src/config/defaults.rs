// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration and timing constants.
//!
//! # Categories
//!
//! - **Notifications**: toast lifetime and stacking
//! - **Overlays**: placement gap for tooltips and popovers

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default time a toast stays on screen before it starts hiding (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5000;

/// Upper bound accepted for a configured toast duration (in milliseconds).
pub const MAX_TOAST_DURATION_MS: u64 = 60_000;

/// Delay between creating a toast and showing it (fade-in start, in milliseconds).
pub const TOAST_SHOW_DELAY_MS: u64 = 10;

/// Delay between hiding a toast and removing it (fade-out, in milliseconds).
pub const TOAST_REMOVE_DELAY_MS: u64 = 300;

/// Default number of toasts visible at once.
pub const DEFAULT_MAX_VISIBLE_TOASTS: usize = 3;

/// Minimum number of toasts visible at once.
pub const MIN_VISIBLE_TOASTS: usize = 1;

/// Maximum number of toasts visible at once.
pub const MAX_VISIBLE_TOASTS: usize = 8;

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Gap between an anchor and the tooltip or popover placed next to it (in pixels).
pub const PLACEMENT_GAP: f32 = 10.0;

/// Interval of the tick subscription driving toast timers (in milliseconds).
pub const TICK_INTERVAL_MS: u64 = 100;
