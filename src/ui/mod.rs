// SPDX-License-Identifier: MPL-2.0
//! User interface building blocks shared by the application screens.
//!
//! # Modules
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`disclosure`] - Accordion, tabs, collapse and sidebar submenu state
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, overlay surfaces)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod disclosure;
pub mod notifications;
pub mod styles;
pub mod theming;
