// SPDX-License-Identifier: MPL-2.0
//! `maintech_ui` is the desktop console of the MainTech maintenance suite,
//! built with the Iced GUI framework.
//!
//! The console's state lives in plain Rust types that the Iced shell drives:
//!
//! - [`overlay`] - Open/closed state of modals, offcanvases, dropdowns,
//!   popovers and tooltips, mutual exclusion, dismissal and the scroll lock
//! - [`ui::notifications`] - Toast queue with auto-dismiss timing
//! - [`ui::disclosure`] - Accordion, tabs, collapse and sidebar submenus
//! - [`forms`] - Client-side field validation
//! - [`wizard`] - The five-step preventive maintenance plan wizard
//! - [`config`] and [`i18n`] - Persisted preferences and Fluent translations

pub mod app;
pub mod config;
pub mod error;
pub mod forms;
pub mod i18n;
pub mod overlay;
pub mod ui;
pub mod wizard;
