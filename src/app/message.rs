// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::asset_form;
use crate::overlay::OverlayEvent;
use crate::ui::notifications;
use crate::wizard;
use iced::Size;
use std::time::Instant;
use unic_langid::LanguageIdentifier;

/// Entries of the actions dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ExportCsv,
    PrintReport,
    ArchiveCompleted,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::ExportCsv, Action::PrintReport, Action::ArchiveCompleted];

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Action::ExportCsv => "action-export-csv",
            Action::PrintReport => "action-print-report",
            Action::ArchiveCompleted => "action-archive-completed",
        }
    }
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Input routed to the overlay coordinator.
    Overlay(OverlayEvent),
    Notification(notifications::NotificationMessage),
    Wizard(wizard::Message),
    AssetForm(asset_form::Message),
    SidebarItem(String),
    CloseSubmenu(String),
    TabSelected(String),
    AccordionToggled(String),
    CollapseToggled(String),
    ActionSelected(Action),
    LanguageSelected(LanguageIdentifier),
    ToggleTheme,
    WindowResized(Size),
    /// Periodic tick for toast timers.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `es`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `MAINTECH_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
