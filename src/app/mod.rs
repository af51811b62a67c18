// SPDX-License-Identifier: MPL-2.0
//! Application root state for the maintenance console.
//!
//! The `App` owns one overlay coordinator, one notification manager and the
//! screen state (sidebar, tabs, wizard, asset form), and translates messages
//! into coordinator calls and config persistence.

pub mod asset_form;
mod message;
mod subscription;
mod update;
mod view;

pub use message::{Action, Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::overlay::{Coordinator, Region};
use crate::ui::disclosure::{Accordion, Collapse, SubmenuPanels, Tabs};
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use crate::wizard::{Asset, Wizard};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;

/// Overlay keys, backdrops and toggles registered by the console.
pub mod keys {
    pub const ASSET_MODAL: &str = "asset-modal";
    pub const WIZARD_MODAL: &str = "wizard-modal";
    pub const MODAL_BACKDROP: &str = "modal-backdrop";
    pub const FILTERS: &str = "filters-offcanvas";
    pub const FILTERS_BACKDROP: &str = "filters-offcanvas-backdrop";
    pub const ACTIONS_DROPDOWN: &str = "actions-dropdown";
    pub const USER_DROPDOWN: &str = "user-dropdown";
    pub const HELP_POPOVER: &str = "help-popover";
    pub const THEME_TOOLTIP: &str = "theme-tooltip";

    pub const BTN_NEW_ASSET: &str = "btn-new-asset";
    pub const BTN_NEW_PLAN: &str = "btn-new-plan";
    pub const BTN_FILTERS: &str = "btn-filters";
    pub const BTN_ACTIONS: &str = "btn-actions";
    pub const BTN_USER: &str = "btn-user";
    pub const BTN_HELP: &str = "btn-help";

    pub const TAB_OVERVIEW: &str = "overview";
    pub const TAB_HISTORY: &str = "history";
}

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    config: Config,
    theme_mode: ThemeMode,
    overlays: Coordinator,
    notifications: notifications::Manager,
    wizard: Wizard,
    asset_form: asset_form::State,
    sidebar: SubmenuPanels,
    tabs: Tabs,
    history: Accordion,
    notes: Collapse,
    window_size: Size,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("scroll_locked", &self.overlays.is_scroll_locked())
            .field("toasts", &self.notifications.visible_count())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const MIN_WINDOW_WIDTH: f32 = 760.0;
pub const MIN_WINDOW_HEIGHT: f32 = 520.0;

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Registers every overlay region of the console.
pub fn register_overlays(overlays: &mut Coordinator) {
    // Both modals sit behind one backdrop. The backdrop covers every toggle,
    // so at most one modal is open when it is clicked.
    let regions = [
        Region::modal(keys::ASSET_MODAL)
            .with_backdrop(keys::MODAL_BACKDROP)
            .with_toggle(keys::BTN_NEW_ASSET),
        Region::modal(keys::WIZARD_MODAL)
            .with_backdrop(keys::MODAL_BACKDROP)
            .with_toggle(keys::BTN_NEW_PLAN),
        Region::offcanvas(keys::FILTERS)
            .with_backdrop(keys::FILTERS_BACKDROP)
            .with_toggle(keys::BTN_FILTERS),
        Region::dropdown(keys::ACTIONS_DROPDOWN).with_toggle(keys::BTN_ACTIONS),
        Region::dropdown(keys::USER_DROPDOWN).with_toggle(keys::BTN_USER),
        Region::popover(keys::HELP_POPOVER).with_toggle(keys::BTN_HELP),
        Region::tooltip(keys::THEME_TOOLTIP),
    ];
    for region in regions {
        overlays.register(region);
    }
}

/// Assets offered by the plan wizard's search.
#[must_use]
pub fn sample_assets() -> Vec<Asset> {
    vec![
        Asset::new(1, "BOM-01", "Bomba de agua principal", "Planta Norte"),
        Asset::new(2, "BOM-02", "Bomba de recirculación", "Planta Norte"),
        Asset::new(3, "COM-07", "Compresor de aire", "Planta Sur"),
        Asset::new(4, "GEN-02", "Generador diésel", "Taller central"),
        Asset::new(5, "CIN-11", "Cinta transportadora", "Almacén"),
    ]
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config and translations and registers the overlays.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        Self::with_config(flags, config, config_warning)
    }

    fn with_config(flags: Flags, config: Config, config_warning: Option<String>) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang, &config);

        let mut overlays = Coordinator::new();
        register_overlays(&mut overlays);

        let mut toasts = notifications::Manager::with_settings(
            config.notifications.duration(),
            config.notifications.max_visible(),
        );
        if let Some(key) = config_warning {
            toasts.push(notifications::Notification::warning(key));
        }

        let app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            config,
            overlays,
            notifications: toasts,
            wizard: Wizard::new(sample_assets()),
            asset_form: asset_form::State::new(),
            sidebar: SubmenuPanels::new()
                .with_item("dashboard", None)
                .with_item("maintenance", Some("maintenance-panel"))
                .with_item("reports", Some("reports-panel"))
                .with_expanded("reports"),
            tabs: Tabs::new([keys::TAB_OVERVIEW, keys::TAB_HISTORY]).with_active(keys::TAB_OVERVIEW),
            history: Accordion::new(["wo-1042", "wo-1038", "wo-1031"]),
            notes: Collapse::new(),
            window_size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        };

        log::info!(
            "console ready (locale {}, theme {:?})",
            app.i18n.current_locale(),
            app.theme_mode
        );
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }
}
