// SPDX-License-Identifier: MPL-2.0
//! Disclosure groups: accordions, tabs, collapse regions and the sidebar's
//! submenu panels.
//!
//! None of these lock scrolling or take part in overlay dismissal, so they
//! live outside the overlay coordinator. Each exposes the CSS-style class its
//! members carry, which the views use to pick a style.

use std::collections::HashSet;

pub const ACCORDION_ACTIVE_CLASS: &str = "app-accordion__item--active";
pub const TAB_ACTIVE_CLASS: &str = "app-nav-tabs__item--active";
pub const TAB_PANE_ACTIVE_CLASS: &str = "app-tab-pane--active";
pub const COLLAPSE_SHOW_CLASS: &str = "app-collapse--show";
pub const SUBMENU_EXPANDED_CLASS: &str = "app-submenu-panel--expanded";
pub const SIDEBAR_ITEM_ACTIVE_CLASS: &str = "app-sidebar__item--active";
pub const PANEL_EXPANDED_CLASS: &str = "panel-expanded";

fn position(items: &[String], item: &str) -> Option<usize> {
    items.iter().position(|i| i == item)
}

/// Single-open accordion.
#[derive(Debug, Clone, Default)]
pub struct Accordion {
    items: Vec<String>,
    open: Option<usize>,
}

impl Accordion {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            open: None,
        }
    }

    /// Header click. Closes every other item, then flips `item`.
    /// Returns whether `item` is open afterwards. Unknown items are ignored.
    pub fn toggle(&mut self, item: &str) -> bool {
        let Some(index) = position(&self.items, item) else {
            log::debug!("accordion: unknown item '{item}'");
            return false;
        };
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        self.open.is_some()
    }

    #[must_use]
    pub fn open_item(&self) -> Option<&str> {
        self.open.map(|i| self.items[i].as_str())
    }

    #[must_use]
    pub fn is_open(&self, item: &str) -> bool {
        self.open_item() == Some(item)
    }

    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    #[must_use]
    pub fn item_class(&self, item: &str) -> Option<&'static str> {
        self.is_open(item).then_some(ACCORDION_ACTIVE_CLASS)
    }
}

/// Tab strip with one active tab and its pane.
#[derive(Debug, Clone, Default)]
pub struct Tabs {
    tabs: Vec<String>,
    active: Option<usize>,
}

impl Tabs {
    pub fn new<I, S>(tabs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tabs: tabs.into_iter().map(Into::into).collect(),
            active: None,
        }
    }

    /// Starts with `tab` active.
    #[must_use]
    pub fn with_active(mut self, tab: &str) -> Self {
        self.activate(tab);
        self
    }

    /// Activates `tab` and deactivates its siblings. Activating the current
    /// tab keeps it active. Returns `false` for unknown tabs.
    pub fn activate(&mut self, tab: &str) -> bool {
        match position(&self.tabs, tab) {
            Some(index) => {
                self.active = Some(index);
                true
            }
            None => {
                log::debug!("tabs: unknown tab '{tab}'");
                false
            }
        }
    }

    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.map(|i| self.tabs[i].as_str())
    }

    #[must_use]
    pub fn tabs(&self) -> &[String] {
        &self.tabs
    }

    #[must_use]
    pub fn tab_class(&self, tab: &str) -> Option<&'static str> {
        (self.active() == Some(tab)).then_some(TAB_ACTIVE_CLASS)
    }

    #[must_use]
    pub fn pane_class(&self, tab: &str) -> Option<&'static str> {
        (self.active() == Some(tab)).then_some(TAB_PANE_ACTIVE_CLASS)
    }
}

/// Independent show/hide regions, keyed by target id.
#[derive(Debug, Clone, Default)]
pub struct Collapse {
    shown: HashSet<String>,
}

impl Collapse {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips `target`. Returns whether it is shown afterwards.
    pub fn toggle(&mut self, target: &str) -> bool {
        if self.shown.remove(target) {
            false
        } else {
            self.shown.insert(target.to_owned());
            true
        }
    }

    #[must_use]
    pub fn is_shown(&self, target: &str) -> bool {
        self.shown.contains(target)
    }

    #[must_use]
    pub fn class(&self, target: &str) -> Option<&'static str> {
        self.is_shown(target).then_some(COLLAPSE_SHOW_CLASS)
    }
}

/// Sidebar items and the submenu panels some of them open.
///
/// At most one panel is expanded. While one is, the app container carries
/// [`PANEL_EXPANDED_CLASS`].
#[derive(Debug, Clone, Default)]
pub struct SubmenuPanels {
    /// Sidebar item and the panel it targets, if any.
    items: Vec<(String, Option<String>)>,
    expanded: Option<String>,
    active_item: Option<String>,
}

impl SubmenuPanels {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a sidebar item. `panel` is `None` for plain links.
    #[must_use]
    pub fn with_item(mut self, item: impl Into<String>, panel: Option<&str>) -> Self {
        self.items.push((item.into(), panel.map(str::to_owned)));
        self
    }

    /// Starts with the panel of `item` expanded.
    #[must_use]
    pub fn with_expanded(mut self, item: &str) -> Self {
        self.click_item(item);
        self
    }

    fn panel_of(&self, item: &str) -> Option<Option<&str>> {
        self.items
            .iter()
            .find(|(i, _)| i == item)
            .map(|(_, panel)| panel.as_deref())
    }

    /// Sidebar item click.
    ///
    /// An item with a panel collapses everything and expands its panel,
    /// unless that panel was the expanded one. An item without a panel
    /// collapses everything and becomes the active item.
    pub fn click_item(&mut self, item: &str) {
        let Some(panel) = self.panel_of(item) else {
            log::debug!("sidebar: unknown item '{item}'");
            return;
        };
        let panel = panel.map(str::to_owned);
        let was_expanded = panel.is_some() && self.expanded == panel;

        self.expanded = None;
        self.active_item = None;

        match panel {
            Some(panel) if !was_expanded => {
                self.expanded = Some(panel);
                self.active_item = Some(item.to_owned());
            }
            Some(_) => {}
            None => self.active_item = Some(item.to_owned()),
        }
    }

    /// Panel close button.
    pub fn close(&mut self, panel: &str) {
        if self.expanded.as_deref() == Some(panel) {
            self.expanded = None;
        }
        let owner = self
            .items
            .iter()
            .find(|(_, p)| p.as_deref() == Some(panel))
            .map(|(i, _)| i.as_str());
        if owner.is_some() && self.active_item.as_deref() == owner {
            self.active_item = None;
        }
    }

    #[must_use]
    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    #[must_use]
    pub fn is_expanded(&self, panel: &str) -> bool {
        self.expanded() == Some(panel)
    }

    #[must_use]
    pub fn active_item(&self) -> Option<&str> {
        self.active_item.as_deref()
    }

    pub fn items(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.items.iter().map(|(i, p)| (i.as_str(), p.as_deref()))
    }

    #[must_use]
    pub fn panel_class(&self, panel: &str) -> Option<&'static str> {
        self.is_expanded(panel).then_some(SUBMENU_EXPANDED_CLASS)
    }

    #[must_use]
    pub fn item_class(&self, item: &str) -> Option<&'static str> {
        (self.active_item() == Some(item)).then_some(SIDEBAR_ITEM_ACTIVE_CLASS)
    }

    #[must_use]
    pub fn container_class(&self) -> Option<&'static str> {
        self.expanded.is_some().then_some(PANEL_EXPANDED_CLASS)
    }
}
