// SPDX-License-Identifier: MPL-2.0
//! The single authority over overlay visibility.
//!
//! Every open/close goes through [`Coordinator`], which keeps three
//! invariants in one place:
//!
//! - the scroll lock is engaged iff at least one modal or offcanvas is open;
//! - at most one dropdown and at most one popover are open;
//! - operations on unknown keys change nothing.

use super::dismissal::{DismissRegistry, DismissTrigger};
use super::kind::{BackdropId, OverlayKey, OverlayKind, ToggleId, SCROLL_LOCKED_CLASS};
use super::region::Region;
use super::scroll_lock::ScrollLock;
use std::collections::HashMap;

/// Visibility of a registered overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

/// Direction of a visibility change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Opened,
    Closed,
}

/// One visibility change caused by a coordinator operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub key: OverlayKey,
    pub kind: OverlayKind,
    pub change: Change,
}

/// Where a pointer click landed, relative to the dismissible overlays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// Inside the region registered under this key.
    Inside(OverlayKey),
    /// Anywhere else on the page.
    Outside,
}

/// Input events the coordinator reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayEvent {
    Escape,
    BackdropClicked(BackdropId),
    ToggleClicked(ToggleId),
    Click(ClickTarget),
    HoverStart(OverlayKey),
    HoverEnd(OverlayKey),
}

#[derive(Debug, Clone)]
struct Entry {
    region: Region,
    state: OverlayState,
}

/// Owns the open/closed state of every registered overlay.
#[derive(Debug, Default, Clone)]
pub struct Coordinator {
    /// Registered regions in registration order.
    entries: Vec<Entry>,
    index: HashMap<OverlayKey, usize>,
    dismissals: DismissRegistry,
    scroll_lock: ScrollLock,
}

impl Coordinator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a region and its default dismissal triggers.
    ///
    /// Modals close on escape, regions with a backdrop close on a click on
    /// that backdrop, and dropdowns and popovers close on outside clicks.
    /// A key is bound once: registering it again is ignored and returns `false`.
    pub fn register(&mut self, region: Region) -> bool {
        if self.index.contains_key(region.key()) {
            log::debug!("overlay {} already registered, ignoring", region.key());
            return false;
        }

        let key = region.key().clone();
        let kind = region.kind();
        if kind.dismisses_on_escape() {
            self.dismissals
                .register(DismissTrigger::Escape, [key.clone()]);
        }
        if let Some(backdrop) = region.backdrop() {
            self.dismissals
                .register(DismissTrigger::Backdrop(backdrop.clone()), [key.clone()]);
        }
        if kind.dismisses_on_outside_click() {
            self.dismissals
                .register(DismissTrigger::OutsideClick, [key.clone()]);
        }

        self.index.insert(key, self.entries.len());
        self.entries.push(Entry {
            region,
            state: OverlayState::Closed,
        });
        true
    }

    /// Associates a dismissal trigger with additional overlay keys.
    pub fn register_dismissal<I, K>(&mut self, trigger: DismissTrigger, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: Into<OverlayKey>,
    {
        self.dismissals
            .register(trigger, keys.into_iter().map(Into::into));
    }

    /// Opens the overlay registered under `key`.
    ///
    /// Opening a dropdown or popover first closes the other open overlay of
    /// that kind. Opening a modal or offcanvas engages the scroll lock.
    /// Unknown keys, kind mismatches and already-open overlays are no-ops.
    pub fn open(&mut self, kind: OverlayKind, key: &str) -> Vec<Transition> {
        let Some(idx) = self.lookup(kind, key) else {
            return Vec::new();
        };
        if self.entries[idx].state == OverlayState::Open {
            return Vec::new();
        }

        let mut transitions = Vec::new();
        if kind.is_exclusive() {
            let others: Vec<usize> = self
                .entries
                .iter()
                .enumerate()
                .filter(|(i, e)| {
                    *i != idx && e.region.kind() == kind && e.state == OverlayState::Open
                })
                .map(|(i, _)| i)
                .collect();
            for other in others {
                transitions.extend(self.set_closed(other));
            }
        }

        transitions.extend(self.set_open(idx));
        transitions
    }

    /// Closes the overlay registered under `key`.
    ///
    /// The scroll lock is released only when no other modal or offcanvas
    /// remains open. Unknown keys and closed overlays are no-ops.
    pub fn close(&mut self, kind: OverlayKind, key: &str) -> Vec<Transition> {
        match self.lookup(kind, key) {
            Some(idx) => self.set_closed(idx).into_iter().collect(),
            None => Vec::new(),
        }
    }

    /// Opens a closed overlay or closes an open one.
    pub fn toggle(&mut self, kind: OverlayKind, key: &str) -> Vec<Transition> {
        if self.is_open(key) {
            self.close(kind, key)
        } else {
            self.open(kind, key)
        }
    }

    /// Closes every open overlay, or every open overlay of `kind`.
    pub fn close_all(&mut self, kind: Option<OverlayKind>) -> Vec<Transition> {
        let targets: Vec<usize> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.state == OverlayState::Open)
            .filter(|(_, e)| kind.is_none_or(|k| e.region.kind() == k))
            .map(|(i, _)| i)
            .collect();

        targets
            .into_iter()
            .filter_map(|idx| self.set_closed(idx))
            .collect()
    }

    /// Routes an input event through the dismissal registry and toggles.
    ///
    /// Escape closes every open overlay registered for it at once; there is
    /// no stack of modals.
    pub fn dispatch(&mut self, event: &OverlayEvent) -> Vec<Transition> {
        match event {
            OverlayEvent::Escape => self.fire(&DismissTrigger::Escape, None),
            OverlayEvent::BackdropClicked(backdrop) => {
                self.fire(&DismissTrigger::Backdrop(backdrop.clone()), None)
            }
            OverlayEvent::Click(ClickTarget::Outside) => {
                self.fire(&DismissTrigger::OutsideClick, None)
            }
            OverlayEvent::Click(ClickTarget::Inside(key)) => {
                self.fire(&DismissTrigger::OutsideClick, Some(key))
            }
            OverlayEvent::ToggleClicked(toggle) => {
                let owned: Vec<(OverlayKind, OverlayKey)> = self
                    .toggled_by(toggle)
                    .map(|region| (region.kind(), region.key().clone()))
                    .collect();
                if owned.is_empty() {
                    log::debug!("toggle {toggle} controls no overlay");
                }
                owned
                    .into_iter()
                    .flat_map(|(kind, key)| self.toggle(kind, key.as_str()))
                    .collect()
            }
            OverlayEvent::HoverStart(key) => self.open(OverlayKind::Tooltip, key.as_str()),
            OverlayEvent::HoverEnd(key) => self.close(OverlayKind::Tooltip, key.as_str()),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn state(&self, key: &str) -> Option<OverlayState> {
        self.index.get(key).map(|&idx| self.entries[idx].state)
    }

    #[must_use]
    pub fn is_open(&self, key: &str) -> bool {
        self.state(key) == Some(OverlayState::Open)
    }

    #[must_use]
    pub fn region(&self, key: &str) -> Option<&Region> {
        self.index.get(key).map(|&idx| &self.entries[idx].region)
    }

    /// Regions controlled by `toggle`, in registration order.
    pub fn toggled_by<'a>(&'a self, toggle: &'a ToggleId) -> impl Iterator<Item = &'a Region> {
        self.entries
            .iter()
            .map(|e| &e.region)
            .filter(move |region| region.toggle() == Some(toggle))
    }

    /// Keys of the open overlays of `kind`, in registration order.
    pub fn open_keys(&self, kind: OverlayKind) -> impl Iterator<Item = &OverlayKey> {
        self.entries
            .iter()
            .filter(move |e| e.region.kind() == kind && e.state == OverlayState::Open)
            .map(|e| e.region.key())
    }

    #[must_use]
    pub fn has_open(&self, kind: OverlayKind) -> bool {
        self.open_keys(kind).next().is_some()
    }

    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_lock.is_engaged()
    }

    #[must_use]
    pub fn scroll_lock(&self) -> ScrollLock {
        self.scroll_lock
    }

    #[must_use]
    pub fn dismissals(&self) -> &DismissRegistry {
        &self.dismissals
    }

    /// Whether a backdrop is shown: any open region bound to it.
    #[must_use]
    pub fn is_backdrop_visible(&self, backdrop: &str) -> bool {
        self.open_region_with_backdrop(backdrop).is_some()
    }

    /// State classes of a region. Empty for closed or unknown regions.
    #[must_use]
    pub fn region_classes(&self, key: &str) -> Vec<&'static str> {
        self.index
            .get(key)
            .map(|&idx| &self.entries[idx])
            .filter(|e| e.state == OverlayState::Open)
            .map(|e| vec![e.region.kind().open_class()])
            .unwrap_or_default()
    }

    /// State classes of a backdrop. Empty while no bound region is open.
    #[must_use]
    pub fn backdrop_classes(&self, backdrop: &str) -> Vec<&'static str> {
        self.open_region_with_backdrop(backdrop)
            .and_then(|region| region.kind().backdrop_class())
            .into_iter()
            .collect()
    }

    /// State classes of the page body.
    #[must_use]
    pub fn body_classes(&self) -> Vec<&'static str> {
        if self.is_scroll_locked() {
            vec![SCROLL_LOCKED_CLASS]
        } else {
            Vec::new()
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn lookup(&self, kind: OverlayKind, key: &str) -> Option<usize> {
        let Some(&idx) = self.index.get(key) else {
            log::debug!("ignoring {kind} {key}: not registered");
            return None;
        };
        let registered = self.entries[idx].region.kind();
        if registered != kind {
            log::debug!("ignoring {kind} {key}: registered as {registered}");
            return None;
        }
        Some(idx)
    }

    fn open_region_with_backdrop(&self, backdrop: &str) -> Option<&Region> {
        self.entries
            .iter()
            .filter(|e| e.state == OverlayState::Open)
            .map(|e| &e.region)
            .find(|region| region.backdrop().is_some_and(|b| b.as_str() == backdrop))
    }

    /// Closes the open keys registered for `trigger`, sparing `keep`.
    fn fire(&mut self, trigger: &DismissTrigger, keep: Option<&OverlayKey>) -> Vec<Transition> {
        let targets: Vec<usize> = self
            .dismissals
            .keys_for(trigger)
            .iter()
            .filter(|key| Some(*key) != keep)
            .filter_map(|key| self.index.get(key).copied())
            .collect();

        targets
            .into_iter()
            .filter_map(|idx| self.set_closed(idx))
            .collect()
    }

    fn set_open(&mut self, idx: usize) -> Option<Transition> {
        let entry = &mut self.entries[idx];
        if entry.state == OverlayState::Open {
            return None;
        }
        entry.state = OverlayState::Open;
        if entry.region.kind().locks_scroll() {
            self.scroll_lock.engage();
        }
        Some(self.transition(idx, Change::Opened))
    }

    fn set_closed(&mut self, idx: usize) -> Option<Transition> {
        let entry = &mut self.entries[idx];
        if entry.state == OverlayState::Closed {
            return None;
        }
        entry.state = OverlayState::Closed;
        if entry.region.kind().locks_scroll() {
            self.scroll_lock.release();
        }
        Some(self.transition(idx, Change::Closed))
    }

    fn transition(&self, idx: usize, change: Change) -> Transition {
        let region = &self.entries[idx].region;
        log::trace!(
            "{} {} {:?} (scroll lock holders: {})",
            region.kind(),
            region.key(),
            change,
            self.scroll_lock.holders()
        );
        Transition {
            key: region.key().clone(),
            kind: region.kind(),
            change,
        }
    }
}
