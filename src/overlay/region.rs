// SPDX-License-Identifier: MPL-2.0
//! Region registration records.

use super::kind::{BackdropId, OverlayKey, OverlayKind, ToggleId};

/// A registered overlay region: its key, kind and the optional backdrop and
/// toggle control bound to it.
///
/// ```
/// use maintech_ui::overlay::Region;
///
/// let region = Region::modal("asset-modal")
///     .with_backdrop("modal-backdrop")
///     .with_toggle("btn-new-asset");
/// assert_eq!(region.key().as_str(), "asset-modal");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    key: OverlayKey,
    kind: OverlayKind,
    backdrop: Option<BackdropId>,
    toggle: Option<ToggleId>,
}

impl Region {
    pub fn new(kind: OverlayKind, key: impl Into<OverlayKey>) -> Self {
        Self {
            key: key.into(),
            kind,
            backdrop: None,
            toggle: None,
        }
    }

    pub fn modal(key: impl Into<OverlayKey>) -> Self {
        Self::new(OverlayKind::Modal, key)
    }

    pub fn offcanvas(key: impl Into<OverlayKey>) -> Self {
        Self::new(OverlayKind::Offcanvas, key)
    }

    pub fn dropdown(key: impl Into<OverlayKey>) -> Self {
        Self::new(OverlayKind::Dropdown, key)
    }

    pub fn popover(key: impl Into<OverlayKey>) -> Self {
        Self::new(OverlayKind::Popover, key)
    }

    pub fn tooltip(key: impl Into<OverlayKey>) -> Self {
        Self::new(OverlayKind::Tooltip, key)
    }

    /// Binds a backdrop. Ignored for kinds without backdrops.
    #[must_use]
    pub fn with_backdrop(mut self, backdrop: impl Into<BackdropId>) -> Self {
        if self.kind.backdrop_class().is_some() {
            self.backdrop = Some(backdrop.into());
        } else {
            log::debug!("{} {} cannot have a backdrop", self.kind, self.key);
        }
        self
    }

    #[must_use]
    pub fn with_toggle(mut self, toggle: impl Into<ToggleId>) -> Self {
        self.toggle = Some(toggle.into());
        self
    }

    #[must_use]
    pub fn key(&self) -> &OverlayKey {
        &self.key
    }

    #[must_use]
    pub fn kind(&self) -> OverlayKind {
        self.kind
    }

    #[must_use]
    pub fn backdrop(&self) -> Option<&BackdropId> {
        self.backdrop.as_ref()
    }

    #[must_use]
    pub fn toggle(&self) -> Option<&ToggleId> {
        self.toggle.as_ref()
    }
}
