// SPDX-License-Identifier: MPL-2.0
//! Overlay kinds and the string identifiers that name regions, backdrops and toggles.

use std::borrow::Borrow;
use std::fmt;

/// The family an overlay belongs to. Each kind has its own exclusivity,
/// scroll-lock and dismissal policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    Modal,
    Offcanvas,
    Dropdown,
    Popover,
    Tooltip,
}

impl OverlayKind {
    pub const ALL: [OverlayKind; 5] = [
        OverlayKind::Modal,
        OverlayKind::Offcanvas,
        OverlayKind::Dropdown,
        OverlayKind::Popover,
        OverlayKind::Tooltip,
    ];

    /// Whether an open overlay of this kind holds the body scroll lock.
    #[must_use]
    pub fn locks_scroll(self) -> bool {
        matches!(self, OverlayKind::Modal | OverlayKind::Offcanvas)
    }

    /// Whether at most one overlay of this kind may be open at a time.
    #[must_use]
    pub fn is_exclusive(self) -> bool {
        matches!(self, OverlayKind::Dropdown | OverlayKind::Popover)
    }

    /// Whether a click outside the open instance dismisses it.
    #[must_use]
    pub fn dismisses_on_outside_click(self) -> bool {
        self.is_exclusive()
    }

    /// Whether the escape key dismisses this kind by default.
    #[must_use]
    pub fn dismisses_on_escape(self) -> bool {
        matches!(self, OverlayKind::Modal)
    }

    /// State class carried by an open region of this kind.
    #[must_use]
    pub fn open_class(self) -> &'static str {
        match self {
            OverlayKind::Modal => "app-modal--show",
            OverlayKind::Offcanvas => "app-offcanvas--show",
            OverlayKind::Dropdown => "app-dropdown--show",
            OverlayKind::Popover => "app-popover--show",
            OverlayKind::Tooltip => "app-tooltip--show",
        }
    }

    /// State class carried by a visible backdrop of this kind, if the kind has backdrops.
    #[must_use]
    pub fn backdrop_class(self) -> Option<&'static str> {
        match self {
            OverlayKind::Modal => Some("is-visible"),
            OverlayKind::Offcanvas => Some("app-offcanvas-backdrop--show"),
            OverlayKind::Dropdown | OverlayKind::Popover | OverlayKind::Tooltip => None,
        }
    }
}

impl fmt::Display for OverlayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OverlayKind::Modal => "modal",
            OverlayKind::Offcanvas => "offcanvas",
            OverlayKind::Dropdown => "dropdown",
            OverlayKind::Popover => "popover",
            OverlayKind::Tooltip => "tooltip",
        };
        f.write_str(name)
    }
}

/// Body class present while the scroll lock is engaged.
pub const SCROLL_LOCKED_CLASS: &str = "scroll-locked";

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Identity of an overlay region, bound once at registration.
    OverlayKey
);
string_id!(
    /// Identity of a backdrop element behind a modal or offcanvas.
    BackdropId
);
string_id!(
    /// Identity of a control that opens and closes an overlay.
    ToggleId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_modal_and_offcanvas_lock_scroll() {
        let locking: Vec<_> = OverlayKind::ALL
            .into_iter()
            .filter(|kind| kind.locks_scroll())
            .collect();
        assert_eq!(locking, vec![OverlayKind::Modal, OverlayKind::Offcanvas]);
    }

    #[test]
    fn only_dropdown_and_popover_are_exclusive() {
        let exclusive: Vec<_> = OverlayKind::ALL
            .into_iter()
            .filter(|kind| kind.is_exclusive())
            .collect();
        assert_eq!(exclusive, vec![OverlayKind::Dropdown, OverlayKind::Popover]);
    }

    #[test]
    fn open_classes_are_distinct() {
        let mut classes: Vec<_> = OverlayKind::ALL.iter().map(|k| k.open_class()).collect();
        classes.sort_unstable();
        classes.dedup();
        assert_eq!(classes.len(), OverlayKind::ALL.len());
    }

    #[test]
    fn keys_compare_by_string() {
        assert_eq!(OverlayKey::from("asset-modal"), OverlayKey::new("asset-modal"));
        assert_eq!(OverlayKey::from("asset-modal").to_string(), "asset-modal");
    }
}
