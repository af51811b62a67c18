// SPDX-License-Identifier: MPL-2.0
//! Overlay coordination: modals, offcanvas panels, dropdowns, popovers and tooltips.
//!
//! # Components
//!
//! - [`kind`] - Overlay kinds, their policies, and string identifiers
//! - [`region`] - Registration records binding a key to a kind, backdrop and toggle
//! - [`dismissal`] - Dismissal triggers (escape, backdrop, outside click) as data
//! - [`scroll_lock`] - Reference-counted body scroll lock
//! - [`coordinator`] - The sole mutator of overlay visibility
//! - [`placement`] - Tooltip and popover positioning
//!
//! # Usage
//!
//! ```
//! use maintech_ui::overlay::{Coordinator, OverlayEvent, OverlayKind, Region};
//!
//! let mut overlays = Coordinator::new();
//! overlays.register(Region::modal("asset-modal").with_backdrop("modal-backdrop"));
//! overlays.register(Region::offcanvas("filters").with_backdrop("filters-backdrop"));
//!
//! overlays.open(OverlayKind::Modal, "asset-modal");
//! overlays.open(OverlayKind::Offcanvas, "filters");
//! overlays.dispatch(&OverlayEvent::Escape);
//!
//! // Escape only closes modals; the offcanvas still holds the lock.
//! assert!(overlays.is_scroll_locked());
//! ```

pub mod coordinator;
pub mod dismissal;
pub mod kind;
pub mod placement;
pub mod region;
pub mod scroll_lock;

pub use coordinator::{Change, ClickTarget, Coordinator, OverlayEvent, OverlayState, Transition};
pub use dismissal::{DismissRegistry, DismissTrigger};
pub use kind::{BackdropId, OverlayKey, OverlayKind, ToggleId, SCROLL_LOCKED_CLASS};
pub use placement::{place, Side};
pub use region::Region;
pub use scroll_lock::ScrollLock;
