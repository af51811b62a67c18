// SPDX-License-Identifier: MPL-2.0
//! Dismissal triggers and the keys each of them closes.
//!
//! Registrations are plain data: the coordinator looks up the keys for a
//! trigger when the matching input event arrives.

use super::kind::{BackdropId, OverlayKey};
use std::collections::HashMap;

/// A gesture that dismisses overlays.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DismissTrigger {
    /// The escape key.
    Escape,
    /// A click on a specific backdrop element.
    Backdrop(BackdropId),
    /// A click anywhere outside the open instance.
    OutsideClick,
}

/// Mapping from dismissal trigger to the overlay keys it closes.
#[derive(Debug, Default, Clone)]
pub struct DismissRegistry {
    registrations: HashMap<DismissTrigger, Vec<OverlayKey>>,
}

impl DismissRegistry {
    /// Associates `keys` with `trigger`. Keys already registered for the
    /// trigger are not duplicated.
    pub fn register<I>(&mut self, trigger: DismissTrigger, keys: I)
    where
        I: IntoIterator<Item = OverlayKey>,
    {
        let entry = self.registrations.entry(trigger).or_default();
        for key in keys {
            if !entry.contains(&key) {
                entry.push(key);
            }
        }
    }

    /// Keys closed by `trigger`, in registration order.
    #[must_use]
    pub fn keys_for(&self, trigger: &DismissTrigger) -> &[OverlayKey] {
        self.registrations
            .get(trigger)
            .map_or(&[], Vec::as_slice)
    }

    /// Whether `key` is registered for `trigger`.
    #[must_use]
    pub fn closes(&self, trigger: &DismissTrigger, key: &OverlayKey) -> bool {
        self.keys_for(trigger).contains(key)
    }
}
