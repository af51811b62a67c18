// SPDX-License-Identifier: MPL-2.0
//! Reference-counted body scroll lock.

/// Counts the blocking overlays (modal and offcanvas) currently open.
///
/// The lock is engaged while the count is non-zero. Only the coordinator
/// changes it, once per closed-to-open or open-to-closed transition.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScrollLock {
    holders: usize,
}

impl ScrollLock {
    pub(crate) fn engage(&mut self) {
        self.holders += 1;
    }

    pub(crate) fn release(&mut self) {
        if self.holders == 0 {
            log::warn!("scroll lock released with no holders");
            return;
        }
        self.holders -= 1;
    }

    #[must_use]
    pub fn is_engaged(&self) -> bool {
        self.holders > 0
    }

    #[must_use]
    pub fn holders(&self) -> usize {
        self.holders
    }
}
