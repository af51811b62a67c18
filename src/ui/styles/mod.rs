// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for buttons and overlay surfaces.

pub mod button;
pub mod overlay;
