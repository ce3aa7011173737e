// SPDX-License-Identifier: MPL-2.0
//! Interaction timing value objects.

pub mod newtypes;

pub use newtypes::{double_click_bounds, pulse_bounds, DoubleClickWindow, PulseDuration};
