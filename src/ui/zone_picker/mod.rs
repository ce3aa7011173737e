// SPDX-License-Identifier: MPL-2.0
//! Multi-select zone picker: toggle zones on a fixed diagram, double-click a
//! zone to ask the host for its details.

pub mod component;
pub mod double_click;
pub mod selection;

pub use component::{Effect, Message, SelectionChange, State, ViewContext};
pub use double_click::DoubleClickDetector;
pub use selection::SelectionSet;
