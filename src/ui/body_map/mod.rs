// SPDX-License-Identifier: MPL-2.0
//! Single-select body map: pick one zone on a gender/side diagram, with a
//! head close-up reached by clicking the head.

pub mod component;
pub mod view_state;

pub use component::{Effect, Message, State, ViewContext};
pub use view_state::{ClickOutcome, ViewState};

use crate::domain::body::{Gender, Side};
use crate::i18n::fluent::I18n;

/// Translated name of a gender toggle.
pub fn gender_label(i18n: &I18n, gender: Gender) -> String {
    i18n.tr(&format!("gender-{}", gender.code()))
}

/// Translated name of a side toggle.
pub fn side_label(i18n: &I18n, side: Side) -> String {
    i18n.tr(&format!("side-{}", side.code()))
}
