// SPDX-License-Identifier: MPL-2.0
//! Which diagram the body map shows and how clicks move between them.

use crate::domain::body::{DiagramVariant, Gender, Side, View, ZoneId};

/// What a click on a zone does in the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Switch to the head close-up; nothing is reported.
    DrillDown,
    /// Report the zone as picked.
    Select,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    gender: Gender,
    side: Side,
    view: View,
}

impl ViewState {
    #[must_use]
    pub fn new(gender: Gender, side: Side) -> Self {
        Self {
            gender,
            side,
            view: View::Full,
        }
    }

    #[must_use]
    pub fn gender(&self) -> Gender {
        self.gender
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    #[must_use]
    pub fn variant(&self) -> DiagramVariant {
        DiagramVariant::new(self.gender, self.side, self.view)
    }

    /// Switches gender and returns to the full body. Returns whether the
    /// displayed variant changed.
    pub fn set_gender(&mut self, gender: Gender) -> bool {
        let before = self.variant();
        self.gender = gender;
        self.view = View::Full;
        self.variant() != before
    }

    /// Switches side and returns to the full body. Returns whether the
    /// displayed variant changed.
    pub fn set_side(&mut self, side: Side) -> bool {
        let before = self.variant();
        self.side = side;
        self.view = View::Full;
        self.variant() != before
    }

    pub fn drill_down(&mut self) {
        self.view = View::Head;
    }

    /// Returns from the head close-up. Returns whether anything changed.
    pub fn back(&mut self) -> bool {
        let changed = self.view == View::Head;
        self.view = View::Full;
        changed
    }

    /// The head zone opens the close-up, but only from the full view.
    #[must_use]
    pub fn classify(&self, zone: &ZoneId) -> ClickOutcome {
        if self.view == View::Full && zone.is_head() {
            ClickOutcome::DrillDown
        } else {
            ClickOutcome::Select
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Gender::default(), Side::default())
    }
}
