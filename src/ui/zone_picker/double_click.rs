// SPDX-License-Identifier: MPL-2.0
//! Detects two clicks on the same zone within the double-click window.

use crate::domain::body::ZoneId;
use crate::domain::interaction::DoubleClickWindow;
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct DoubleClickDetector {
    window: DoubleClickWindow,
    last: Option<(ZoneId, Instant)>,
}

impl DoubleClickDetector {
    #[must_use]
    pub fn new(window: DoubleClickWindow) -> Self {
        Self { window, last: None }
    }

    /// Records a click and returns whether it completes a double click.
    ///
    /// A completed double click is forgotten, so a third quick click starts
    /// a new pair.
    pub fn register(&mut self, zone: &ZoneId, at: Instant) -> bool {
        let is_double = self.last.as_ref().is_some_and(|(last_zone, last_at)| {
            last_zone == zone && self.window.contains(at.saturating_duration_since(*last_at))
        });

        self.last = if is_double {
            None
        } else {
            Some((zone.clone(), at))
        };
        is_double
    }

    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn set_window(&mut self, window: DoubleClickWindow) {
        self.window = window;
    }
}
