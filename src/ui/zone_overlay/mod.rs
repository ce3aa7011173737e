// SPDX-License-Identifier: MPL-2.0
//! Interaction layer shared by the body map and the zone picker.
//!
//! The SVG itself is rendered by Iced's `svg` widget; this module stacks a
//! single canvas over it that owns hit-testing, hover highlighting and the
//! pick pulse.

mod canvas;
mod pulse;
mod viewport;

pub use canvas::{HoverState, ZoneOverlay};
pub use pulse::{Pulse, PulseFrame};
pub use viewport::Viewport;

use crate::domain::body::ZoneId;
use std::time::Instant;

/// Pointer events published by the overlay. Both carry the generation of
/// the scene they were hit-tested against; receivers drop any other.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayEvent {
    Hovered {
        generation: u64,
        zone: Option<ZoneId>,
    },
    Clicked {
        generation: u64,
        zone: ZoneId,
        at: Instant,
    },
}

impl OverlayEvent {
    #[must_use]
    pub fn generation(&self) -> u64 {
        match self {
            OverlayEvent::Hovered { generation, .. } | OverlayEvent::Clicked { generation, .. } => {
                *generation
            }
        }
    }
}
