// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pain map vocabulary with no UI or I/O dependencies.
//!
//! This module contains pure domain types, value objects, and rules. The only
//! external crate it touches is `serde`, for the payloads handed to the host.
//!
//! # Modules
//!
//! - [`body`]: Diagram variants ([`DiagramVariant`](body::DiagramVariant)), zone
//!   identifiers ([`ZoneId`](body::ZoneId)), the zone catalog
//!   ([`ZoneCatalog`](body::ZoneCatalog)) and the selection event
//!   ([`ZoneSelection`](body::ZoneSelection))
//! - [`interaction`]: Interaction timing value objects
//!   ([`PulseDuration`](interaction::PulseDuration),
//!   [`DoubleClickWindow`](interaction::DoubleClickWindow))

pub mod body;
pub mod interaction;
