// SPDX-License-Identifier: MPL-2.0
//! Body diagram domain types.

mod catalog;
mod variant;
mod zone;

pub use catalog::{BodyRegion, CatalogEntry, CatalogFile, CatalogPoint, ZoneCatalog};
pub use variant::{DiagramVariant, Gender, Side, View};
pub use zone::{ZoneId, ZoneLabel, ZoneSelection, HEAD_ZONE};
