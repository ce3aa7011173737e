// SPDX-License-Identifier: MPL-2.0
//! Zone identifiers, display labels and the selection payload.

use super::{Gender, Side};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the head region on full-body diagrams. Clicking it in the
/// full view drills down instead of selecting.
pub const HEAD_ZONE: &str = "head";

/// Opaque key of a clickable region, taken verbatim from the SVG `id`.
///
/// Only meaningful relative to the diagram variant it was read from.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneId(String);

impl ZoneId {
    /// Returns `None` for empty or whitespace-only identifiers, which never
    /// name a region.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_head(&self) -> bool {
        self.0 == HEAD_ZONE
    }

    /// Numeric form used for point lookups: every non-digit is dropped
    /// (`"1_01"` → `101`). `None` when no digits remain or the number
    /// overflows.
    #[must_use]
    pub fn numeric_key(&self) -> Option<u32> {
        let digits: String = self.0.chars().filter(char::is_ascii_digit).collect();
        digits.parse().ok()
    }

    /// Display text for ids missing from the catalog (`"1_1_24"` → `"1.1.24"`).
    #[must_use]
    pub fn derived_label(&self) -> String {
        self.0.replace('_', ".")
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ZoneId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Human-readable name of a zone.
///
/// Ids without a catalog entry are kept in their own `Unknown` category so
/// callers can tell a real name from a derived one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneLabel {
    Named(String),
    Unknown(String),
}

impl ZoneLabel {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            ZoneLabel::Named(text) | ZoneLabel::Unknown(text) => text,
        }
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, ZoneLabel::Unknown(_))
    }
}

impl fmt::Display for ZoneLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Zone Selection Event: what the body map hands to its host on a pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneSelection {
    pub zone_code: ZoneId,
    pub zone_name: String,
    pub gender_code: Gender,
    pub side: Side,
}
