// SPDX-License-Identifier: MPL-2.0
//! Zone catalog: static mapping from zone/point identifiers to names.
//!
//! The catalog is built once at startup (built-in table or a TOML file) and
//! shared read-only between components. It is never mutated afterwards.

use super::{ZoneId, ZoneLabel, HEAD_ZONE};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Body part a numbered point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyRegion {
    Head,
    Torso,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl BodyRegion {
    /// i18n key of the region heading.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            BodyRegion::Head => "region-head",
            BodyRegion::Torso => "region-torso",
            BodyRegion::LeftArm => "region-left-arm",
            BodyRegion::RightArm => "region-right-arm",
            BodyRegion::LeftLeg => "region-left-leg",
            BodyRegion::RightLeg => "region-right-leg",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub region: Option<BodyRegion>,
}

/// Built-in numbered points, grouped by region in blocks of one hundred.
const BUILTIN_POINTS: &[(u32, &str, BodyRegion)] = &[
    (101, "Forehead", BodyRegion::Head),
    (102, "Bridge of the nose", BodyRegion::Head),
    (103, "Left cheek", BodyRegion::Head),
    (104, "Right cheek", BodyRegion::Head),
    (105, "Chin", BodyRegion::Head),
    (201, "Upper back", BodyRegion::Torso),
    (202, "Middle back", BodyRegion::Torso),
    (203, "Lower back", BodyRegion::Torso),
    (301, "Shoulder", BodyRegion::RightArm),
    (302, "Biceps", BodyRegion::RightArm),
    (303, "Triceps", BodyRegion::RightArm),
    (304, "Elbow", BodyRegion::RightArm),
    (305, "Wrist", BodyRegion::RightArm),
    (401, "Shoulder", BodyRegion::LeftArm),
    (402, "Biceps", BodyRegion::LeftArm),
    (403, "Triceps", BodyRegion::LeftArm),
    (404, "Elbow", BodyRegion::LeftArm),
    (405, "Wrist", BodyRegion::LeftArm),
    (501, "Thigh", BodyRegion::LeftLeg),
    (502, "Knee", BodyRegion::LeftLeg),
    (503, "Foot", BodyRegion::LeftLeg),
    (601, "Thigh", BodyRegion::RightLeg),
    (602, "Knee", BodyRegion::RightLeg),
    (603, "Foot", BodyRegion::RightLeg),
];

/// On-disk catalog format.
///
/// ```toml
/// [named]
/// head = "Head"
///
/// [[point]]
/// id = 101
/// name = "Forehead"
/// region = "head"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub named: BTreeMap<String, String>,
    #[serde(default, rename = "point")]
    pub points: Vec<CatalogPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogPoint {
    pub id: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<BodyRegion>,
}

#[derive(Debug, Clone, Default)]
pub struct ZoneCatalog {
    named: HashMap<String, CatalogEntry>,
    points: BTreeMap<u32, CatalogEntry>,
}

impl ZoneCatalog {
    /// The catalog shipped with the application.
    #[must_use]
    pub fn builtin() -> Self {
        let mut named = HashMap::new();
        named.insert(
            HEAD_ZONE.to_string(),
            CatalogEntry {
                name: "Head".to_string(),
                region: Some(BodyRegion::Head),
            },
        );

        let points = BUILTIN_POINTS
            .iter()
            .map(|&(id, name, region)| {
                (
                    id,
                    CatalogEntry {
                        name: name.to_string(),
                        region: Some(region),
                    },
                )
            })
            .collect();

        Self { named, points }
    }

    /// Parses a catalog from TOML text.
    pub fn from_toml_str(content: &str) -> crate::error::Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        Ok(Self::from(file))
    }

    /// Loads a catalog file from disk.
    pub fn load_from_path(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.named.len() + self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Catalog entry for a zone: exact string key first, then the numeric
    /// point table.
    #[must_use]
    pub fn entry(&self, zone: &ZoneId) -> Option<&CatalogEntry> {
        self.named
            .get(zone.as_str())
            .or_else(|| zone.numeric_key().and_then(|key| self.points.get(&key)))
    }

    /// Resolves the display label of a zone. Never fails: misses become
    /// [`ZoneLabel::Unknown`] carrying the derived text.
    #[must_use]
    pub fn resolve(&self, zone: &ZoneId) -> ZoneLabel {
        match self.entry(zone) {
            Some(entry) => ZoneLabel::Named(entry.name.clone()),
            None => ZoneLabel::Unknown(zone.derived_label()),
        }
    }

    /// Name of a numbered point, used for records that only carry the
    /// numeric point id.
    #[must_use]
    pub fn point_name(&self, id: u32) -> Option<&str> {
        self.points.get(&id).map(|entry| entry.name.as_str())
    }
}

impl From<CatalogFile> for ZoneCatalog {
    fn from(file: CatalogFile) -> Self {
        let named = file
            .named
            .into_iter()
            .map(|(key, name)| {
                let region = (key == HEAD_ZONE).then_some(BodyRegion::Head);
                (key, CatalogEntry { name, region })
            })
            .collect();
        let points = file
            .points
            .into_iter()
            .map(|point| {
                (
                    point.id,
                    CatalogEntry {
                        name: point.name,
                        region: point.region,
                    },
                )
            })
            .collect();
        Self { named, points }
    }
}
