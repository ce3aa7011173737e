// SPDX-License-Identifier: MPL-2.0
//! Diagram variant selector: which body drawing is on screen.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Directory (relative to the asset root) holding the body diagrams.
const DIAGRAM_DIR: &str = "pain-map";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Front,
    Back,
}

/// Level of detail of the drawing. `Head` is only reached by drilling down
/// from `Full`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Full,
    Head,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Wire code used in selection payloads.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    fn file_prefix(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Front, Side::Back];

    /// Wire code used in selection payloads.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Side::Front => "front",
            Side::Back => "back",
        }
    }
}

impl View {
    pub const ALL: [View; 2] = [View::Full, View::Head];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            View::Full => "full",
            View::Head => "head",
        }
    }
}

macro_rules! impl_code_traits {
    ($ty:ty, $label:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_ascii_lowercase();
                Self::ALL
                    .into_iter()
                    .find(|value| value.code() == wanted)
                    .ok_or_else(|| format!("unknown {}: {}", $label, s))
            }
        }
    };
}

impl_code_traits!(Gender, "gender");
impl_code_traits!(Side, "side");
impl_code_traits!(View, "view");

/// The (gender, side, view) triple selecting one vector resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DiagramVariant {
    pub gender: Gender,
    pub side: Side,
    pub view: View,
}

impl DiagramVariant {
    #[must_use]
    pub fn new(gender: Gender, side: Side, view: View) -> Self {
        Self { gender, side, view }
    }

    /// Full-body variant for the given gender and side.
    #[must_use]
    pub fn full(gender: Gender, side: Side) -> Self {
        Self::new(gender, side, View::Full)
    }

    /// Resource path relative to the asset root, e.g.
    /// `pain-map/Male_full_front.svg`.
    #[must_use]
    pub fn resource_path(&self) -> String {
        format!(
            "{}/{}_{}_{}.svg",
            DIAGRAM_DIR,
            self.gender.file_prefix(),
            self.view.code(),
            self.side.code()
        )
    }
}

impl fmt::Display for DiagramVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.gender, self.side, self.view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_paths_cover_all_variants() {
        let mut paths = Vec::new();
        for gender in Gender::ALL {
            for side in Side::ALL {
                for view in View::ALL {
                    paths.push(DiagramVariant::new(gender, side, view).resource_path());
                }
            }
        }
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), 8);
        assert!(paths.contains(&"pain-map/Male_full_front.svg".to_string()));
        assert!(paths.contains(&"pain-map/Female_head_back.svg".to_string()));
    }

    #[test]
    fn codes_parse_case_insensitively() {
        assert_eq!("Female".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!(" back ".parse::<Side>(), Ok(Side::Back));
        assert!("sideways".parse::<Side>().is_err());
    }

    #[test]
    fn default_variant_is_male_front_full() {
        let variant = DiagramVariant::default();
        assert_eq!(variant, DiagramVariant::full(Gender::Male, Side::Front));
        assert_eq!(variant.to_string(), "male/front/full");
    }

    #[test]
    fn serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&Gender::Female).expect("serialize");
        assert_eq!(json, "\"female\"");
        let side: Side = serde_json::from_str("\"back\"").expect("deserialize");
        assert_eq!(side, Side::Back);
    }
}
