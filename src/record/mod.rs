// SPDX-License-Identifier: MPL-2.0
//! Pain record drafts produced from confirmed zone picks.
//!
//! Storing records is the host backend's job. This crate turns a confirmed
//! [`ZoneSelection`] into a [`PainRecordDraft`] and hands it to a
//! [`RecordSink`], by default one JSON object per line on stdout.

mod history;
mod sink;

pub use history::SessionHistory;
pub use sink::{JsonLinesSink, RecordSink};

use crate::domain::body::{Gender, Side, ZoneId, ZoneSelection};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PainRecordDraft {
    /// Zone id exactly as read from the diagram.
    pub zone_code: ZoneId,
    pub zone_name: String,
    pub gender_code: Gender,
    pub side: Side,
    pub recorded_at: DateTime<Utc>,
}

impl PainRecordDraft {
    #[must_use]
    pub fn from_selection(selection: ZoneSelection, recorded_at: DateTime<Utc>) -> Self {
        Self {
            zone_code: selection.zone_code,
            zone_name: selection.zone_name,
            gender_code: selection.gender_code,
            side: selection.side,
            recorded_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn draft_serializes_with_lowercase_codes() {
        let selection = ZoneSelection {
            zone_code: ZoneId::new("1_1_24").expect("id"),
            zone_name: "1.1.24".into(),
            gender_code: Gender::Male,
            side: Side::Front,
        };
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 0).single().expect("valid time");
        let draft = PainRecordDraft::from_selection(selection, at);

        let value = serde_json::to_value(&draft).expect("serializable");
        assert_eq!(value["zone_code"], "1_1_24");
        assert_eq!(value["zone_name"], "1.1.24");
        assert_eq!(value["gender_code"], "male");
        assert_eq!(value["side"], "front");
        assert_eq!(value["recorded_at"], "2026-03-01T12:30:00Z");
    }
}
