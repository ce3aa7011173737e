// SPDX-License-Identifier: MPL-2.0
//! Ordered set of selected zones.

use crate::domain::body::ZoneId;

/// Zones in the order they were selected, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    zones: Vec<ZoneId>,
}

impl SelectionSet {
    #[must_use]
    pub fn new(zones: impl IntoIterator<Item = ZoneId>) -> Self {
        let mut set = Self::default();
        set.replace(zones);
        set
    }

    /// Adds `zone` if absent, removes it otherwise. Returns whether the zone
    /// is selected afterwards.
    pub fn toggle(&mut self, zone: &ZoneId) -> bool {
        if let Some(index) = self.zones.iter().position(|z| z == zone) {
            self.zones.remove(index);
            false
        } else {
            self.zones.push(zone.clone());
            true
        }
    }

    /// Replaces the contents, dropping repeated ids.
    pub fn replace(&mut self, zones: impl IntoIterator<Item = ZoneId>) {
        self.zones.clear();
        for zone in zones {
            if !self.zones.contains(&zone) {
                self.zones.push(zone);
            }
        }
    }

    #[must_use]
    pub fn contains(&self, zone: &ZoneId) -> bool {
        self.zones.contains(zone)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ZoneId] {
        &self.zones
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(raw: &str) -> ZoneId {
        ZoneId::new(raw).expect("zone id")
    }

    #[test]
    fn toggle_twice_restores_the_set() {
        let mut set = SelectionSet::new([zone("1_01")]);
        let before = set.clone();

        assert!(set.toggle(&zone("2_01")));
        assert!(!set.toggle(&zone("2_01")));
        assert_eq!(set, before);
    }

    #[test]
    fn selection_order_is_kept() {
        let mut set = SelectionSet::default();
        set.toggle(&zone("b"));
        set.toggle(&zone("a"));
        set.toggle(&zone("c"));
        set.toggle(&zone("a"));
        let ids: Vec<_> = set.as_slice().iter().map(ZoneId::as_str).collect();
        assert_eq!(ids, vec!["b", "c"]);
    }

    #[test]
    fn replace_drops_duplicates() {
        let set = SelectionSet::new([zone("a"), zone("b"), zone("a")]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(&zone("b")));
    }
}
