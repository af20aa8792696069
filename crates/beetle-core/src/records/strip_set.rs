use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::StripRecord;

/// Sids touched by one [`StripSet::apply`], each list ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripChanges {
    pub added: Vec<u32>,
    pub changed: Vec<u32>,
    pub removed: Vec<u32>,
}

impl StripChanges {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.changed.is_empty() && self.removed.is_empty()
    }
}

/// Strip records keyed and ordered by `sid`.
#[derive(Debug, Clone, Default)]
pub struct StripSet {
    strips: BTreeMap<u32, StripRecord>,
}

impl StripSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a fetched collection: add new sids, update changed records,
    /// drop sids the server no longer reports.
    ///
    /// When the server sends a sid twice the last record wins.
    pub fn apply(&mut self, fetched: Vec<StripRecord>) -> StripChanges {
        let mut incoming: BTreeMap<u32, StripRecord> = BTreeMap::new();
        for record in fetched {
            incoming.insert(record.sid, record);
        }

        let mut changes = StripChanges::default();

        for sid in self.strips.keys() {
            if !incoming.contains_key(sid) {
                changes.removed.push(*sid);
            }
        }

        for (sid, record) in &incoming {
            match self.strips.get(sid) {
                None => changes.added.push(*sid),
                Some(existing) if existing != record => changes.changed.push(*sid),
                Some(_) => {}
            }
        }

        self.strips = incoming;
        changes
    }

    pub fn get(&self, sid: u32) -> Option<&StripRecord> {
        self.strips.get(&sid)
    }

    /// Records in ascending `sid` order.
    pub fn iter(&self) -> impl Iterator<Item = &StripRecord> {
        self.strips.values()
    }

    pub fn len(&self) -> usize {
        self.strips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strips.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(sid: u32, color: &str) -> StripRecord {
        StripRecord::new(sid, vec![color.to_string()])
    }

    #[test]
    fn test_apply_sorts_by_sid() {
        let mut set = StripSet::new();
        let changes = set.apply(vec![
            strip(2, "rgb(0, 0, 2)"),
            strip(0, "rgb(0, 0, 0)"),
            strip(1, "rgb(0, 0, 1)"),
        ]);

        assert_eq!(changes.added, vec![0, 1, 2]);
        let sids: Vec<u32> = set.iter().map(|s| s.sid).collect();
        assert_eq!(sids, vec![0, 1, 2]);
    }

    #[test]
    fn test_apply_reports_changes_and_removals() {
        let mut set = StripSet::new();
        set.apply(vec![strip(0, "rgb(0, 0, 0)"), strip(1, "rgb(0, 0, 1)")]);

        let changes = set.apply(vec![strip(1, "rgb(9, 9, 9)"), strip(5, "rgb(5, 5, 5)")]);

        assert_eq!(
            changes,
            StripChanges {
                added: vec![5],
                changed: vec![1],
                removed: vec![0],
            }
        );
        assert_eq!(set.len(), 2);
        assert!(set.get(0).is_none());
        assert_eq!(set.get(1).unwrap().html_colors, vec!["rgb(9, 9, 9)"]);
    }

    #[test]
    fn test_identical_fetch_is_no_change() {
        let mut set = StripSet::new();
        let records = vec![strip(0, "rgb(0, 0, 0)")];
        set.apply(records.clone());
        assert!(set.apply(records).is_empty());
    }

    #[test]
    fn test_duplicate_sid_last_wins() {
        let mut set = StripSet::new();
        set.apply(vec![strip(4, "rgb(1, 1, 1)"), strip(4, "rgb(2, 2, 2)")]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(4).unwrap().html_colors, vec!["rgb(2, 2, 2)"]);
    }
}
