//! Maintenance flags keyed by resource and optional date.
//!
//! A flag stored without a date means "currently under maintenance": it
//! answers date-less lookups and lookups for today, never other dates.
//! Missing entries read as not under maintenance.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use roombook_entity::facility::ResourceRef;

/// Canonical lookup key for a maintenance flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MaintenanceKey {
    /// The flagged resource.
    pub resource: ResourceRef,
    /// The date the flag applies to, or `None` for "currently".
    pub date: Option<NaiveDate>,
}

impl MaintenanceKey {
    /// Creates a key.
    pub fn new(resource: impl Into<ResourceRef>, date: Option<NaiveDate>) -> Self {
        Self {
            resource: resource.into(),
            date,
        }
    }
}

/// A batch of statuses as returned by the maintenance source.
///
/// ```json
/// { "date": "2025-05-18", "statuses": { "1": true, "2": false } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceSnapshot {
    /// Date the statuses apply to; absent means "currently".
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Status per resource id.
    #[serde(default)]
    pub statuses: BTreeMap<ResourceRef, bool>,
}

/// In-memory maintenance lookup used by the slot validator.
#[derive(Debug, Clone, Default)]
pub struct MaintenanceIndex {
    flags: HashMap<MaintenanceKey, bool>,
}

impl MaintenanceIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the status of one resource.
    pub fn set_status(
        &mut self,
        resource: impl Into<ResourceRef>,
        date: Option<NaiveDate>,
        under_maintenance: bool,
    ) {
        let key = MaintenanceKey::new(resource, date);
        debug!(resource = %key.resource, ?date, under_maintenance, "Maintenance status set");
        self.flags.insert(key, under_maintenance);
    }

    /// Records a batch of statuses for one date.
    ///
    /// Repeated resources collapse to their last status.
    pub fn apply_batch<I, R>(&mut self, statuses: I, date: Option<NaiveDate>)
    where
        I: IntoIterator<Item = (R, bool)>,
        R: Into<ResourceRef>,
    {
        let mut applied = 0usize;
        for (resource, flag) in statuses {
            self.flags
                .insert(MaintenanceKey::new(resource, date), flag);
            applied += 1;
        }
        debug!(applied, ?date, "Maintenance batch applied");
    }

    /// Records every status in `snapshot`.
    pub fn apply_snapshot(&mut self, snapshot: MaintenanceSnapshot) {
        self.apply_batch(snapshot.statuses, snapshot.date);
    }

    /// Whether `resource` is flagged under exactly this key.
    pub fn is_under_maintenance(&self, resource: &ResourceRef, date: Option<NaiveDate>) -> bool {
        self.flags
            .get(&MaintenanceKey::new(resource.clone(), date))
            .copied()
            .unwrap_or(false)
    }

    /// Whether `resource` is flagged for `date`, given that it is `today`.
    ///
    /// The date-less flag only counts when `date` is today.
    pub fn is_under_maintenance_on(
        &self,
        resource: &ResourceRef,
        date: NaiveDate,
        today: NaiveDate,
    ) -> bool {
        self.is_under_maintenance(resource, Some(date))
            || (date == today && self.is_under_maintenance(resource, None))
    }

    /// All recorded flags, sorted by key.
    pub fn entries(&self) -> Vec<(&MaintenanceKey, bool)> {
        let mut entries: Vec<_> = self.flags.iter().map(|(k, v)| (k, *v)).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Number of recorded flags.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2025, 5, d)
    }

    #[test]
    fn test_empty_index_is_not_under_maintenance() {
        let index = MaintenanceIndex::new();
        assert!(!index.is_under_maintenance(&ResourceRef::from("1"), day(18)));
        assert!(!index.is_under_maintenance(&ResourceRef::from("1"), None));
    }

    #[test]
    fn test_dated_flag_only_matches_its_date() {
        let mut index = MaintenanceIndex::new();
        index.set_status(1u64, day(18), true);
        assert!(index.is_under_maintenance(&ResourceRef::from("1"), day(18)));
        assert!(!index.is_under_maintenance(&ResourceRef::from("1"), day(19)));
        assert!(!index.is_under_maintenance(&ResourceRef::from("1"), None));
    }

    #[test]
    fn test_undated_flag_only_covers_today() {
        let mut index = MaintenanceIndex::new();
        index.set_status("3", None, true);
        let resource = ResourceRef::from(3u64);
        let today = day(17).unwrap();

        assert!(index.is_under_maintenance(&resource, None));
        assert!(!index.is_under_maintenance(&resource, day(17)));
        assert!(index.is_under_maintenance_on(&resource, today, today));
        assert!(!index.is_under_maintenance_on(&resource, day(18).unwrap(), today));
        assert!(!index.is_under_maintenance_on(&resource, day(30).unwrap(), today));
    }

    #[test]
    fn test_dated_flag_does_not_depend_on_today() {
        let mut index = MaintenanceIndex::new();
        index.set_status("3", day(30), true);
        let resource = ResourceRef::from("3");
        assert!(index.is_under_maintenance_on(&resource, day(30).unwrap(), day(17).unwrap()));
        assert!(!index.is_under_maintenance_on(&resource, day(29).unwrap(), day(17).unwrap()));
    }

    #[test]
    fn test_batch_and_single_share_keys() {
        let mut index = MaintenanceIndex::new();
        index.apply_batch([("1", true), ("2", false), ("1", false)], day(18));
        assert!(!index.is_under_maintenance(&ResourceRef::from("1"), day(18)));
        assert_eq!(index.len(), 2);

        index.set_status("1", day(18), true);
        assert!(index.is_under_maintenance(&ResourceRef::from(1u64), day(18)));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_snapshot_from_json() {
        let snapshot: MaintenanceSnapshot =
            serde_json::from_str(r#"{"date": "2025-05-18", "statuses": {"4": true, "5": false}}"#)
                .unwrap();
        let mut index = MaintenanceIndex::new();
        index.apply_snapshot(snapshot);
        assert!(index.is_under_maintenance(&ResourceRef::from("4"), day(18)));
        assert!(!index.is_under_maintenance(&ResourceRef::from("5"), day(18)));
        assert_eq!(index.entries().len(), 2);
    }
}
