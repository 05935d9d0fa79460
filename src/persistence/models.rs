//! Persisted override model.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{AvailabilityMap, DayRecord, Session, VenueId, merge_overrides};

/// Owner edits for every venue, keyed by venue ID.
///
/// Wire format:
/// ```json
/// { "1": { "2025-02-01": { "day": true, "night": false } } }
/// ```
/// Only cells an owner has toggled appear; untouched dates are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverrideMap(BTreeMap<VenueId, AvailabilityMap>);

impl OverrideMap {
    /// Creates an empty override map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the overrides of one venue, if it has any.
    #[must_use]
    pub fn get(&self, venue_id: &str) -> Option<&AvailabilityMap> {
        self.0.get(venue_id)
    }

    /// Sets one (date, session) cell for a venue.
    ///
    /// A date without an override record starts from both sessions open,
    /// so writing one session never implies the other is booked. Existing
    /// records keep their other session untouched.
    pub fn set_cell(
        &mut self,
        venue_id: &VenueId,
        date: NaiveDate,
        session: Session,
        available: bool,
    ) {
        let venue = self.0.entry(venue_id.clone()).or_default();
        let record = venue.get(date).copied().unwrap_or_else(DayRecord::open);
        venue.insert(date, record.with_session(session, available));
    }

    /// Baseline merged with this venue's overrides; see
    /// [`merge_overrides`].
    #[must_use]
    pub fn effective_for(&self, venue_id: &str, baseline: &AvailabilityMap) -> AvailabilityMap {
        merge_overrides(baseline, self.get(venue_id))
    }

    /// Number of venues with at least one override.
    #[must_use]
    pub fn venue_count(&self) -> usize {
        self.0.len()
    }

    /// Total number of overridden dates across all venues.
    #[must_use]
    pub fn date_count(&self) -> usize {
        self.0.values().map(AvailabilityMap::len).sum()
    }

    /// Returns `true` if there are no overrides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::parse_date;

    fn date(raw: &str) -> NaiveDate {
        let Ok(date) = parse_date(raw) else {
            panic!("bad test date {raw}");
        };
        date
    }

    #[test]
    fn first_write_defaults_other_session_open() {
        let mut map = OverrideMap::new();
        let id = VenueId::from("1");
        map.set_cell(&id, date("2025-02-01"), Session::Night, false);

        let Some(venue) = map.get("1") else {
            panic!("venue overrides missing");
        };
        let record = venue.get(date("2025-02-01"));
        assert_eq!(record, Some(&DayRecord::new(true, false)));
    }

    #[test]
    fn second_write_keeps_other_session() {
        let mut map = OverrideMap::new();
        let id = VenueId::from("1");
        let d = date("2025-02-01");
        map.set_cell(&id, d, Session::Day, false);
        map.set_cell(&id, d, Session::Night, false);

        let record = map.get("1").and_then(|v| v.get(d).copied());
        assert_eq!(record, Some(DayRecord::new(false, false)));
    }

    #[test]
    fn repeated_write_is_idempotent() {
        let id = VenueId::from("3");
        let d = date("2025-03-10");
        let mut once = OverrideMap::new();
        once.set_cell(&id, d, Session::Day, false);

        let mut twice = once.clone();
        twice.set_cell(&id, d, Session::Day, false);
        assert_eq!(once, twice);
    }

    #[test]
    fn wire_format_matches_external_contract() {
        let mut map = OverrideMap::new();
        let id = VenueId::from("2");
        map.set_cell(&id, date("2025-01-19"), Session::Day, false);
        let Ok(json) = serde_json::to_string(&map) else {
            panic!("serialization failed");
        };
        assert_eq!(json, r#"{"2":{"2025-01-19":{"day":false,"night":true}}}"#);
    }

    #[test]
    fn counts() {
        let mut map = OverrideMap::new();
        assert!(map.is_empty());
        let (one, two) = (VenueId::from("1"), VenueId::from("2"));
        map.set_cell(&one, date("2025-01-01"), Session::Day, false);
        map.set_cell(&one, date("2025-01-02"), Session::Day, false);
        map.set_cell(&two, date("2025-01-01"), Session::Night, true);
        assert_eq!(map.venue_count(), 2);
        assert_eq!(map.date_count(), 3);
    }
}
