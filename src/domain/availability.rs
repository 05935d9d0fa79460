//! Per-date, per-session availability and the baseline/override merge.
//!
//! An [`AvailabilityMap`] is open-world: a date that has no [`DayRecord`]
//! is available for both sessions, and a record that leaves one session
//! unspecified defers that session to the same rule. [`is_available`] is
//! the only place that rule is applied.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Session;
use crate::error::CatalogError;

/// Wire format of a date key.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an ISO `YYYY-MM-DD` date key.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidDate`] if `raw` is not a valid calendar
/// date in that format.
pub fn parse_date(raw: &str) -> Result<NaiveDate, CatalogError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| CatalogError::InvalidDate(raw.to_string()))
}

/// Day and night availability for one date.
///
/// `Some(true)` is available, `Some(false)` is booked, `None` means the
/// record does not speak for that session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Daytime session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<bool>,
    /// Evening session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub night: Option<bool>,
}

impl DayRecord {
    /// Creates a record that specifies both sessions.
    #[must_use]
    pub const fn new(day: bool, night: bool) -> Self {
        Self {
            day: Some(day),
            night: Some(night),
        }
    }

    /// Record with both sessions available. Starting point for a fresh
    /// override so the untouched session is never implied booked.
    #[must_use]
    pub const fn open() -> Self {
        Self::new(true, true)
    }

    /// Returns the stored value for `session`, if any.
    #[must_use]
    pub const fn session(&self, session: Session) -> Option<bool> {
        match session {
            Session::Day => self.day,
            Session::Night => self.night,
        }
    }

    /// Returns a copy with `session` set to `available`.
    #[must_use]
    pub const fn with_session(mut self, session: Session, available: bool) -> Self {
        match session {
            Session::Day => self.day = Some(available),
            Session::Night => self.night = Some(available),
        }
        self
    }
}

/// Mapping from calendar date to [`DayRecord`].
///
/// Serialized as a JSON object keyed by `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvailabilityMap(BTreeMap<NaiveDate, DayRecord>);

impl AvailabilityMap {
    /// Creates an empty map (every date available).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the record for `date`, if one is present.
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.0.get(&date)
    }

    /// Inserts or replaces the record for `date`.
    pub fn insert(&mut self, date: NaiveDate, record: DayRecord) -> Option<DayRecord> {
        self.0.insert(date, record)
    }

    /// Iterates records in date order.
    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &DayRecord)> {
        self.0.iter()
    }

    /// Number of dates with a record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no date has a record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Shorthand for [`is_available`] on this map.
    #[must_use]
    pub fn is_available(&self, date: NaiveDate, session: Session) -> bool {
        is_available(self, date, session)
    }
}

impl FromIterator<(NaiveDate, DayRecord)> for AvailabilityMap {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, DayRecord)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Returns whether `session` on `date` is open in `map`.
///
/// Absent dates and unspecified sessions are available.
#[must_use]
pub fn is_available(map: &AvailabilityMap, date: NaiveDate, session: Session) -> bool {
    map.get(date)
        .and_then(|record| record.session(session))
        .unwrap_or(true)
}

/// Layers a venue's overrides onto its baseline.
///
/// Every date present in `overrides` takes the override's record
/// wholesale; the baseline record for that date is discarded, not merged
/// field by field. All other dates keep their baseline record.
#[must_use]
pub fn merge_overrides(
    baseline: &AvailabilityMap,
    overrides: Option<&AvailabilityMap>,
) -> AvailabilityMap {
    let mut effective = baseline.clone();
    if let Some(overrides) = overrides {
        for (date, record) in overrides.iter() {
            effective.insert(*date, *record);
        }
    }
    effective
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn date(raw: &str) -> NaiveDate {
        let Ok(date) = parse_date(raw) else {
            panic!("bad test date {raw}");
        };
        date
    }

    #[test]
    fn absent_date_is_available_for_both_sessions() {
        let map = AvailabilityMap::new();
        for session in Session::ALL {
            assert!(is_available(&map, date("2030-06-01"), session));
        }
    }

    #[test]
    fn unspecified_session_defaults_to_available() {
        let mut map = AvailabilityMap::new();
        map.insert(
            date("2025-01-15"),
            DayRecord {
                day: Some(false),
                night: None,
            },
        );
        assert!(!is_available(&map, date("2025-01-15"), Session::Day));
        assert!(is_available(&map, date("2025-01-15"), Session::Night));
    }

    #[test]
    fn override_record_replaces_baseline_wholesale() {
        let d = date("2025-01-15");
        let baseline: AvailabilityMap = [(d, DayRecord::new(true, false))].into_iter().collect();
        let overrides: AvailabilityMap = [(d, DayRecord::new(false, false))].into_iter().collect();

        let effective = merge_overrides(&baseline, Some(&overrides));
        assert_eq!(effective.get(d), Some(&DayRecord::new(false, false)));
    }

    #[test]
    fn partial_override_does_not_inherit_baseline_fields() {
        let d = date("2025-01-17");
        let baseline: AvailabilityMap = [(d, DayRecord::new(false, false))].into_iter().collect();
        let overrides: AvailabilityMap = [(
            d,
            DayRecord {
                day: None,
                night: Some(true),
            },
        )]
        .into_iter()
        .collect();

        let effective = merge_overrides(&baseline, Some(&overrides));
        // The override owns the whole date, so its missing day field falls
        // back to the default, not to the baseline's booked day.
        assert!(effective.is_available(d, Session::Day));
        assert!(effective.is_available(d, Session::Night));
    }

    #[test]
    fn dates_outside_overrides_keep_baseline() {
        let kept = date("2025-01-16");
        let replaced = date("2025-01-18");
        let baseline: AvailabilityMap = [
            (kept, DayRecord::new(false, true)),
            (replaced, DayRecord::new(true, true)),
        ]
        .into_iter()
        .collect();
        let overrides: AvailabilityMap = [
            (replaced, DayRecord::new(true, false)),
            (date("2025-02-01"), DayRecord::new(false, true)),
        ]
        .into_iter()
        .collect();

        let effective = merge_overrides(&baseline, Some(&overrides));
        assert_eq!(effective.get(kept), baseline.get(kept));
        assert_eq!(effective.get(replaced), overrides.get(replaced));
        assert_eq!(effective.len(), 3);
    }

    #[test]
    fn no_overrides_returns_baseline() {
        let baseline: AvailabilityMap = [(date("2025-01-20"), DayRecord::new(false, true))]
            .into_iter()
            .collect();
        assert_eq!(merge_overrides(&baseline, None), baseline);
    }

    #[test]
    fn serializes_with_iso_date_keys() {
        let map: AvailabilityMap = [(date("2025-01-15"), DayRecord::new(true, false))]
            .into_iter()
            .collect();
        let Ok(json) = serde_json::to_string(&map) else {
            panic!("serialization failed");
        };
        assert_eq!(json, r#"{"2025-01-15":{"day":true,"night":false}}"#);
    }

    #[test]
    fn deserializes_partial_records() {
        let Ok(map) = serde_json::from_str::<AvailabilityMap>(r#"{"2025-03-02":{"night":false}}"#)
        else {
            panic!("deserialization failed");
        };
        let Some(record) = map.get(date("2025-03-02")) else {
            panic!("missing record");
        };
        assert_eq!(record.day, None);
        assert_eq!(record.night, Some(false));
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert!(parse_date("2025-02-30").is_err());
        assert!(parse_date("15/01/2025").is_err());
        assert!(parse_date(" 2025-01-15 ").is_ok());
    }
}
