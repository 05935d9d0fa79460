//! Filter criteria and the venue filter engine.
//!
//! Every active predicate must hold for a venue to be kept. Predicates are
//! independent of each other, and the result keeps catalog order.

use chrono::NaiveDate;

use super::{Area, AvailabilityMap, BudgetBracket, Session, Venue, is_available};
use crate::error::CatalogError;

/// Selector value meaning "no restriction".
const ANY_SELECTION: [&str; 3] = ["", "all", "any"];

/// Inclusive guest-count range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityRange {
    /// Smallest acceptable capacity.
    pub min: u32,
    /// Largest acceptable capacity.
    pub max: u32,
}

impl CapacityRange {
    /// Range that accepts every capacity.
    pub const FULL: Self = Self {
        min: 0,
        max: u32::MAX,
    };

    /// Creates a range. An inverted range is accepted and matches nothing.
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Returns `true` if `min > max`.
    #[must_use]
    pub const fn is_inverted(&self) -> bool {
        self.min > self.max
    }

    /// Returns `true` if `capacity` lies within the range.
    #[must_use]
    pub const fn contains(&self, capacity: u32) -> bool {
        self.min <= capacity && capacity <= self.max
    }
}

impl Default for CapacityRange {
    fn default() -> Self {
        Self::FULL
    }
}

/// A visitor's search and filter selection. Rebuilt per query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Free-text search over name and area label.
    pub query: String,
    /// Area restriction; `None` for any area.
    pub area: Option<Area>,
    /// Budget restriction; `None` for any budget.
    pub budget: Option<BudgetBracket>,
    /// Guest-count restriction. Always applied.
    pub capacity: CapacityRange,
    /// Target date; `None` disables the availability predicate.
    pub date: Option<NaiveDate>,
    /// Session checked on `date`.
    pub session: Session,
}

impl FilterCriteria {
    /// Criteria that match every venue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset state of the filter panel: everything cleared, capacity spanning
    /// `[0, max_capacity]`.
    #[must_use]
    pub fn cleared(max_capacity: u32) -> Self {
        Self {
            capacity: CapacityRange::new(0, max_capacity),
            ..Self::default()
        }
    }

    /// Sets the search text.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Restricts to one area.
    #[must_use]
    pub fn with_area(mut self, area: Area) -> Self {
        self.area = Some(area);
        self
    }

    /// Restricts to a budget bracket.
    #[must_use]
    pub fn with_budget(mut self, budget: BudgetBracket) -> Self {
        self.budget = Some(budget);
        self
    }

    /// Restricts guest capacity to `[min, max]`.
    #[must_use]
    pub fn with_capacity(mut self, min: u32, max: u32) -> Self {
        self.capacity = CapacityRange::new(min, max);
        self
    }

    /// Requires availability for `session` on `date`.
    #[must_use]
    pub fn on(mut self, date: NaiveDate, session: Session) -> Self {
        self.date = Some(date);
        self.session = session;
        self
    }

    /// Applies an area selector value; `"all"`, `"any"` or empty clear it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownArea`] for an unrecognized label.
    pub fn select_area(mut self, label: &str) -> Result<Self, CatalogError> {
        self.area = if is_any(label) {
            None
        } else {
            Some(label.parse()?)
        };
        Ok(self)
    }

    /// Applies a budget selector value; `"all"`, `"any"` or empty clear it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownBudget`] for an unrecognized label.
    pub fn select_budget(mut self, label: &str) -> Result<Self, CatalogError> {
        self.budget = if is_any(label) {
            None
        } else {
            Some(BudgetBracket::by_label(label)?)
        };
        Ok(self)
    }

    /// Returns `true` if any predicate narrows a catalog whose largest
    /// capacity is `max_capacity`.
    ///
    /// A capacity range covering all of `[0, max_capacity]` is inactive, so
    /// both [`FilterCriteria::new`] and [`FilterCriteria::cleared`] report
    /// `false`.
    #[must_use]
    pub fn has_active_filters(&self, max_capacity: u32) -> bool {
        self.text_active()
            || self.area.is_some()
            || self.budget.is_some()
            || self.date.is_some()
            || self.capacity.min > 0
            || self.capacity.max < max_capacity
    }

    fn text_active(&self) -> bool {
        !self.query.trim().is_empty()
    }
}

fn is_any(label: &str) -> bool {
    let label = label.trim();
    ANY_SELECTION.iter().any(|s| s.eq_ignore_ascii_case(label))
}

/// Case-insensitive substring match on name or area label. An all-blank
/// query matches everything.
#[must_use]
pub fn matches_text(venue: &Venue, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    venue.name.to_lowercase().contains(&needle)
        || venue.area.label().to_lowercase().contains(&needle)
}

/// Exact area match, or `true` when no area is selected.
#[must_use]
pub fn matches_area(venue: &Venue, area: Option<Area>) -> bool {
    area.is_none_or(|area| venue.area == area)
}

/// Budget overlap, or `true` when no bracket is selected.
#[must_use]
pub fn matches_budget(venue: &Venue, budget: Option<&BudgetBracket>) -> bool {
    budget.is_none_or(|bracket| bracket.overlaps(&venue.price_range))
}

/// Capacity containment.
#[must_use]
pub fn matches_capacity(venue: &Venue, range: CapacityRange) -> bool {
    range.contains(venue.capacity)
}

/// Availability of `session` on `date` in an effective map, or `true`
/// when no date is selected.
#[must_use]
pub fn matches_date(
    effective: &AvailabilityMap,
    date: Option<NaiveDate>,
    session: Session,
) -> bool {
    date.is_none_or(|date| is_available(effective, date, session))
}

/// Returns the venues that satisfy every active predicate in `criteria`,
/// in input order.
///
/// `effective` supplies a venue's merged availability and is only called
/// when a date is selected.
pub fn filter_venues<'a, F>(
    venues: &'a [Venue],
    criteria: &FilterCriteria,
    mut effective: F,
) -> Vec<&'a Venue>
where
    F: FnMut(&Venue) -> AvailabilityMap,
{
    if criteria.capacity.is_inverted() {
        tracing::debug!(
            min = criteria.capacity.min,
            max = criteria.capacity.max,
            "inverted capacity range matches nothing"
        );
        return Vec::new();
    }

    venues
        .iter()
        .filter(|&venue| {
            matches_text(venue, &criteria.query)
                && matches_area(venue, criteria.area)
                && matches_budget(venue, criteria.budget.as_ref())
                && matches_capacity(venue, criteria.capacity)
                && (criteria.date.is_none()
                    || matches_date(&effective(venue), criteria.date, criteria.session))
        })
        .collect()
}
