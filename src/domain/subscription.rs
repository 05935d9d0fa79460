//! Per-view subscription filter.
//!
//! A view showing one or a few venues keeps a [`VenueSubscription`] and
//! drops bus events for venues it is not displaying.

use std::collections::HashSet;

use super::{AvailabilityEvent, VenueId};

/// Set of venues a subscriber cares about.
#[derive(Debug, Default)]
pub struct VenueSubscription {
    /// Watched venue IDs. Ignored while `watch_all` is set.
    venue_ids: HashSet<VenueId>,
    /// Whether every venue is watched (listing pages).
    watch_all: bool,
}

impl VenueSubscription {
    /// Creates an empty subscription.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a subscription matching every venue.
    #[must_use]
    pub fn all() -> Self {
        Self {
            venue_ids: HashSet::new(),
            watch_all: true,
        }
    }

    /// Adds venues to the watched set.
    pub fn watch<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = VenueId>,
    {
        self.venue_ids.extend(ids);
    }

    /// Removes venues from the watched set.
    pub fn unwatch(&mut self, ids: &[VenueId]) {
        for id in ids {
            self.venue_ids.remove(id);
        }
    }

    /// Returns `true` if `event` concerns a watched venue. Store-wide
    /// events always match.
    #[must_use]
    pub fn matches(&self, event: &AvailabilityEvent) -> bool {
        match event.venue_id() {
            None => true,
            Some(id) => self.watch_all || self.venue_ids.contains(id),
        }
    }

    /// Number of explicitly watched venues.
    #[must_use]
    pub fn count(&self) -> usize {
        self.venue_ids.len()
    }
}
