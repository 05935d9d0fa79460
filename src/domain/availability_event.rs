//! Domain events reflecting owner edits to availability.
//!
//! Every accepted edit through [`crate::service::VenueService`] emits an
//! [`AvailabilityEvent`] on the [`super::EventBus`] so views showing the
//! affected venue can recompute its effective availability. Storage is
//! best-effort: the event is published even if the store dropped the write.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::{Session, VenueId};

/// Domain event emitted after every accepted override edit or reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum AvailabilityEvent {
    /// One (date, session) cell of a venue was set.
    AvailabilityChanged {
        /// Venue whose override changed.
        venue_id: VenueId,
        /// Date of the cell.
        date: NaiveDate,
        /// Session of the cell.
        session: Session,
        /// New value; `false` means booked.
        available: bool,
        /// Time of the edit.
        timestamp: DateTime<Utc>,
    },

    /// All overrides were discarded.
    AvailabilityReset {
        /// Time of the reset.
        timestamp: DateTime<Utc>,
    },
}

impl AvailabilityEvent {
    /// Returns the affected venue, or `None` for store-wide events.
    #[must_use]
    pub fn venue_id(&self) -> Option<&VenueId> {
        match self {
            Self::AvailabilityChanged { venue_id, .. } => Some(venue_id),
            Self::AvailabilityReset { .. } => None,
        }
    }

    /// Returns the event type discriminator string.
    #[must_use]
    pub const fn event_type_str(&self) -> &'static str {
        match self {
            Self::AvailabilityChanged { .. } => "availability_changed",
            Self::AvailabilityReset { .. } => "availability_reset",
        }
    }
}
