//! Catalog error types with numeric code mapping.
//!
//! [`CatalogError`] is the central error type for the crate. Storage
//! failures never appear here: they are absorbed at the
//! [`crate::persistence::AvailabilityStore`] boundary.

use crate::domain::VenueId;

/// Error enum surfaced to callers of the catalog and service layers.
///
/// # Error Code Ranges
///
/// | Range     | Category   |
/// |-----------|------------|
/// | 1000–1999 | Validation |
/// | 2000–2999 | Not Found  |
/// | 3000–3999 | Server     |
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Venue with the given ID is not in the catalog.
    #[error("venue not found: {0}")]
    VenueNotFound(VenueId),

    /// A venue record violates a catalog invariant.
    #[error("invalid venue: {0}")]
    InvalidVenue(String),

    /// Two catalog records share the same ID.
    #[error("duplicate venue id: {0}")]
    DuplicateVenue(VenueId),

    /// A date string is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// No budget bracket carries the given label.
    #[error("unknown budget bracket: {0}")]
    UnknownBudget(String),

    /// No area carries the given label.
    #[error("unknown area: {0}")]
    UnknownArea(String),

    /// Session string is neither `day` nor `night`.
    #[error("unknown session: {0}")]
    UnknownSession(String),

    /// Seed data could not be read or parsed.
    #[error("catalog load failed: {0}")]
    CatalogLoad(String),
}

impl CatalogError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidVenue(_) => 1001,
            Self::DuplicateVenue(_) => 1002,
            Self::InvalidDate(_) => 1003,
            Self::UnknownBudget(_) => 1005,
            Self::UnknownArea(_) => 1006,
            Self::UnknownSession(_) => 1007,
            Self::VenueNotFound(_) => 2001,
            Self::CatalogLoad(_) => 3001,
        }
    }

    /// Returns `true` for lookups that matched no catalog entry.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::VenueNotFound(_))
    }
}
