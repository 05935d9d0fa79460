//! Type-safe venue identifier.
//!
//! [`VenueId`] is a newtype wrapper around the catalog's string ID so that
//! venue identifiers cannot be confused with other strings (names, labels,
//! date keys).

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier of a venue.
///
/// Authored in the seed data and immutable thereafter. Used as the key in
/// [`super::VenueCatalog`]'s index, in the persisted override map, and as
/// the event discriminator on the [`super::EventBus`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VenueId(String);

impl VenueId {
    /// Creates a `VenueId` from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the ID is empty or only whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for VenueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VenueId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for VenueId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for VenueId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
