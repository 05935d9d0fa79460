//! Read-only venue catalog.
//!
//! [`VenueCatalog`] holds the seeded venue records in authored order and an
//! ID index for lookups. It is built once at startup and never mutated, so
//! it can be shared freely behind an `Arc` without locking.

use std::collections::HashMap;
use std::path::Path;

use super::{Area, Venue, VenueId};
use crate::error::CatalogError;

/// Seed catalog shipped with the crate.
const SEED_JSON: &str = include_str!("../../data/venues.json");

/// Lower bound for the capacity slider's upper end.
pub const MIN_CAPACITY_CEILING: u32 = 2000;

/// Immutable collection of venues.
///
/// Iteration order is the authored order; the filter engine preserves it.
#[derive(Debug, Clone, Default)]
pub struct VenueCatalog {
    venues: Vec<Venue>,
    index: HashMap<VenueId, usize>,
}

impl VenueCatalog {
    /// Builds a catalog from records, validating each one.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidVenue`] if any record fails
    /// [`Venue::validate`], or [`CatalogError::DuplicateVenue`] if two
    /// records share an ID.
    pub fn new(venues: Vec<Venue>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(venues.len());
        for (position, venue) in venues.iter().enumerate() {
            venue.validate()?;
            if index.insert(venue.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateVenue(venue.id.clone()));
            }
        }
        Ok(Self { venues, index })
    }

    /// Parses and validates a JSON array of venue records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CatalogLoad`] if the JSON does not match the
    /// venue shape (including malformed date keys), or any error from
    /// [`VenueCatalog::new`].
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let venues: Vec<Venue> = serde_json::from_str(raw)
            .map_err(|e| CatalogError::CatalogLoad(e.to_string()))?;
        Self::new(venues)
    }

    /// Reads a seed file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CatalogLoad`] if the file cannot be read, or
    /// any error from [`VenueCatalog::from_json`].
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                let reason = format!("{}: {e}", path.display());
                return Err(CatalogError::CatalogLoad(reason));
            }
        };
        let catalog = Self::from_json(&raw)?;
        tracing::info!(path = %path.display(), venues = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// The built-in seed catalog.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded seed data is invalid.
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::from_json(SEED_JSON)
    }

    /// All venues in authored order.
    #[must_use]
    pub fn list_venues(&self) -> &[Venue] {
        &self.venues
    }

    /// Looks up a venue by ID.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::VenueNotFound`] if no venue has this ID.
    pub fn get_venue(&self, id: &str) -> Result<&Venue, CatalogError> {
        self.index
            .get(id)
            .and_then(|&position| self.venues.get(position))
            .ok_or_else(|| CatalogError::VenueNotFound(VenueId::from(id)))
    }

    /// Returns `true` if a venue with this ID exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// The areas a visitor can filter by.
    #[must_use]
    pub const fn areas(&self) -> [Area; 3] {
        Area::ALL
    }

    /// Upper end of the default capacity range: the largest venue capacity,
    /// but never below [`MIN_CAPACITY_CEILING`].
    #[must_use]
    pub fn max_capacity(&self) -> u32 {
        self.venues
            .iter()
            .map(|v| v.capacity)
            .fold(MIN_CAPACITY_CEILING, u32::max)
    }

    /// Number of venues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.venues.len()
    }

    /// Returns `true` if the catalog has no venues.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }
}
