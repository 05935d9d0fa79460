//! Fail-soft availability override store.
//!
//! [`AvailabilityStore`] owns the [`OverrideMap`] blob kept under one
//! namespace key in a [`KeyValueBackend`]. Backend failures and corrupt
//! data are logged and degraded here: reads fall back to an empty map and
//! failed writes are dropped. Callers never see a [`StoreError`].

use std::sync::{Arc, Mutex, PoisonError};

use chrono::NaiveDate;

use super::backend::{KeyValueBackend, StoreError};
use super::models::OverrideMap;
use crate::domain::{AvailabilityMap, Session, VenueId, is_available};

/// Namespace key the override map is stored under.
pub const DEFAULT_STORE_KEY: &str = "venue-availability";

/// Process-wide handle to the persisted owner overrides.
///
/// # Concurrency
///
/// Each write is a read-modify-write of the whole blob. A store-wide mutex
/// serializes writes, toggles and clears so concurrent edits cannot lose
/// each other's cells. Reads do not take the mutex.
#[derive(Debug)]
pub struct AvailabilityStore {
    backend: Arc<dyn KeyValueBackend>,
    key: String,
    writes: Mutex<()>,
}

impl AvailabilityStore {
    /// Creates a store using [`DEFAULT_STORE_KEY`].
    #[must_use]
    pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self::with_key(backend, DEFAULT_STORE_KEY)
    }

    /// Creates a store under a custom namespace key.
    #[must_use]
    pub fn with_key(backend: Arc<dyn KeyValueBackend>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            writes: Mutex::new(()),
        }
    }

    /// Namespace key in use.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads every venue's overrides.
    ///
    /// Returns an empty map when nothing is stored, the backend fails, or
    /// the stored JSON is malformed.
    #[must_use]
    pub fn read_overrides(&self) -> OverrideMap {
        match self.try_read() {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!(
                    key = %self.key,
                    error = %e,
                    "override read failed; treating store as empty"
                );
                OverrideMap::new()
            }
        }
    }

    /// Sets one (date, session) cell for a venue and persists the result.
    ///
    /// Idempotent. A failed write is logged and dropped.
    pub fn write_override(
        &self,
        venue_id: &VenueId,
        date: NaiveDate,
        session: Session,
        available: bool,
    ) {
        self.update_cell(venue_id, date, session, |_| available);
    }

    /// Flips the effective state of one cell and persists it, returning the
    /// new value.
    ///
    /// `baseline` is the venue's authored availability; the current state is
    /// read from it merged with the stored overrides. Reading and writing
    /// happen under the write mutex, so concurrent toggles of one cell each
    /// take effect.
    pub fn toggle_override(
        &self,
        venue_id: &VenueId,
        date: NaiveDate,
        session: Session,
        baseline: &AvailabilityMap,
    ) -> bool {
        self.update_cell(venue_id, date, session, |map| {
            let effective = map.effective_for(venue_id.as_str(), baseline);
            !is_available(&effective, date, session)
        })
    }

    /// Baseline merged with the venue's stored overrides.
    #[must_use]
    pub fn effective_availability(
        &self,
        venue_id: &str,
        baseline: &AvailabilityMap,
    ) -> AvailabilityMap {
        self.read_overrides().effective_for(venue_id, baseline)
    }

    /// Deletes every stored override. A failed delete is logged and dropped.
    pub fn clear(&self) {
        let _guard = self.writes.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = self.backend.remove(&self.key) {
            tracing::warn!(key = %self.key, error = %e, "override clear dropped");
        }
    }

    fn update_cell<F>(
        &self,
        venue_id: &VenueId,
        date: NaiveDate,
        session: Session,
        decide: F,
    ) -> bool
    where
        F: FnOnce(&OverrideMap) -> bool,
    {
        let _guard = self.writes.lock().unwrap_or_else(PoisonError::into_inner);
        let mut map = self.read_overrides();
        let available = decide(&map);
        map.set_cell(venue_id, date, session, available);
        match self.try_write(&map) {
            Ok(()) => {
                tracing::debug!(%venue_id, %date, %session, available, "override stored");
            }
            Err(e) => {
                tracing::warn!(%venue_id, %date, %session, error = %e, "override write dropped");
            }
        }
        available
    }

    fn try_read(&self) -> Result<OverrideMap, StoreError> {
        match self.backend.get(&self.key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(OverrideMap::new()),
        }
    }

    fn try_write(&self, map: &OverrideMap) -> Result<(), StoreError> {
        let raw = serde_json::to_string(map)?;
        self.backend.set(&self.key, &raw)
    }
}
