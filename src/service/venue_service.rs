//! Venue service: the interface the presentation layer talks to.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::domain::{
    AvailabilityEvent, AvailabilityMap, EventBus, FilterCriteria, Session, Venue, VenueCatalog,
    filter_venues,
};
use crate::error::CatalogError;
use crate::persistence::{AvailabilityStore, OverrideMap};

/// Orchestration layer over the catalog, the override store and the
/// event bus.
///
/// Cheap to clone; all state sits behind shared handles. Every mutation
/// follows the pattern: resolve venue → write store → emit event.
#[derive(Debug, Clone)]
pub struct VenueService {
    catalog: Arc<VenueCatalog>,
    store: Arc<AvailabilityStore>,
    event_bus: EventBus,
}

impl VenueService {
    /// Creates a new `VenueService`.
    #[must_use]
    pub fn new(
        catalog: Arc<VenueCatalog>,
        store: Arc<AvailabilityStore>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            catalog,
            store,
            event_bus,
        }
    }

    /// Returns a reference to the inner [`EventBus`].
    #[must_use]
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Returns a reference to the inner [`VenueCatalog`].
    #[must_use]
    pub fn catalog(&self) -> &Arc<VenueCatalog> {
        &self.catalog
    }

    /// Returns a reference to the inner [`AvailabilityStore`].
    #[must_use]
    pub fn store(&self) -> &Arc<AvailabilityStore> {
        &self.store
    }

    /// All venues with their baseline availability, in catalog order.
    #[must_use]
    pub fn list_venues(&self) -> &[Venue] {
        self.catalog.list_venues()
    }

    /// A venue carrying its effective availability.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::VenueNotFound`] for an unknown ID.
    pub fn get_effective_venue(&self, venue_id: &str) -> Result<Venue, CatalogError> {
        let venue = self.catalog.get_venue(venue_id)?;
        let effective = self.effective_for(venue);
        Ok(venue.with_availability(effective))
    }

    /// Effective availability of one venue.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::VenueNotFound`] for an unknown ID.
    pub fn effective_availability(&self, venue_id: &str) -> Result<AvailabilityMap, CatalogError> {
        let venue = self.catalog.get_venue(venue_id)?;
        Ok(self.effective_for(venue))
    }

    /// Venues matching `criteria`, in catalog order, each carrying its
    /// effective availability.
    ///
    /// Never fails: unmatched or contradictory criteria yield an empty list.
    #[must_use]
    pub fn filter_venues(&self, criteria: &FilterCriteria) -> Vec<Venue> {
        let overrides = self.store.read_overrides();
        let venues = self.catalog.list_venues();
        let matched = filter_venues(venues, criteria, |venue| effective(&overrides, venue));
        tracing::debug!(
            matched = matched.len(),
            total = self.catalog.len(),
            query = %criteria.query,
            "venues filtered"
        );
        matched
            .into_iter()
            .map(|v| v.with_availability(effective(&overrides, v)))
            .collect()
    }

    /// Owner edit: marks one (date, session) cell of a venue available or
    /// booked.
    ///
    /// The change event is published once the edit is accepted, even if the
    /// store drops the write.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::VenueNotFound`] for an unknown ID. Storage
    /// failures are absorbed by the store and not reported.
    pub fn set_availability(
        &self,
        venue_id: &str,
        date: NaiveDate,
        session: Session,
        available: bool,
    ) -> Result<(), CatalogError> {
        let venue = self.catalog.get_venue(venue_id)?;
        self.store.write_override(&venue.id, date, session, available);
        self.publish_change(venue, date, session, available);
        Ok(())
    }

    /// Owner edit: flips the effective state of one cell and returns the
    /// new value.
    ///
    /// The store performs the read and the write under its write mutex.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::VenueNotFound`] for an unknown ID.
    pub fn toggle_availability(
        &self,
        venue_id: &str,
        date: NaiveDate,
        session: Session,
    ) -> Result<bool, CatalogError> {
        let venue = self.catalog.get_venue(venue_id)?;
        let available = self
            .store
            .toggle_override(&venue.id, date, session, &venue.availability);
        self.publish_change(venue, date, session, available);
        Ok(available)
    }

    /// Discards every owner override.
    pub fn reset_availability(&self) {
        self.store.clear();
        tracing::info!("availability overrides reset");
        let _ = self.event_bus.publish(AvailabilityEvent::AvailabilityReset {
            timestamp: Utc::now(),
        });
    }

    fn effective_for(&self, venue: &Venue) -> AvailabilityMap {
        effective(&self.store.read_overrides(), venue)
    }

    fn publish_change(&self, venue: &Venue, date: NaiveDate, session: Session, available: bool) {
        tracing::info!(venue_id = %venue.id, %date, %session, available, "availability updated");
        let _ = self.event_bus.publish(AvailabilityEvent::AvailabilityChanged {
            venue_id: venue.id.clone(),
            date,
            session,
            available,
            timestamp: Utc::now(),
        });
    }
}

fn effective(overrides: &OverrideMap, venue: &Venue) -> AvailabilityMap {
    overrides.effective_for(venue.id.as_str(), &venue.availability)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{Area, BudgetBracket, DayRecord, VenueId, parse_date};
    use crate::persistence::{KeyValueBackend, MemoryBackend};

    fn date(raw: &str) -> NaiveDate {
        let Ok(date) = parse_date(raw) else {
            panic!("bad test date {raw}");
        };
        date
    }

    fn make_service() -> (Arc<MemoryBackend>, VenueService) {
        let Ok(catalog) = VenueCatalog::seeded() else {
            panic!("seed must load");
        };
        let backend = Arc::new(MemoryBackend::new());
        let store = AvailabilityStore::new(Arc::clone(&backend) as Arc<dyn KeyValueBackend>);
        let service = VenueService::new(Arc::new(catalog), Arc::new(store), EventBus::new(64));
        (backend, service)
    }

    fn ids(venues: &[Venue]) -> Vec<String> {
        venues.iter().map(|v| v.id.to_string()).collect()
    }

    fn set(service: &VenueService, venue_id: &str, d: NaiveDate, session: Session, open: bool) {
        let result = service.set_availability(venue_id, d, session, open);
        assert!(result.is_ok(), "set_availability({venue_id}) failed");
    }

    #[test]
    fn list_venues_returns_catalog_order() {
        let (_, service) = make_service();
        assert_eq!(ids(service.list_venues()), ["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn get_effective_venue_unknown_id_is_not_found() {
        let (_, service) = make_service();
        let Err(err) = service.get_effective_venue("missing") else {
            panic!("expected not found");
        };
        assert!(err.is_not_found());
    }

    #[test]
    fn get_effective_venue_without_overrides_is_baseline() {
        let (_, service) = make_service();
        let Ok(venue) = service.get_effective_venue("1") else {
            panic!("venue 1 exists");
        };
        assert_eq!(
            venue.availability.get(date("2025-01-15")),
            Some(&DayRecord::new(true, false))
        );
    }

    #[test]
    fn set_availability_is_reflected_and_emits_event() {
        let (_, service) = make_service();
        let mut rx = service.event_bus().subscribe();
        let d = date("2025-01-15");

        set(&service, "1", d, Session::Day, false);

        let Ok(venue) = service.get_effective_venue("1") else {
            panic!("venue 1 exists");
        };
        // The override record for the date was created fresh (night open),
        // and it replaces the baseline's booked night wholesale.
        assert_eq!(
            venue.availability.get(d),
            Some(&DayRecord::new(false, true))
        );

        let Ok(event) = rx.try_recv() else {
            panic!("expected event");
        };
        assert_eq!(event.event_type_str(), "availability_changed");
        assert_eq!(event.venue_id(), Some(&VenueId::from("1")));
    }

    #[test]
    fn set_availability_unknown_venue_writes_nothing() {
        let (_, service) = make_service();
        let mut rx = service.event_bus().subscribe();
        let result = service.set_availability("99", date("2025-01-15"), Session::Day, false);
        assert!(result.is_err());
        assert!(service.store().read_overrides().is_empty());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn dropped_write_still_publishes_change() {
        let (backend, service) = make_service();
        let mut rx = service.event_bus().subscribe();
        backend.set_failing(true);

        set(&service, "4", date("2025-03-03"), Session::Day, false);
        assert!(rx.try_recv().is_ok());

        backend.set_failing(false);
        assert!(service.store().read_overrides().is_empty());
    }

    #[test]
    fn toggle_flips_effective_state() {
        let (_, service) = make_service();
        let mut rx = service.event_bus().subscribe();
        let d = date("2025-01-17");

        // Venue 1 is fully booked on the 17th in the seed.
        let Ok(now_open) = service.toggle_availability("1", d, Session::Night) else {
            panic!("toggle failed");
        };
        assert!(now_open);

        let Ok(now_booked) = service.toggle_availability("1", d, Session::Night) else {
            panic!("toggle failed");
        };
        assert!(!now_booked);

        let Ok(AvailabilityEvent::AvailabilityChanged { available, .. }) = rx.try_recv() else {
            panic!("expected change event");
        };
        assert!(available);
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn toggle_unknown_venue_is_not_found() {
        let (_, service) = make_service();
        let result = service.toggle_availability("99", date("2025-01-17"), Session::Day);
        assert!(result.is_err_and(|e| e.is_not_found()));
        assert!(service.store().read_overrides().is_empty());
    }

    #[test]
    fn filter_by_date_and_session_uses_overrides() {
        let (_, service) = make_service();
        let d = date("2025-01-16");
        let criteria = FilterCriteria::new().on(d, Session::Day);

        let before = ids(&service.filter_venues(&criteria));
        // Seed: venues 2 and 6 are booked for the day on the 16th.
        assert_eq!(before, ["1", "3", "4", "5"]);

        set(&service, "3", d, Session::Day, false);
        set(&service, "6", d, Session::Day, true);

        let after = ids(&service.filter_venues(&criteria));
        assert_eq!(after, ["1", "4", "5", "6"]);
    }

    #[test]
    fn filter_results_carry_effective_availability() {
        let (_, service) = make_service();
        let d = date("2025-09-09");
        set(&service, "5", d, Session::Night, false);

        let criteria = FilterCriteria::new().with_area(Area::KarachiCentral);
        let result = service.filter_venues(&criteria);
        let Some(elite) = result.iter().find(|v| v.id.as_str() == "5") else {
            panic!("venue 5 is in Karachi Central");
        };
        assert!(!elite.availability.is_available(d, Session::Night));
    }

    #[test]
    fn filter_budget_overlap_on_seed() {
        let (_, service) = make_service();
        let Ok(bracket) = BudgetBracket::by_label("Under 2 Lac") else {
            panic!("known bracket");
        };
        let result = service.filter_venues(&FilterCriteria::new().with_budget(bracket));
        // Garden View (150k-300k), Sunset (200k-400k), Moonlight (180k-350k).
        assert_eq!(ids(&result), ["3", "4", "6"]);
    }

    #[test]
    fn filter_survives_storage_failure() {
        let (backend, service) = make_service();
        backend.set_failing(true);
        let criteria = FilterCriteria::new().on(date("2025-01-15"), Session::Day);
        let result = service.filter_venues(&criteria);
        // Seed: venues 3 and 5 are booked for the day on the 15th.
        assert_eq!(ids(&result), ["1", "2", "4", "6"]);
    }

    #[test]
    fn reset_discards_overrides_and_emits_event() {
        let (_, service) = make_service();
        let d = date("2025-01-15");
        set(&service, "2", d, Session::Night, false);

        let mut rx = service.event_bus().subscribe();
        service.reset_availability();

        assert!(service.store().read_overrides().is_empty());
        let Ok(venue) = service.get_effective_venue("2") else {
            panic!("venue 2 exists");
        };
        assert!(venue.availability.is_available(d, Session::Night));

        let Ok(event) = rx.try_recv() else {
            panic!("expected reset event");
        };
        assert_eq!(event.event_type_str(), "availability_reset");
    }
}
