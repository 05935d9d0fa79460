//! venue-catalog entry point.
//!
//! Builds the catalog, the override store and the service from the
//! environment, then logs a startup summary.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use venue_catalog::config::CatalogConfig;
use venue_catalog::domain::EventBus;
use venue_catalog::persistence::AvailabilityStore;
use venue_catalog::service::VenueService;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = CatalogConfig::from_env();
    tracing::info!(
        store_dir = %config.store_dir.display(),
        persistence = config.persistence_enabled,
        "starting venue-catalog"
    );

    // Build domain and persistence layers
    let catalog = Arc::new(config.load_catalog()?);
    let store = AvailabilityStore::with_key(config.backend(), config.store_key.clone());
    let event_bus = EventBus::new(config.event_bus_capacity);

    // Build service layer
    let service = VenueService::new(catalog, Arc::new(store), event_bus);

    let overrides = service.store().read_overrides();
    tracing::info!(
        venues = service.list_venues().len(),
        max_capacity = service.catalog().max_capacity(),
        overridden_venues = overrides.venue_count(),
        overridden_dates = overrides.date_count(),
        "catalog ready"
    );
    let venues = service.list_venues();
    for area in service.catalog().areas() {
        let count = venues.iter().filter(|v| v.area == area).count();
        tracing::info!(area = %area, venues = count, "area");
    }
    for venue in venues {
        tracing::info!(
            venue_id = %venue.id,
            name = %venue.name,
            area = %venue.area,
            capacity = venue.capacity,
            "venue"
        );
    }

    Ok(())
}
