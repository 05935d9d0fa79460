//! Domain layer: venue records, availability model, filters, and events.
//!
//! This module contains the catalog data model (venues, areas, price
//! ranges, budget brackets), the open-world availability map with its
//! baseline/override merge, the filter engine, and the event bus used to
//! announce owner edits.

pub mod area;
pub mod availability;
pub mod availability_event;
pub mod catalog;
pub mod event_bus;
pub mod filter;
pub mod price;
pub mod session;
pub mod subscription;
pub mod venue;
pub mod venue_id;

pub use area::Area;
pub use availability::{
    AvailabilityMap, DATE_FORMAT, DayRecord, is_available, merge_overrides, parse_date,
};
pub use availability_event::AvailabilityEvent;
pub use catalog::VenueCatalog;
pub use event_bus::EventBus;
pub use filter::{CapacityRange, FilterCriteria, filter_venues};
pub use price::{BUDGET_BRACKETS, BudgetBracket, PriceRange};
pub use session::Session;
pub use subscription::VenueSubscription;
pub use venue::{Facilities, Venue};
pub use venue_id::VenueId;
