//! Service layer: the consumer-facing catalog API.
//!
//! [`VenueService`] resolves venues in the catalog, layers stored
//! overrides onto their baselines, runs the filter engine, and emits
//! events through the [`super::domain::EventBus`] on owner edits.

pub mod venue_service;

pub use venue_service::VenueService;
