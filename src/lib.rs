//! # venue-catalog
//!
//! Event venue catalog core: searchable, filterable venue listings with
//! per-date, per-session (day/night) availability that venue owners can
//! override on the local device.
//!
//! Catalog data is static. Owner edits are kept in a local key-value store
//! and layered onto each venue's authored baseline whenever availability is
//! read, so the catalog itself is never mutated.
//!
//! ## Architecture
//!
//! ```text
//! Presentation layer (out of crate)
//!     │
//!     ├── VenueService (service/)
//!     │     ├── filter engine (domain/filter)
//!     │     └── EventBus ──► VenueSubscription (domain/)
//!     │
//!     ├── VenueCatalog (domain/)          baseline availability
//!     │
//!     └── AvailabilityStore (persistence/) owner overrides
//!           └── KeyValueBackend: FileBackend | MemoryBackend
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
