//! Persistence layer: the local-device override store.
//!
//! Provides the [`KeyValueBackend`] capability (file-backed or in-memory)
//! and the [`AvailabilityStore`] that keeps owner overrides as one JSON
//! blob under a namespace key and merges them onto catalog baselines.

pub mod backend;
pub mod file;
pub mod memory;
pub mod models;
pub mod store;

pub use backend::{KeyValueBackend, StoreError};
pub use file::FileBackend;
pub use memory::MemoryBackend;
pub use models::OverrideMap;
pub use store::{AvailabilityStore, DEFAULT_STORE_KEY};
