//! Catalog configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`), each with a default.

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use crate::domain::VenueCatalog;
use crate::error::CatalogError;
use crate::persistence::{DEFAULT_STORE_KEY, FileBackend, KeyValueBackend, MemoryBackend};

/// Top-level configuration.
///
/// Loaded once at startup via [`CatalogConfig::from_env`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Directory of the file-backed override store.
    pub store_dir: PathBuf,

    /// Namespace key the override map is stored under.
    pub store_key: String,

    /// Master switch for durable overrides. When off, overrides live in
    /// memory and vanish with the process.
    pub persistence_enabled: bool,

    /// Optional JSON seed file replacing the built-in catalog.
    pub catalog_path: Option<PathBuf>,

    /// Capacity of the EventBus broadcast channel.
    pub event_bus_capacity: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            store_dir: PathBuf::from("./.venue-catalog"),
            store_key: DEFAULT_STORE_KEY.to_string(),
            persistence_enabled: true,
            catalog_path: None,
            event_bus_capacity: 1024,
        }
    }
}

impl CatalogConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to [`CatalogConfig::default`] values for unset, blank or
    /// unparsable variables. Calls `dotenvy::dotenv().ok()` to optionally
    /// load a `.env` file.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable source.
    ///
    /// `lookup` maps a variable name to its raw value. Blank values count
    /// as unset.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let store_dir = var("STORE_DIR").map_or(defaults.store_dir, PathBuf::from);
        let store_key = var("STORE_KEY").unwrap_or(defaults.store_key);
        let persistence_enabled =
            parse_bool_or(var("PERSISTENCE_ENABLED"), defaults.persistence_enabled);
        let catalog_path = var("CATALOG_PATH").map(PathBuf::from);
        let event_bus_capacity =
            parse_or(var("EVENT_BUS_CAPACITY"), defaults.event_bus_capacity);

        Self {
            store_dir,
            store_key,
            persistence_enabled,
            catalog_path,
            event_bus_capacity,
        }
    }

    /// Builds the configured storage backend.
    #[must_use]
    pub fn backend(&self) -> Arc<dyn KeyValueBackend> {
        if self.persistence_enabled {
            Arc::new(FileBackend::new(self.store_dir.clone()))
        } else {
            Arc::new(MemoryBackend::new())
        }
    }

    /// Loads the configured catalog: the seed file if set, the built-in
    /// seed otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CatalogLoad`] or a validation error if the
    /// catalog cannot be built.
    pub fn load_catalog(&self) -> Result<VenueCatalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => VenueCatalog::load(path),
            None => VenueCatalog::seeded(),
        }
    }
}

/// Parses `raw` as `T`, returning `default` on missing or invalid values.
fn parse_or<T: FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

/// Parses `raw` as a boolean. Accepts `"true"`, `"1"`, `"false"`, `"0"`
/// (case-insensitive). Returns `default` otherwise.
fn parse_bool_or(raw: Option<String>, default: bool) -> bool {
    match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("true" | "1") => true,
        Some("false" | "0") => false,
        _ => default,
    }
}
