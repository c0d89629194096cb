//! Store factory: turns the configured store location into a gateway handle

use reviews_config::{PathManager, StoreConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::error::StoreError;
use crate::store::{JsonFileStore, MemoryStore};
use crate::traits::ReviewStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    /// Root directory of a JSON-file store
    Directory(PathBuf),
    Memory,
}

impl StoreLocation {
    /// Parse `memory://`, `file:///dir`, or a bare directory path
    pub fn parse(uri: &str) -> Result<Self, StoreError> {
        let uri = uri.trim();
        if uri.is_empty() {
            return Err(StoreError::UnsupportedLocation("empty store uri".to_string()));
        }

        match uri.split_once("://") {
            Some(("memory", _)) => Ok(StoreLocation::Memory),
            Some(("file", path)) if !path.is_empty() => Ok(StoreLocation::Directory(PathBuf::from(path))),
            Some(_) => Err(StoreError::UnsupportedLocation(uri.to_string())),
            None => Ok(StoreLocation::Directory(PathBuf::from(uri))),
        }
    }

    /// Configured location, or the JSON-file store under the data directory
    pub fn from_config(config: &StoreConfig, paths: &PathManager) -> Result<Self, StoreError> {
        match &config.uri {
            Some(uri) => Self::parse(uri),
            None => Ok(StoreLocation::Directory(paths.store_dir())),
        }
    }
}

/// Open the gateway described by the store configuration.
///
/// Nothing is read here; the JSON-file store opens its collection on first use.
pub fn open_store(config: &StoreConfig, paths: &PathManager) -> Result<Arc<dyn ReviewStore>, StoreError> {
    let location = StoreLocation::from_config(config, paths)?;
    open_location(&location, config)
}

pub fn open_location(location: &StoreLocation, config: &StoreConfig) -> Result<Arc<dyn ReviewStore>, StoreError> {
    match location {
        StoreLocation::Memory => {
            info!(operation = "store_configured", store = "memory", "Using in-memory review store");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreLocation::Directory(root) => {
            let store = JsonFileStore::new(root, &config.database, &config.collection);
            info!(
                operation = "store_configured",
                store = "json-file",
                path = %store.path().display(),
                "Using JSON file review store"
            );
            Ok(Arc::new(store))
        }
    }
}
