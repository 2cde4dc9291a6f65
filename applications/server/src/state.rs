/// Shared application state
use melo_core::CatalogStore;
use melo_discovery::{Discovery, DiscoveryConfig};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub discovery: Arc<Discovery>,
}

impl AppState {
    pub fn new(discovery: Discovery) -> Self {
        Self {
            discovery: Arc::new(discovery),
        }
    }

    /// State backed by `catalog` with the given discovery settings
    pub fn from_catalog(catalog: Arc<dyn CatalogStore>, config: DiscoveryConfig) -> Self {
        Self::new(Discovery::new(catalog, config))
    }
}
