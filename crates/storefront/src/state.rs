//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::listing::ListingRegistry;
use crate::shopify::CatalogClient;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the catalog client and the live listing views.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    catalog: Arc<CatalogClient>,
    views: ListingRegistry<CatalogClient>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        let catalog = Arc::new(CatalogClient::new(&config.shopify));
        let views = ListingRegistry::new(Arc::clone(&catalog), &config.catalog);

        Self {
            inner: Arc::new(AppStateInner { catalog, views }),
        }
    }

    /// Get a reference to the Shopify Admin API catalog client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    /// Get a reference to the live listing page views.
    #[must_use]
    pub fn views(&self) -> &ListingRegistry<CatalogClient> {
        &self.inner.views
    }
}
