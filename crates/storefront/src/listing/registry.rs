//! Live listing page views, keyed by view id.

use std::sync::Arc;

use catalog_page_core::{PageSize, ProductTypeFilter};
use moka::future::Cache;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::config::CatalogConfig;

use super::page::{ListingPage, ListingView};
use super::source::CatalogSource;
use super::variables::ProductVariables;

/// Maximum number of live views.
const VIEW_CAPACITY: u64 = 10_000;

/// Holds listing page views until they have been idle for the configured time.
pub struct ListingRegistry<S> {
    source: Arc<S>,
    views: Cache<Uuid, Arc<ListingPage<S>>>,
    page_size: PageSize,
    placeholder_image_url: String,
}

impl<S: CatalogSource> ListingRegistry<S> {
    /// Create a registry whose views read from `source`.
    #[must_use]
    pub fn new(source: Arc<S>, config: &CatalogConfig) -> Self {
        let views = Cache::builder()
            .max_capacity(VIEW_CAPACITY)
            .time_to_idle(config.view_idle_timeout)
            .build();

        Self {
            source,
            views,
            page_size: config.page_size,
            placeholder_image_url: config.placeholder_image_url.clone(),
        }
    }

    /// Create and mount a new view showing `filter`.
    #[instrument(skip(self, filter), fields(filter = %filter))]
    pub async fn open(&self, filter: ProductTypeFilter) -> (Arc<ListingPage<S>>, ListingView) {
        let id = Uuid::new_v4();
        let variables = ProductVariables {
            num_products: self.page_size,
            cursor: None,
            query: filter,
        };
        let page = Arc::new(ListingPage::new(
            id,
            Arc::clone(&self.source),
            variables,
            self.placeholder_image_url.clone(),
        ));

        let view = page.mount().await;
        self.views.insert(id, Arc::clone(&page)).await;
        debug!(view_id = %id, "View opened");

        (page, view)
    }

    /// Look up a live view.
    pub async fn get(&self, id: &Uuid) -> Option<Arc<ListingPage<S>>> {
        self.views.get(id).await
    }
}
