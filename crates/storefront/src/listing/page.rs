//! A single product listing page view.
//!
//! A view owns the product query variables and both fetch adapters. The
//! product type adapter's variables are derived from the product variables,
//! so only page size changes reach it.

use std::sync::Arc;

use catalog_page_core::PageSize;
use tracing::{debug, instrument};
use uuid::Uuid;

use super::adapter::{ProductTypesQuery, ProductsQuery, QueryAdapter, QueryResult};
use super::grid::{ProductCard, product_cards};
use super::navigation::{NavAction, NavItem, build_navigation};
use super::source::CatalogSource;
use super::variables::{ProductTypeVariables, ProductVariables, ProductVariablesPatch};

/// Everything the page template needs.
#[derive(Debug, Clone)]
pub struct ListingView {
    pub navigation: Vec<NavItem>,
    pub cards: Vec<ProductCard>,
    /// Products are being fetched and none have arrived yet.
    pub loading: bool,
}

/// One shopper's listing page.
pub struct ListingPage<S> {
    id: Uuid,
    placeholder_image_url: String,
    products: QueryAdapter<ProductsQuery, S>,
    product_types: QueryAdapter<ProductTypesQuery, S>,
}

impl<S: CatalogSource> ListingPage<S> {
    /// Create an unmounted view. Nothing is fetched until [`Self::mount`].
    #[must_use]
    pub fn new(
        id: Uuid,
        source: Arc<S>,
        variables: ProductVariables,
        placeholder_image_url: impl Into<String>,
    ) -> Self {
        let type_variables = ProductTypeVariables::from(&variables);
        Self {
            id,
            placeholder_image_url: placeholder_image_url.into(),
            products: QueryAdapter::new(Arc::clone(&source), variables),
            product_types: QueryAdapter::new(source, type_variables),
        }
    }

    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Fetch both queries concurrently if they have not been fetched yet.
    #[instrument(skip(self), fields(view_id = %self.id))]
    pub async fn mount(&self) -> ListingView {
        let (products, product_types) =
            tokio::join!(self.products.load(), self.product_types.load());
        self.render(&products, &product_types)
    }

    /// Current view without fetching.
    pub async fn view(&self) -> ListingView {
        let (products, product_types) =
            tokio::join!(self.products.snapshot(), self.product_types.snapshot());
        self.render(&products, &product_types)
    }

    async fn navigation(&self) -> Vec<NavItem> {
        let (products, product_types) =
            tokio::join!(self.products.snapshot(), self.product_types.snapshot());
        build_navigation(product_types.data.as_deref(), &products.variables.query)
    }

    /// Run the navigation entry at `index` and return it with the new view.
    ///
    /// Returns `None` if no entry exists at that position.
    #[instrument(skip(self), fields(view_id = %self.id))]
    pub async fn activate(&self, index: usize) -> Option<(NavItem, ListingView)> {
        let item = self.navigation().await.into_iter().nth(index)?;
        debug!(label = %item.label, "Navigation entry activated");
        let view = self.dispatch(&item.action).await;
        Some((item, view))
    }

    /// Apply a navigation action.
    pub async fn dispatch(&self, action: &NavAction) -> ListingView {
        self.refetch_products(action.patch()).await
    }

    /// Change the number of products per page. Refetches both queries.
    #[instrument(skip(self), fields(view_id = %self.id))]
    pub async fn set_page_size(&self, size: PageSize) -> ListingView {
        self.refetch_products(ProductVariablesPatch::num_products(size))
            .await
    }

    async fn refetch_products(&self, patch: ProductVariablesPatch) -> ListingView {
        let products = self.products.refetch(patch).await;
        let product_types = self
            .product_types
            .set_variables(ProductTypeVariables::from(&products.variables))
            .await;
        self.render(&products, &product_types)
    }

    fn render(
        &self,
        products: &QueryResult<ProductsQuery>,
        product_types: &QueryResult<ProductTypesQuery>,
    ) -> ListingView {
        ListingView {
            navigation: build_navigation(
                product_types.data.as_deref(),
                &products.variables.query,
            ),
            cards: product_cards(products.data.as_deref(), &self.placeholder_image_url),
            loading: products.loading() && products.data.is_none(),
        }
    }
}
