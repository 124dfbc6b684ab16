//! Boundary between the listing page and the data-fetch layer.

use std::future::Future;

use crate::shopify::{CatalogClient, ProductConnection, ProductTypeConnection, ShopifyError};

use super::variables::{ProductTypeVariables, ProductVariables};

/// Read access to the catalog.
///
/// Caching, retries and transport belong to the implementation; the
/// listing page only sees `variables -> Result<data>`.
pub trait CatalogSource: Send + Sync + 'static {
    /// Fetch one page of products.
    fn products(
        &self,
        variables: &ProductVariables,
    ) -> impl Future<Output = Result<ProductConnection, ShopifyError>> + Send;

    /// Fetch the product type names.
    fn product_types(
        &self,
        variables: &ProductTypeVariables,
    ) -> impl Future<Output = Result<ProductTypeConnection, ShopifyError>> + Send;
}

impl CatalogSource for CatalogClient {
    async fn products(
        &self,
        variables: &ProductVariables,
    ) -> Result<ProductConnection, ShopifyError> {
        self.get_products(
            variables.num_products,
            variables.cursor.as_ref(),
            &variables.query,
        )
        .await
    }

    async fn product_types(
        &self,
        variables: &ProductTypeVariables,
    ) -> Result<ProductTypeConnection, ShopifyError> {
        self.get_product_types(variables.num_products).await
    }
}
