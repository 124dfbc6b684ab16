//! Cache types for catalog API responses.

use catalog_page_core::{Cursor, PageSize, ProductTypeFilter};

use crate::shopify::types::{ProductConnection, ProductTypeConnection};

/// Cache key for catalog reads, one per distinct variable set.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    Products {
        first: PageSize,
        after: Option<Cursor>,
        query: ProductTypeFilter,
    },
    ProductTypes {
        first: PageSize,
    },
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Products(ProductConnection),
    ProductTypes(ProductTypeConnection),
}
