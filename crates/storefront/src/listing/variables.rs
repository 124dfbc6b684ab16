//! Query variables for the listing page and their merge rules.

use catalog_page_core::{Cursor, PageSize, ProductTypeFilter};

/// Variables of the product query (`$numProducts`, `$cursor`, `$query`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ProductVariables {
    pub num_products: PageSize,
    /// `None` starts at the beginning of the list.
    pub cursor: Option<Cursor>,
    pub query: ProductTypeFilter,
}

/// Partial override for [`ProductVariables`].
///
/// Fields left as `None` keep their current value when merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductVariablesPatch {
    pub num_products: Option<PageSize>,
    pub cursor: Option<Option<Cursor>>,
    pub query: Option<ProductTypeFilter>,
}

impl ProductVariablesPatch {
    /// Patch that only replaces the product type filter.
    #[must_use]
    pub fn query(filter: ProductTypeFilter) -> Self {
        Self {
            query: Some(filter),
            ..Self::default()
        }
    }

    /// Patch that only replaces the page size.
    #[must_use]
    pub fn num_products(size: PageSize) -> Self {
        Self {
            num_products: Some(size),
            ..Self::default()
        }
    }
}

impl ProductVariables {
    /// Merge a patch into these variables.
    pub fn merge(&mut self, patch: ProductVariablesPatch) {
        if let Some(size) = patch.num_products {
            self.num_products = size;
        }
        if let Some(cursor) = patch.cursor {
            self.cursor = cursor;
        }
        if let Some(query) = patch.query {
            self.query = query;
        }
    }
}

/// Variables of the product type query (`$numProducts`).
///
/// The product type query ignores the cursor and filter, so changing those
/// never triggers a product type fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ProductTypeVariables {
    pub num_products: PageSize,
}

impl From<&ProductVariables> for ProductTypeVariables {
    fn from(variables: &ProductVariables) -> Self {
        Self {
            num_products: variables.num_products,
        }
    }
}
