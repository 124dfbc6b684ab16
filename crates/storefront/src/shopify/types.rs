//! Domain types for the Shopify catalog queries.
//!
//! These types provide a clean, ergonomic API separate from the raw
//! wire types in `catalog::queries`. Every field the API may omit has
//! already been defaulted by the time a value of these types exists.

use catalog_page_core::Cursor;
use serde::{Deserialize, Serialize};

// =============================================================================
// Pagination Types
// =============================================================================

/// Pagination information for a connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Whether more items exist after this page.
    pub has_next_page: bool,
}

// =============================================================================
// Product Types
// =============================================================================

/// Monetary amount as returned by Shopify.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Decimal amount as string (preserves precision, rendered verbatim).
    pub amount: String,
}

/// Price range for a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Maximum price among all variants.
    pub max_variant_price: Money,
}

/// Product image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Image URL, if Shopify returned one.
    pub url: Option<String>,
    /// Alt text for accessibility.
    pub alt_text: Option<String>,
}

/// A product as shown on the listing page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product title.
    pub title: String,
    /// Product type (category), if set.
    pub product_type: Option<String>,
    /// Featured image.
    pub featured_image: Option<Image>,
    /// Price range across variants.
    pub price_range: PriceRange,
}

/// A product together with its pagination cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductEdge {
    /// Opaque cursor for this product's position.
    pub cursor: Cursor,
    /// The product.
    pub node: Product,
}

/// One page of products.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductConnection {
    /// Products in received order.
    pub edges: Vec<ProductEdge>,
    /// Pagination info.
    pub page_info: PageInfo,
}

// =============================================================================
// Product Type Types
// =============================================================================

/// A product type name together with its pagination cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductTypeEdge {
    /// Opaque cursor for this entry.
    pub cursor: Cursor,
    /// Product type name.
    pub node: String,
}

/// One page of product type names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductTypeConnection {
    /// Product types in received order.
    pub edges: Vec<ProductTypeEdge>,
    /// Pagination info.
    pub page_info: PageInfo,
}

impl ProductTypeConnection {
    /// Iterate over product type names in received order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.edges.iter().map(|edge| edge.node.as_str())
    }
}
