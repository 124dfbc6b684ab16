//! Product cards for the listing grid.

use crate::shopify::{ProductConnection, ProductEdge};

/// Image shown for products without a featured image.
pub const DEFAULT_PLACEHOLDER_IMAGE_URL: &str =
    "https://dummyimage.com/200x200/666666/ffffff&text=Dummy+Image";

/// Display data for one product in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    /// Edge cursor, or `edge-<position>` for an edge without one.
    pub key: String,
    pub image_url: String,
    pub image_alt: String,
    pub title: String,
    /// `$` followed by the amount exactly as Shopify returned it.
    pub price: String,
}

impl ProductCard {
    fn from_edge(position: usize, edge: &ProductEdge, placeholder: &str) -> Self {
        let image = edge.node.featured_image.as_ref();

        let image_url = image
            .and_then(|img| img.url.as_deref())
            .filter(|url| !url.is_empty())
            .unwrap_or(placeholder)
            .to_string();

        let image_alt = image
            .and_then(|img| img.alt_text.clone())
            .unwrap_or_default();

        Self {
            key: match edge.cursor.as_str() {
                "" => format!("edge-{position}"),
                cursor => cursor.to_string(),
            },
            image_url,
            image_alt,
            title: edge.node.title.clone(),
            price: format!("${}", edge.node.price_range.max_variant_price.amount),
        }
    }
}

/// One card per product edge, in received order.
///
/// No products loaded yet yields no cards.
#[must_use]
pub fn product_cards(products: Option<&ProductConnection>, placeholder: &str) -> Vec<ProductCard> {
    products
        .map(|connection| {
            connection
                .edges
                .iter()
                .enumerate()
                .map(|(position, edge)| ProductCard::from_edge(position, edge, placeholder))
                .collect()
        })
        .unwrap_or_default()
}
