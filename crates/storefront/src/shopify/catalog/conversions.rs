//! Conversions from tolerant wire types into catalog domain types.
//!
//! Every edge Shopify returns is kept, in order. A `null` edge or node
//! becomes an empty product, and any other missing field (the cursor
//! included) is replaced with an empty default.

use catalog_page_core::Cursor;

use crate::shopify::types::{
    Image, Money, PageInfo, PriceRange, Product, ProductConnection, ProductEdge,
    ProductTypeConnection, ProductTypeEdge,
};

use super::queries::{get_product_types, get_products};

fn convert_page_info(page_info: Option<get_products::PageInfo>) -> PageInfo {
    PageInfo {
        has_next_page: page_info
            .and_then(|p| p.has_next_page)
            .unwrap_or_default(),
    }
}

// =============================================================================
// get_products conversions
// =============================================================================

pub fn convert_product_connection(data: get_products::ResponseData) -> ProductConnection {
    let Some(conn) = data.products else {
        return ProductConnection::default();
    };

    ProductConnection {
        edges: conn
            .edges
            .unwrap_or_default()
            .into_iter()
            .map(|edge| edge.map(convert_product_edge).unwrap_or_default())
            .collect(),
        page_info: convert_page_info(conn.page_info),
    }
}

fn convert_product_edge(edge: get_products::GetProductsProductsEdges) -> ProductEdge {
    ProductEdge {
        cursor: Cursor::new(edge.cursor.unwrap_or_default()),
        node: edge.node.map(convert_product).unwrap_or_default(),
    }
}

fn convert_product(node: get_products::GetProductsProductsEdgesNode) -> Product {
    Product {
        title: node.title.unwrap_or_default(),
        product_type: node.product_type,
        featured_image: node.featured_image.map(|i| Image {
            url: i.url,
            alt_text: i.alt_text,
        }),
        price_range: PriceRange {
            max_variant_price: Money {
                amount: node
                    .price_range_v2
                    .and_then(|p| p.max_variant_price)
                    .and_then(|m| m.amount)
                    .unwrap_or_default(),
            },
        },
    }
}

// =============================================================================
// get_product_types conversions
// =============================================================================

pub fn convert_product_type_connection(
    data: get_product_types::ResponseData,
) -> ProductTypeConnection {
    let Some(conn) = data.shop.and_then(|shop| shop.product_types) else {
        return ProductTypeConnection::default();
    };

    ProductTypeConnection {
        edges: conn
            .edges
            .unwrap_or_default()
            .into_iter()
            .map(|edge| {
                edge.map(|edge| ProductTypeEdge {
                    cursor: Cursor::new(edge.cursor.unwrap_or_default()),
                    node: edge.node.unwrap_or_default(),
                })
                .unwrap_or_default()
            })
            .collect(),
        page_info: convert_page_info(conn.page_info),
    }
}
