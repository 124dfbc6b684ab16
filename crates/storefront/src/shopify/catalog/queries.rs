//! GraphQL query definitions for the Shopify Admin API catalog reads.
//!
//! The query documents live in `graphql/admin/queries/`. Response types are
//! written by hand instead of generated so that every field decodes
//! tolerantly: a missing or `null` value becomes `None` rather than failing
//! the whole response. Conversions into domain types apply the defaults.

use graphql_client::{GraphQLQuery, QueryBody};

// =============================================================================
// Product queries
// =============================================================================

/// Paginated products, optionally filtered by a search query.
pub struct GetProducts;

impl GraphQLQuery for GetProducts {
    type Variables = get_products::Variables;
    type ResponseData = get_products::ResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: get_products::QUERY,
            operation_name: get_products::OPERATION_NAME,
        }
    }
}

pub mod get_products {
    use serde::{Deserialize, Serialize};

    pub const OPERATION_NAME: &str = "GetProducts";
    pub const QUERY: &str = include_str!("../../../graphql/admin/queries/products.graphql");

    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub num_products: i64,
        pub cursor: Option<String>,
        pub query: Option<String>,
    }

    #[derive(Debug, Clone, Default, Deserialize)]
    #[serde(default)]
    pub struct ResponseData {
        pub products: Option<GetProductsProducts>,
    }

    #[derive(Debug, Clone, Default, Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    pub struct GetProductsProducts {
        pub edges: Option<Vec<Option<GetProductsProductsEdges>>>,
        pub page_info: Option<PageInfo>,
    }

    #[derive(Debug, Clone, Default, Deserialize)]
    #[serde(default)]
    pub struct GetProductsProductsEdges {
        pub cursor: Option<String>,
        pub node: Option<GetProductsProductsEdgesNode>,
    }

    #[derive(Debug, Clone, Default, Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    pub struct GetProductsProductsEdgesNode {
        pub title: Option<String>,
        pub product_type: Option<String>,
        pub featured_image: Option<GetProductsProductsEdgesNodeFeaturedImage>,
        pub price_range_v2: Option<GetProductsProductsEdgesNodePriceRangeV2>,
    }

    #[derive(Debug, Clone, Default, Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    pub struct GetProductsProductsEdgesNodeFeaturedImage {
        pub alt_text: Option<String>,
        pub url: Option<String>,
    }

    #[derive(Debug, Clone, Default, Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    pub struct GetProductsProductsEdgesNodePriceRangeV2 {
        pub max_variant_price: Option<GetProductsProductsEdgesNodePriceRangeV2MaxVariantPrice>,
    }

    #[derive(Debug, Clone, Default, Deserialize)]
    #[serde(default)]
    pub struct GetProductsProductsEdgesNodePriceRangeV2MaxVariantPrice {
        pub amount: Option<String>,
    }

    #[derive(Debug, Clone, Default, Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    pub struct PageInfo {
        pub has_next_page: Option<bool>,
    }
}

// =============================================================================
// Shop queries
// =============================================================================

/// Product type names defined in the shop.
pub struct GetProductTypes;

impl GraphQLQuery for GetProductTypes {
    type Variables = get_product_types::Variables;
    type ResponseData = get_product_types::ResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: get_product_types::QUERY,
            operation_name: get_product_types::OPERATION_NAME,
        }
    }
}

pub mod get_product_types {
    use serde::{Deserialize, Serialize};

    pub use super::get_products::PageInfo;

    pub const OPERATION_NAME: &str = "GetProductTypes";
    pub const QUERY: &str = include_str!("../../../graphql/admin/queries/product_types.graphql");

    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub num_products: i64,
    }

    #[derive(Debug, Clone, Default, Deserialize)]
    #[serde(default)]
    pub struct ResponseData {
        pub shop: Option<GetProductTypesShop>,
    }

    #[derive(Debug, Clone, Default, Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    pub struct GetProductTypesShop {
        pub product_types: Option<GetProductTypesShopProductTypes>,
    }

    #[derive(Debug, Clone, Default, Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    pub struct GetProductTypesShopProductTypes {
        pub page_info: Option<PageInfo>,
        pub edges: Option<Vec<Option<GetProductTypesShopProductTypesEdges>>>,
    }

    #[derive(Debug, Clone, Default, Deserialize)]
    #[serde(default)]
    pub struct GetProductTypesShopProductTypesEdges {
        pub cursor: Option<String>,
        pub node: Option<String>,
    }
}
