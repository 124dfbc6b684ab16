//! Category navigation built from the shop's product types.

use catalog_page_core::ProductTypeFilter;

use crate::shopify::ProductTypeConnection;

use super::variables::ProductVariablesPatch;

/// Label of the leading entry that lists uncategorized products.
pub const ALL_PRODUCTS_LABEL: &str = "All Products";

/// What happens when a navigation entry is activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    /// Re-issue the product query with this filter.
    FilterByProductType(ProductTypeFilter),
}

impl NavAction {
    /// Variables override applied to the product query.
    #[must_use]
    pub fn patch(&self) -> ProductVariablesPatch {
        match self {
            Self::FilterByProductType(filter) => ProductVariablesPatch::query(filter.clone()),
        }
    }
}

/// A sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: String,
    pub action: NavAction,
    /// Whether the action's filter is the one currently applied.
    pub active: bool,
}

/// Build the sidebar: "All Products" first, then one entry per product type
/// in received order.
///
/// Product types that have not loaded yet (`None`) or an empty list yield
/// the single leading entry.
#[must_use]
pub fn build_navigation(
    product_types: Option<&ProductTypeConnection>,
    active: &ProductTypeFilter,
) -> Vec<NavItem> {
    let item = |label: String, filter: ProductTypeFilter| NavItem {
        label,
        active: &filter == active,
        action: NavAction::FilterByProductType(filter),
    };

    std::iter::once(item(
        ALL_PRODUCTS_LABEL.to_string(),
        ProductTypeFilter::Uncategorized,
    ))
    .chain(
        product_types
            .into_iter()
            .flat_map(ProductTypeConnection::names)
            .map(|name| item(name.to_string(), ProductTypeFilter::named(name))),
    )
    .collect()
}

#[cfg(test)]
mod tests {
    use super::super::testing::product_type_connection;
    use super::*;

    fn filters(items: &[NavItem]) -> Vec<String> {
        items
            .iter()
            .map(|item| match &item.action {
                NavAction::FilterByProductType(filter) => filter.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_not_loaded_yields_all_products_only() {
        let items = build_navigation(None, &ProductTypeFilter::Uncategorized);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, ALL_PRODUCTS_LABEL);
        assert_eq!(filters(&items), ["productType:null"]);
    }

    #[test]
    fn test_empty_list_yields_all_products_only() {
        let connection = product_type_connection(&[]);
        let items = build_navigation(Some(&connection), &ProductTypeFilter::Uncategorized);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_one_item_per_product_type_in_order() {
        let connection = product_type_connection(&["Snowboard", "Gift Card", "Wax"]);
        let items = build_navigation(Some(&connection), &ProductTypeFilter::Uncategorized);

        assert_eq!(items.len(), 1 + connection.edges.len());
        let labels: Vec<_> = items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["All Products", "Snowboard", "Gift Card", "Wax"]);
        assert_eq!(
            filters(&items),
            [
                "productType:null",
                "productType:Snowboard",
                "productType:Gift Card",
                "productType:Wax",
            ]
        );
    }

    #[test]
    fn test_active_entry_is_marked() {
        let connection = product_type_connection(&["Snowboard", "Wax"]);
        let items = build_navigation(Some(&connection), &ProductTypeFilter::named("Wax"));

        let active: Vec<_> = items.iter().map(|i| i.active).collect();
        assert_eq!(active, [false, false, true]);
    }

    #[test]
    fn test_patch_only_replaces_filter() {
        let action = NavAction::FilterByProductType(ProductTypeFilter::named("Wax"));
        let patch = action.patch();

        assert_eq!(patch.query, Some(ProductTypeFilter::named("Wax")));
        assert_eq!(patch.num_products, None);
        assert_eq!(patch.cursor, None);
    }
}
