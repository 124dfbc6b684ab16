//! Product listing page.
//!
//! # Architecture
//!
//! - [`CatalogSource`] is the boundary to the data-fetch layer
//! - [`QueryAdapter`] binds one query and its variables to a snapshot
//! - [`build_navigation`] and [`product_cards`] are pure mappers from data to display
//! - [`ListingPage`] is one shopper's view, held in a [`ListingRegistry`]
//!
//! Queries run in dependency order: product types feed the navigation,
//! the navigation re-issues the product query with a new filter.

mod adapter;
mod grid;
mod navigation;
mod page;
mod registry;
mod source;
mod variables;

#[cfg(test)]
pub(crate) mod testing;

pub use adapter::{
    FetchStatus, ProductTypesQuery, ProductsQuery, Query, QueryAdapter, QueryResult,
};
pub use grid::{DEFAULT_PLACEHOLDER_IMAGE_URL, ProductCard, product_cards};
pub use navigation::{ALL_PRODUCTS_LABEL, NavAction, NavItem, build_navigation};
pub use page::{ListingPage, ListingView};
pub use registry::ListingRegistry;
pub use source::CatalogSource;
pub use variables::{ProductTypeVariables, ProductVariables, ProductVariablesPatch};
