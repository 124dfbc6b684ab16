//! In-memory catalog source for listing tests.

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use catalog_page_core::{Cursor, ProductTypeFilter};
use tokio::sync::Notify;

use crate::shopify::{
    GraphQLError, Image, Money, PriceRange, Product, ProductConnection, ProductEdge,
    ProductTypeConnection, ProductTypeEdge, ShopifyError,
};

use super::source::CatalogSource;
use super::variables::{ProductTypeVariables, ProductVariables};

/// Build a product page from `(cursor, title)` pairs.
pub fn product_connection(items: &[(&str, &str)]) -> ProductConnection {
    ProductConnection {
        edges: items
            .iter()
            .map(|(cursor, title)| ProductEdge {
                cursor: Cursor::new(*cursor),
                node: Product {
                    title: (*title).to_string(),
                    product_type: None,
                    featured_image: Some(Image {
                        url: Some(format!("https://cdn.example.com/{cursor}.png")),
                        alt_text: Some((*title).to_string()),
                    }),
                    price_range: PriceRange {
                        max_variant_price: Money {
                            amount: "10.0".to_string(),
                        },
                    },
                },
            })
            .collect(),
        ..ProductConnection::default()
    }
}

/// Build a product type page from names.
pub fn product_type_connection(names: &[&str]) -> ProductTypeConnection {
    ProductTypeConnection {
        edges: names
            .iter()
            .enumerate()
            .map(|(i, name)| ProductTypeEdge {
                cursor: Cursor::new(format!("t{i}")),
                node: (*name).to_string(),
            })
            .collect(),
        ..ProductTypeConnection::default()
    }
}

/// Catalog source backed by canned responses.
///
/// Records every call, can fail the next fetch, and can hold a product
/// fetch for a given filter until the returned [`Notify`] fires.
#[derive(Default)]
pub struct FakeSource {
    products: Mutex<HashMap<ProductTypeFilter, ProductConnection>>,
    product_types: Mutex<ProductTypeConnection>,
    product_calls: Mutex<Vec<ProductVariables>>,
    product_type_calls: Mutex<Vec<ProductTypeVariables>>,
    holds: Mutex<HashMap<ProductTypeFilter, Arc<Notify>>>,
    fail_next: AtomicBool,
}

impl FakeSource {
    pub fn set_products(&self, filter: &ProductTypeFilter, connection: ProductConnection) {
        self.products
            .lock()
            .unwrap()
            .insert(filter.clone(), connection);
    }

    pub fn set_product_types(&self, names: &[&str]) {
        *self.product_types.lock().unwrap() = product_type_connection(names);
    }

    /// Make the next fetch of either query fail.
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// Hold the next product fetch for `filter` until notified.
    pub fn hold(&self, filter: &ProductTypeFilter) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.holds
            .lock()
            .unwrap()
            .insert(filter.clone(), Arc::clone(&gate));
        gate
    }

    pub fn product_calls(&self) -> Vec<ProductVariables> {
        self.product_calls.lock().unwrap().clone()
    }

    pub fn product_type_calls(&self) -> Vec<ProductTypeVariables> {
        self.product_type_calls.lock().unwrap().clone()
    }

    fn take_failure(&self) -> Result<(), ShopifyError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(ShopifyError::GraphQL(vec![GraphQLError {
                message: "Throttled".to_string(),
                locations: vec![],
                path: vec![],
            }]));
        }
        Ok(())
    }
}

impl CatalogSource for FakeSource {
    async fn products(
        &self,
        variables: &ProductVariables,
    ) -> Result<ProductConnection, ShopifyError> {
        self.product_calls.lock().unwrap().push(variables.clone());
        let gate = self.holds.lock().unwrap().remove(&variables.query);
        let failure = self.take_failure();

        if let Some(gate) = gate {
            gate.notified().await;
        }
        failure?;

        Ok(self
            .products
            .lock()
            .unwrap()
            .get(&variables.query)
            .cloned()
            .unwrap_or_default())
    }

    async fn product_types(
        &self,
        variables: &ProductTypeVariables,
    ) -> Result<ProductTypeConnection, ShopifyError> {
        self.product_type_calls.lock().unwrap().push(*variables);
        self.take_failure()?;
        Ok(self.product_types.lock().unwrap().clone())
    }
}
