//! Query adapters binding a catalog query and its variables to a snapshot.
//!
//! An adapter owns the current variables and the latest result of one
//! query. Callers read `{status, data, error}` snapshots and trigger new
//! fetches by changing variables or calling [`QueryAdapter::refetch`].
//!
//! Failures never escape an adapter: on error the previous data is kept and
//! the error is recorded next to it.
//!
//! Every fetch is tagged with a sequence number. A response is applied only
//! if no newer response has been applied already, so a slow request that
//! finishes after a faster, later one cannot overwrite newer data.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::shopify::{ProductConnection, ProductTypeConnection, ShopifyError};

use super::source::CatalogSource;
use super::variables::{ProductTypeVariables, ProductVariables, ProductVariablesPatch};

// =============================================================================
// Query definitions
// =============================================================================

/// A catalog query an adapter can drive.
pub trait Query: Send + Sync + 'static {
    type Variables: Clone + PartialEq + fmt::Debug + Send + Sync;
    type Patch: Send;
    type Data: fmt::Debug + Send + Sync;

    /// Name used in logs.
    const NAME: &'static str;

    /// Merge a partial override into the current variables.
    fn merge(variables: &mut Self::Variables, patch: Self::Patch);

    /// Issue the read against a catalog source.
    fn fetch<S: CatalogSource>(
        source: &S,
        variables: &Self::Variables,
    ) -> impl Future<Output = Result<Self::Data, ShopifyError>> + Send;
}

/// Paginated products filtered by product type.
#[derive(Debug)]
pub struct ProductsQuery;

impl Query for ProductsQuery {
    type Variables = ProductVariables;
    type Patch = ProductVariablesPatch;
    type Data = ProductConnection;

    const NAME: &'static str = "products";

    fn merge(variables: &mut Self::Variables, patch: Self::Patch) {
        variables.merge(patch);
    }

    fn fetch<S: CatalogSource>(
        source: &S,
        variables: &Self::Variables,
    ) -> impl Future<Output = Result<Self::Data, ShopifyError>> + Send {
        source.products(variables)
    }
}

/// The shop's product type names.
#[derive(Debug)]
pub struct ProductTypesQuery;

impl Query for ProductTypesQuery {
    type Variables = ProductTypeVariables;
    type Patch = ProductTypeVariables;
    type Data = ProductTypeConnection;

    const NAME: &'static str = "product_types";

    fn merge(variables: &mut Self::Variables, patch: Self::Patch) {
        *variables = patch;
    }

    fn fetch<S: CatalogSource>(
        source: &S,
        variables: &Self::Variables,
    ) -> impl Future<Output = Result<Self::Data, ShopifyError>> + Send {
        source.product_types(variables)
    }
}

// =============================================================================
// Snapshots
// =============================================================================

/// Lifecycle of an adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    /// Nothing has been fetched yet.
    Idle,
    /// A fetch newer than the applied data is in flight.
    Loading,
    /// The latest applied fetch succeeded.
    Success,
    /// The latest applied fetch failed.
    Error,
}

/// Point-in-time view of an adapter.
#[derive(Debug)]
pub struct QueryResult<Q: Query> {
    /// Variables of the most recently issued fetch.
    pub variables: Q::Variables,
    /// Last successful data, if any.
    pub data: Option<Arc<Q::Data>>,
    /// Error of the latest applied fetch, if it failed.
    pub error: Option<Arc<ShopifyError>>,
    pub status: FetchStatus,
}

impl<Q: Query> QueryResult<Q> {
    /// Whether a fetch newer than `data` is in flight.
    #[must_use]
    pub fn loading(&self) -> bool {
        matches!(self.status, FetchStatus::Loading | FetchStatus::Idle)
    }
}

impl<Q: Query> Clone for QueryResult<Q> {
    fn clone(&self) -> Self {
        Self {
            variables: self.variables.clone(),
            data: self.data.clone(),
            error: self.error.clone(),
            status: self.status,
        }
    }
}

// =============================================================================
// QueryAdapter
// =============================================================================

/// Binds one query and its current variables to the latest result.
pub struct QueryAdapter<Q: Query, S> {
    source: Arc<S>,
    state: Mutex<AdapterState<Q>>,
}

struct AdapterState<Q: Query> {
    variables: Q::Variables,
    data: Option<Arc<Q::Data>>,
    error: Option<Arc<ShopifyError>>,
    /// Sequence number of the most recently issued fetch.
    issued: u64,
    /// Sequence number of the most recently applied response.
    applied: u64,
}

impl<Q: Query> AdapterState<Q> {
    fn status(&self) -> FetchStatus {
        if self.issued == 0 {
            FetchStatus::Idle
        } else if self.applied < self.issued {
            FetchStatus::Loading
        } else if self.error.is_some() {
            FetchStatus::Error
        } else {
            FetchStatus::Success
        }
    }

    fn snapshot(&self) -> QueryResult<Q> {
        QueryResult {
            variables: self.variables.clone(),
            data: self.data.clone(),
            error: self.error.clone(),
            status: self.status(),
        }
    }

    /// Allocate the next sequence number for the current variables.
    fn begin(&mut self) -> (u64, Q::Variables) {
        self.issued += 1;
        (self.issued, self.variables.clone())
    }
}

impl<Q: Query, S: CatalogSource> QueryAdapter<Q, S> {
    /// Create an idle adapter. Nothing is fetched until it is loaded.
    #[must_use]
    pub fn new(source: Arc<S>, variables: Q::Variables) -> Self {
        Self {
            source,
            state: Mutex::new(AdapterState {
                variables,
                data: None,
                error: None,
                issued: 0,
                applied: 0,
            }),
        }
    }

    /// Current snapshot without fetching.
    pub async fn snapshot(&self) -> QueryResult<Q> {
        self.state.lock().await.snapshot()
    }

    /// Fetch with the current variables unless a fetch was already issued.
    pub async fn load(&self) -> QueryResult<Q> {
        let ticket = {
            let mut state = self.state.lock().await;
            if state.issued > 0 {
                return state.snapshot();
            }
            state.begin()
        };
        self.run(ticket).await
    }

    /// Replace the variables, fetching only if their value changed.
    pub async fn set_variables(&self, variables: Q::Variables) -> QueryResult<Q> {
        let ticket = {
            let mut state = self.state.lock().await;
            if state.issued > 0 && state.variables == variables {
                return state.snapshot();
            }
            state.variables = variables;
            state.begin()
        };
        self.run(ticket).await
    }

    /// Merge `patch` into the variables and always re-issue the query.
    pub async fn refetch(&self, patch: Q::Patch) -> QueryResult<Q> {
        let ticket = {
            let mut state = self.state.lock().await;
            Q::merge(&mut state.variables, patch);
            state.begin()
        };
        self.run(ticket).await
    }

    async fn run(&self, (seq, variables): (u64, Q::Variables)) -> QueryResult<Q> {
        debug!(query = Q::NAME, seq, ?variables, "Fetching");

        let result = Q::fetch(self.source.as_ref(), &variables).await;

        let mut state = self.state.lock().await;
        if seq < state.applied {
            debug!(
                query = Q::NAME,
                seq,
                applied = state.applied,
                "Discarding stale response"
            );
            return state.snapshot();
        }

        state.applied = seq;
        match result {
            Ok(data) => {
                state.data = Some(Arc::new(data));
                state.error = None;
            }
            Err(e) => {
                warn!(
                    query = Q::NAME,
                    seq,
                    error = %e,
                    "Fetch failed, keeping last data"
                );
                state.error = Some(Arc::new(e));
            }
        }

        state.snapshot()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use catalog_page_core::{PageSize, ProductTypeFilter};

    use super::super::testing::{FakeSource, product_connection};
    use super::*;

    fn adapter(source: &Arc<FakeSource>) -> QueryAdapter<ProductsQuery, FakeSource> {
        QueryAdapter::new(Arc::clone(source), ProductVariables::default())
    }

    fn titles(result: &QueryResult<ProductsQuery>) -> Vec<String> {
        result
            .data
            .as_ref()
            .map(|d| d.edges.iter().map(|e| e.node.title.clone()).collect())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn test_new_adapter_is_idle() {
        let source = Arc::new(FakeSource::default());
        let result = adapter(&source).snapshot().await;

        assert_eq!(result.status, FetchStatus::Idle);
        assert!(result.loading());
        assert!(result.data.is_none());
        assert!(source.product_calls().is_empty());
    }

    #[tokio::test]
    async fn test_load_fetches_once() {
        let source = Arc::new(FakeSource::default());
        source.set_products(
            &ProductTypeFilter::Uncategorized,
            product_connection(&[("c1", "Mug")]),
        );
        let adapter = adapter(&source);

        let first = adapter.load().await;
        let second = adapter.load().await;

        assert_eq!(first.status, FetchStatus::Success);
        assert_eq!(titles(&second), ["Mug"]);
        assert_eq!(source.product_calls().len(), 1);
    }

    #[tokio::test]
    async fn test_set_variables_skips_unchanged() {
        let source = Arc::new(FakeSource::default());
        let adapter = adapter(&source);
        adapter.load().await;

        adapter.set_variables(ProductVariables::default()).await;
        assert_eq!(source.product_calls().len(), 1);

        adapter
            .set_variables(ProductVariables {
                query: ProductTypeFilter::named("Mugs"),
                ..ProductVariables::default()
            })
            .await;
        assert_eq!(source.product_calls().len(), 2);
    }

    #[tokio::test]
    async fn test_refetch_merges_variables() {
        let source = Arc::new(FakeSource::default());
        let adapter = QueryAdapter::<ProductsQuery, _>::new(
            Arc::clone(&source),
            ProductVariables {
                num_products: PageSize::new(7).unwrap(),
                ..ProductVariables::default()
            },
        );

        let result = adapter
            .refetch(ProductVariablesPatch::query(ProductTypeFilter::named(
                "Mugs",
            )))
            .await;

        assert_eq!(result.variables.num_products.get(), 7);
        assert_eq!(result.variables.query, ProductTypeFilter::named("Mugs"));
        assert_eq!(source.product_calls(), [result.variables]);
    }

    #[tokio::test]
    async fn test_refetch_same_variables_is_idempotent() {
        let source = Arc::new(FakeSource::default());
        source.set_products(
            &ProductTypeFilter::Uncategorized,
            product_connection(&[("c1", "Mug"), ("c2", "Plate")]),
        );
        let adapter = adapter(&source);

        let first = adapter.refetch(ProductVariablesPatch::default()).await;
        let second = adapter.refetch(ProductVariablesPatch::default()).await;

        assert_eq!(titles(&first), titles(&second));
        assert_eq!(source.product_calls().len(), 2);
    }

    #[tokio::test]
    async fn test_error_keeps_last_data() {
        let source = Arc::new(FakeSource::default());
        source.set_products(
            &ProductTypeFilter::Uncategorized,
            product_connection(&[("c1", "Mug")]),
        );
        let adapter = adapter(&source);
        adapter.load().await;

        source.fail_next();
        let result = adapter
            .refetch(ProductVariablesPatch::query(ProductTypeFilter::named(
                "Mugs",
            )))
            .await;

        assert_eq!(result.status, FetchStatus::Error);
        assert!(result.error.is_some());
        assert_eq!(titles(&result), ["Mug"]);
    }

    #[tokio::test]
    async fn test_error_before_any_data() {
        let source = Arc::new(FakeSource::default());
        source.fail_next();

        let result = adapter(&source).load().await;

        assert_eq!(result.status, FetchStatus::Error);
        assert!(result.data.is_none());
    }

    #[tokio::test]
    async fn test_success_clears_error() {
        let source = Arc::new(FakeSource::default());
        let adapter = adapter(&source);
        source.fail_next();
        adapter.load().await;

        let result = adapter.refetch(ProductVariablesPatch::default()).await;

        assert_eq!(result.status, FetchStatus::Success);
        assert!(result.error.is_none());
    }

    #[tokio::test]
    async fn test_stale_response_is_discarded() {
        let source = Arc::new(FakeSource::default());
        source.set_products(
            &ProductTypeFilter::named("Slow"),
            product_connection(&[("s1", "Slow Mug")]),
        );
        source.set_products(
            &ProductTypeFilter::named("Fast"),
            product_connection(&[("f1", "Fast Mug")]),
        );
        let gate = source.hold(&ProductTypeFilter::named("Slow"));
        let adapter = adapter(&source);

        let slow = adapter.refetch(ProductVariablesPatch::query(ProductTypeFilter::named(
            "Slow",
        )));
        let fast = async {
            let result = adapter
                .refetch(ProductVariablesPatch::query(ProductTypeFilter::named(
                    "Fast",
                )))
                .await;
            gate.notify_one();
            result
        };

        let (slow_result, fast_result) = tokio::join!(slow, fast);

        assert_eq!(titles(&fast_result), ["Fast Mug"]);
        assert_eq!(titles(&slow_result), ["Fast Mug"]);
        assert_eq!(titles(&adapter.snapshot().await), ["Fast Mug"]);
        assert_eq!(adapter.snapshot().await.status, FetchStatus::Success);
    }

    #[tokio::test]
    async fn test_product_types_adapter_replaces_variables() {
        let source = Arc::new(FakeSource::default());
        source.set_product_types(&["Snowboard"]);
        let adapter = QueryAdapter::<ProductTypesQuery, _>::new(
            Arc::clone(&source),
            ProductTypeVariables::default(),
        );

        adapter.load().await;
        adapter
            .set_variables(ProductTypeVariables {
                num_products: PageSize::default(),
            })
            .await;
        assert_eq!(source.product_type_calls().len(), 1);

        let result = adapter
            .refetch(ProductTypeVariables {
                num_products: PageSize::new(5).unwrap(),
            })
            .await;
        assert_eq!(result.variables.num_products.get(), 5);
        assert_eq!(source.product_type_calls().len(), 2);
        assert_eq!(
            result.data.unwrap().names().collect::<Vec<_>>(),
            ["Snowboard"]
        );
    }
}
