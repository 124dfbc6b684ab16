//! HTTP route handlers for the catalog page.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                                  - Open a new listing view (?product_type=<name>)
//! GET  /views/{view_id}                   - Render an existing view
//! POST /views/{view_id}/navigation/{idx}  - Run a navigation entry, redirect to the view
//!
//! GET  /health                            - Liveness
//! GET  /health/ready                      - Readiness (probes Shopify)
//! GET  /static/*                          - Stylesheet
//! ```

pub mod health;
pub mod listing;

use axum::{
    Router,
    http::Request,
    middleware,
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::middleware::{request_id_middleware, security_headers_middleware};
use crate::state::AppState;

/// Directory served under `/static`.
const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Create the listing page routes.
pub fn listing_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(listing::index))
        .route("/views/{view_id}", get(listing::show))
        .route(
            "/views/{view_id}/navigation/{index}",
            post(listing::navigate),
        )
}

/// Create the health check routes.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::health))
        .route("/ready", get(health::readiness))
}

/// Build the complete application router with its middleware stack.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(listing_routes())
        .nest("/health", health_routes())
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}
