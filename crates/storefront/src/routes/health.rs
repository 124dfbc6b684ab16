//! Health check route handlers.

use axum::extract::State;
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Sends an uncached product type query to the Admin API. A failure is
/// reported to Sentry and answered with 502 Bad Gateway.
#[instrument(skip(state))]
pub async fn readiness(State(state): State<AppState>) -> Result<&'static str> {
    state.catalog().ping().await?;
    Ok("ok")
}
