//! Listing page route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use catalog_page_core::ProductTypeFilter;
use serde::Deserialize;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::listing::{ListingView, NavItem, ProductCard};
use crate::state::AppState;

/// Query parameters for opening a view.
#[derive(Debug, Deserialize)]
pub struct OpenQuery {
    /// Initial product type filter; absent or empty lists uncategorized products.
    pub product_type: Option<String>,
}

/// Listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "listing/page.html")]
pub struct ListingTemplate {
    pub view_id: Uuid,
    pub navigation: Vec<NavItem>,
    pub cards: Vec<ProductCard>,
    pub loading: bool,
}

impl ListingTemplate {
    fn new(view_id: Uuid, view: ListingView) -> Self {
        Self {
            view_id,
            navigation: view.navigation,
            cards: view.cards,
            loading: view.loading,
        }
    }
}

/// Open a new view and render it.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<OpenQuery>,
) -> impl IntoResponse {
    let filter = ProductTypeFilter::from_label(query.product_type.as_deref());
    let (page, view) = state.views().open(filter).await;
    ListingTemplate::new(page.id(), view)
}

/// Render an existing view. Unknown or expired views start over at `/`.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(view_id): Path<Uuid>) -> Response {
    let Some(page) = state.views().get(&view_id).await else {
        debug!(%view_id, "Unknown view, starting a new one");
        return Redirect::to("/").into_response();
    };

    ListingTemplate::new(view_id, page.view().await).into_response()
}

/// Run the navigation entry at `index`, then redirect back to the view.
#[instrument(skip(state))]
pub async fn navigate(
    State(state): State<AppState>,
    Path((view_id, index)): Path<(Uuid, usize)>,
) -> Result<Redirect> {
    let Some(page) = state.views().get(&view_id).await else {
        debug!(%view_id, "Unknown view, starting a new one");
        return Ok(Redirect::to("/"));
    };

    let (item, _) = page
        .activate(index)
        .await
        .ok_or_else(|| AppError::NotFound(format!("navigation entry {index}")))?;

    add_breadcrumb(
        "navigation",
        "Filtered by product type",
        Some(&[("label", item.label.as_str())]),
    );

    Ok(Redirect::to(&format!("/views/{view_id}")))
}
