//! Integration tests for the catalog listing page.
//!
//! These tests require:
//! - The storefront running (cargo run -p catalog-page-storefront)
//! - Valid Shopify Admin API credentials in its environment
//!
//! Run with: cargo test -p catalog-page-integration-tests -- --ignored

use catalog_page_core::ProductTypeFilter;
use catalog_page_integration_tests::{base_url, client, view_id};
use reqwest::StatusCode;

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront"]
async fn test_health() {
    let client = client().expect("Failed to create HTTP client");

    let resp = client
        .get(format!("{}/health", base_url()))
        .send()
        .await
        .expect("Failed to call health endpoint");

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));
}

#[tokio::test]
#[ignore = "Requires running storefront and Shopify credentials"]
async fn test_readiness_reaches_shopify() {
    let client = client().expect("Failed to create HTTP client");

    let resp = client
        .get(format!("{}/health/ready", base_url()))
        .send()
        .await
        .expect("Failed to call readiness endpoint");

    assert_eq!(resp.status(), StatusCode::OK);
}

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront and Shopify credentials"]
async fn test_listing_page_renders() {
    let client = client().expect("Failed to create HTTP client");

    let resp = client
        .get(format!("{}/", base_url()))
        .send()
        .await
        .expect("Failed to get listing page");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");

    assert!(body.contains("All Products"));
    assert!(view_id(&body).is_some());
}

#[tokio::test]
#[ignore = "Requires running storefront and Shopify credentials"]
async fn test_navigation_round_trip() {
    let client = client().expect("Failed to create HTTP client");
    let base_url = base_url();

    let body = client
        .get(format!("{base_url}/"))
        .send()
        .await
        .expect("Failed to get listing page")
        .text()
        .await
        .expect("Failed to read response");
    let id = view_id(&body).expect("Page has no view id");

    // Entry 0 always exists
    let resp = client
        .post(format!("{base_url}/views/{id}/navigation/0"))
        .send()
        .await
        .expect("Failed to activate navigation entry");

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers()
            .get("location")
            .and_then(|v| v.to_str().ok()),
        Some(format!("/views/{id}").as_str())
    );

    let resp = client
        .get(format!("{base_url}/views/{id}"))
        .send()
        .await
        .expect("Failed to get view");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running storefront and Shopify credentials"]
async fn test_initial_product_type_filter() {
    let client = client().expect("Failed to create HTTP client");
    let filter = ProductTypeFilter::named("Snowboard");
    let name = filter.product_type().unwrap_or_default();

    let resp = client
        .get(format!("{}/?product_type={name}", base_url()))
        .send()
        .await
        .expect("Failed to get filtered listing page");

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running storefront"]
async fn test_unknown_view_redirects_home() {
    let client = client().expect("Failed to create HTTP client");

    let resp = client
        .get(format!("{}/views/{}", base_url(), uuid::Uuid::new_v4()))
        .send()
        .await
        .expect("Failed to get unknown view");

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
#[ignore = "Requires running storefront"]
async fn test_navigation_out_of_range() {
    let client = client().expect("Failed to create HTTP client");
    let base_url = base_url();

    let body = client
        .get(format!("{base_url}/"))
        .send()
        .await
        .expect("Failed to get listing page")
        .text()
        .await
        .expect("Failed to read response");
    let id = view_id(&body).expect("Page has no view id");

    let resp = client
        .post(format!("{base_url}/views/{id}/navigation/100000"))
        .send()
        .await
        .expect("Failed to post navigation");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
