//! Integration tests for the catalog page.
//!
//! These tests talk to a running storefront that is connected to a real
//! Shopify store, so they are `#[ignore]`d by default.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the server with valid Shopify credentials
//! cargo run -p catalog-page-storefront
//!
//! # Run the ignored tests against it
//! CATALOG_BASE_URL=http://localhost:3000 cargo test -p catalog-page-integration-tests -- --ignored
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use reqwest::{Client, redirect};

/// Base URL of the running storefront (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("CATALOG_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// HTTP client that does not follow redirects, so tests can assert on them.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn client() -> reqwest::Result<Client> {
    Client::builder().redirect(redirect::Policy::none()).build()
}

/// Extract the listing view id from a rendered page.
///
/// The id is taken from the first `/views/{id}` path in the document.
#[must_use]
pub fn view_id(html: &str) -> Option<uuid::Uuid> {
    let (_, rest) = html.split_once("/views/")?;
    let id = rest.get(..36)?;
    uuid::Uuid::parse_str(id).ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_view_id_from_form_action() {
        let html = r#"<form method="post" action="/views/0b7e3c4e-2f7d-4a53-9b8e-6f1d2c3a4b5c/navigation/0">"#;
        assert_eq!(
            view_id(html).unwrap().to_string(),
            "0b7e3c4e-2f7d-4a53-9b8e-6f1d2c3a4b5c"
        );
    }

    #[test]
    fn test_view_id_missing() {
        assert!(view_id("<p>nothing here</p>").is_none());
        assert!(view_id("/views/not-a-uuid").is_none());
    }
}
