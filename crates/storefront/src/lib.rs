//! Catalog page storefront library.
//!
//! This crate provides the listing page server as a library,
//! allowing it to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod listing;
pub mod middleware;
pub mod routes;
pub mod shopify;
pub mod state;
