//! Catalog Page Core - Shared types library.
//!
//! This crate provides the types shared by the catalog page components:
//! - `storefront` - The server-rendered product listing page
//! - `integration-tests` - Black-box tests against a running storefront
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product type filters, page sizes, and cursors

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
