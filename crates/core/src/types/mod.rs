//! Core types for the catalog page.
//!
//! This module provides type-safe wrappers for the product query variables.

pub mod cursor;
pub mod filter;
pub mod page_size;

pub use cursor::Cursor;
pub use filter::{FilterParseError, ProductTypeFilter};
pub use page_size::{PageSize, PageSizeError};
