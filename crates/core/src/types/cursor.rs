//! Opaque pagination cursor.

use serde::{Deserialize, Serialize};

/// An opaque position in a paginated Shopify connection.
///
/// Cursors are assigned by Shopify and passed back verbatim as `after`;
/// this crate never inspects their contents. An edge Shopify returned
/// without a cursor carries the empty default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    /// Wrap a cursor string.
    #[must_use]
    pub fn new(cursor: impl Into<String>) -> Self {
        Self(cursor.into())
    }

    /// Returns the cursor as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
