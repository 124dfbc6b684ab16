//! Product type filter used in Shopify product search queries.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Search field prefix understood by the Shopify `products(query:)` argument.
const PRODUCT_TYPE_PREFIX: &str = "productType:";

/// Value Shopify treats as "no product type".
const NULL_PRODUCT_TYPE: &str = "null";

/// Errors that can occur when parsing a [`ProductTypeFilter`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterParseError {
    /// The input does not start with `productType:`.
    #[error("filter must start with `productType:`")]
    MissingPrefix,
}

/// A product type filter for the product listing query.
///
/// Renders to Shopify search syntax: `productType:null` for products without
/// a product type, `productType:<name>` otherwise.
///
/// ## Examples
///
/// ```
/// use catalog_page_core::ProductTypeFilter;
///
/// assert_eq!(ProductTypeFilter::Uncategorized.to_string(), "productType:null");
/// assert_eq!(
///     ProductTypeFilter::named("Mugs").to_string(),
///     "productType:Mugs"
/// );
///
/// let parsed: ProductTypeFilter = "productType:Mugs".parse().unwrap();
/// assert_eq!(parsed, ProductTypeFilter::named("Mugs"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ProductTypeFilter {
    /// Products with no product type (`productType:null`).
    #[default]
    Uncategorized,
    /// Products of a specific product type.
    Named(String),
}

impl ProductTypeFilter {
    /// Create a filter for a named product type.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Build a filter from an optional product type label.
    ///
    /// Absent or blank labels select uncategorized products.
    #[must_use]
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(str::trim) {
            None | Some("") => Self::Uncategorized,
            Some(name) => Self::named(name),
        }
    }

    /// Parse a filter from Shopify search syntax.
    ///
    /// # Errors
    ///
    /// Returns [`FilterParseError::MissingPrefix`] if the input does not start
    /// with `productType:`.
    pub fn parse(s: &str) -> Result<Self, FilterParseError> {
        let value = s
            .strip_prefix(PRODUCT_TYPE_PREFIX)
            .ok_or(FilterParseError::MissingPrefix)?;

        if value == NULL_PRODUCT_TYPE {
            Ok(Self::Uncategorized)
        } else {
            Ok(Self::named(value))
        }
    }

    /// Returns the product type name, if any.
    #[must_use]
    pub fn product_type(&self) -> Option<&str> {
        match self {
            Self::Uncategorized => None,
            Self::Named(name) => Some(name),
        }
    }
}

impl fmt::Display for ProductTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uncategorized => write!(f, "{PRODUCT_TYPE_PREFIX}{NULL_PRODUCT_TYPE}"),
            Self::Named(name) => write!(f, "{PRODUCT_TYPE_PREFIX}{name}"),
        }
    }
}

impl FromStr for ProductTypeFilter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<ProductTypeFilter> for String {
    fn from(filter: ProductTypeFilter) -> Self {
        filter.to_string()
    }
}

impl TryFrom<String> for ProductTypeFilter {
    type Error = FilterParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}
