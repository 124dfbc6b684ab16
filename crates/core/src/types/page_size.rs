//! Page size for paginated product queries.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`PageSize`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PageSizeError {
    /// The page size is zero.
    #[error("page size must be positive")]
    Zero,
    /// The page size exceeds what Shopify accepts for `first`.
    #[error("page size must be at most {max}")]
    TooLarge {
        /// Maximum allowed page size.
        max: u16,
    },
}

/// Number of items requested per page (`first` / `$numProducts`).
///
/// ## Constraints
///
/// - Range: 1-250 (Shopify connection limit)
/// - Default: 50
///
/// ## Examples
///
/// ```
/// use catalog_page_core::PageSize;
///
/// assert_eq!(PageSize::default().get(), 50);
/// assert!(PageSize::new(0).is_err());
/// assert!(PageSize::new(251).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct PageSize(u16);

impl PageSize {
    /// Maximum page size accepted by the Shopify Admin API.
    pub const MAX: u16 = 250;

    /// Default page size for the listing page.
    pub const DEFAULT: Self = Self(50);

    /// Create a page size.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero or larger than [`PageSize::MAX`].
    pub const fn new(size: u16) -> Result<Self, PageSizeError> {
        if size == 0 {
            return Err(PageSizeError::Zero);
        }
        if size > Self::MAX {
            return Err(PageSizeError::TooLarge { max: Self::MAX });
        }
        Ok(Self(size))
    }

    /// Get the page size.
    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Get the page size as a GraphQL `Int`.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        i64::from(self.0)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u16> for PageSize {
    type Error = PageSizeError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageSize> for u16 {
    fn from(size: PageSize) -> Self {
        size.0
    }
}
