//! Pagination and sorting primitives
//!
//! Listing operations take a [`PaginationFilters`] (1-based page number and
//! page size) and an optional [`SortFilters`] over a domain-specific field
//! enumeration, and answer with a [`Page`] envelope carrying the total count
//! next to the requested slice.

use serde::{Deserialize, Serialize};

/// Page size used when the caller does not ask for one
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Page number used when the caller does not ask for one
pub const DEFAULT_PAGE_NUMBER: u32 = 1;

/// Largest page size a caller may request
pub const MAX_PAGE_SIZE: u32 = 100;

/// Which slice of a result set to return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationFilters {
    /// 1-based page number
    pub page_number: u32,
    /// Number of items per page
    pub page_size: u32,
}

impl PaginationFilters {
    /// Creates pagination filters
    ///
    /// Zero values are raised to 1 so that offset arithmetic never underflows.
    pub fn new(page_number: u32, page_size: u32) -> Self {
        Self {
            page_number: page_number.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Number of items to skip
    pub fn offset(&self) -> u64 {
        u64::from(self.page_number.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// Maximum number of items to return
    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }
}

impl Default for PaginationFilters {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE)
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc", alias = "ascending")]
    Ascending,
    #[serde(rename = "desc", alias = "descending")]
    Descending,
}

impl SortDirection {
    /// SQL keyword for this direction
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

/// Sort criterion over a field enumeration `F`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortFilters<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F> SortFilters<F> {
    /// Sorts ascending by `field`
    pub fn ascending(field: F) -> Self {
        Self { field, direction: SortDirection::Ascending }
    }

    /// Sorts descending by `field`
    pub fn descending(field: F) -> Self {
        Self { field, direction: SortDirection::Descending }
    }
}

impl<F: Default> Default for SortFilters<F> {
    fn default() -> Self {
        Self::ascending(F::default())
    }
}

/// A page of results with the information needed to navigate the rest
///
/// `total` counts every record matching the filter, not just the ones on
/// this page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page_size: u32,
    pub page_number: u32,
}

impl<T> Page<T> {
    /// Creates a page from a slice of results and the overall count
    pub fn new(items: Vec<T>, total: u64, pagination: PaginationFilters) -> Self {
        Self {
            items,
            total,
            page_size: pagination.page_size,
            page_number: pagination.page_number,
        }
    }

    /// An empty page for the given pagination
    pub fn empty(pagination: PaginationFilters) -> Self {
        Self::new(Vec::new(), 0, pagination)
    }

    /// Number of pages needed to hold `total` items (at least 1)
    pub fn total_pages(&self) -> u32 {
        if self.total == 0 || self.page_size == 0 {
            return 1;
        }
        let pages = self.total.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn has_previous_page(&self) -> bool {
        self.page_number > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.page_number < self.total_pages()
    }

    /// Converts the items while keeping the pagination metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page_size: self.page_size,
            page_number: self.page_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pagination() {
        let pagination = PaginationFilters::default();
        assert_eq!(pagination.page_number, 1);
        assert_eq!(pagination.page_size, 20);
        assert_eq!(pagination.offset(), 0);
    }

    #[test]
    fn test_offset_for_third_page() {
        let pagination = PaginationFilters::new(3, 25);
        assert_eq!(pagination.offset(), 50);
        assert_eq!(pagination.limit(), 25);
    }

    #[test]
    fn test_zero_page_number_is_raised() {
        let pagination = PaginationFilters::new(0, 0);
        assert_eq!(pagination.page_number, 1);
        assert_eq!(pagination.page_size, 1);
    }
}
