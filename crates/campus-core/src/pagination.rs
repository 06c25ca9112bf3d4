//! Pagination types for the paginated search operation.

use serde::{Deserialize, Serialize};

/// The fixed page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Returns the row offset for a 1-based page number.
///
/// `page <= 1` clamps to the first page rather than underflowing.
#[must_use]
pub const fn offset(page_size: u32, page: u32) -> u64 {
    (page_size as u64) * (page.saturating_sub(1) as u64)
}

/// Returns the total number of pages for a record count.
#[must_use]
pub const fn total_page_count(total_records: u64, page_size: u32) -> u64 {
    if page_size == 0 {
        0
    } else {
        total_records.div_ceil(page_size as u64)
    }
}

/// One page of search results, echoing back the criteria that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPage<T, C> {
    /// The requested page number (1-based).
    pub page: u32,
    /// The total number of pages matching the criteria.
    pub total_pages: u64,
    /// The criteria this page was filtered by, verbatim.
    pub criteria: C,
    /// The items on this page.
    pub results: Vec<T>,
}

impl<T, C> SearchPage<T, C> {
    /// Creates a new search page, deriving `total_pages` from the count.
    #[must_use]
    pub fn new(page: u32, total_records: u64, page_size: u32, criteria: C, results: Vec<T>) -> Self {
        Self {
            page,
            total_pages: total_page_count(total_records, page_size),
            criteria,
            results,
        }
    }

    /// Returns true if this page holds no results.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns the number of results on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns true if there is a page after this one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        (self.page as u64) < self.total_pages
    }
}
