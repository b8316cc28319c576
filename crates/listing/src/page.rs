//! The paginator: slice an ordered collection into one page plus metadata.
//!
//! Pagination never fails. Out-of-range requests are clamped into the
//! valid page range and the reported `current_page` is the clamped value,
//! so callers can always render what comes back.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A request for one ordered window of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// 1-based page number. Values below 1 are treated as 1.
    pub page: usize,
    /// Records per page. Values below 1 are treated as 1.
    pub page_size: usize,
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }

    /// First page with the platform's standard page size.
    pub fn first() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// Page size the listing pages use unless told otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// One page of results plus the metadata the pagination controls need.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSet<T> {
    /// Records on the current page, in result order.
    pub data: Vec<T>,
    /// Total records matching the filters, independent of pagination.
    pub total_results: usize,
    /// Always at least 1, even for an empty result.
    pub total_pages: usize,
    /// The (possibly clamped) page this set represents.
    pub current_page: usize,
    /// Whether a further page exists.
    pub has_more: bool,
}

impl<T> ResultSet<T> {
    /// The empty result: one empty page.
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            total_results: 0,
            total_pages: 1,
            current_page: 1,
            has_more: false,
        }
    }
}

/// Slice `records` into the requested page.
///
/// ## Algorithm
/// 1. total_pages = max(1, ceil(total / page_size))
/// 2. Clamp the requested page into [1, total_pages]
/// 3. Take the contiguous window [(page-1)*size, page*size)
/// 4. has_more = current_page < total_pages
pub fn paginate<T>(records: Vec<T>, request: PageRequest) -> ResultSet<T> {
    let page_size = request.page_size.max(1);
    let total_results = records.len();
    let total_pages = total_results.div_ceil(page_size).max(1);
    let current_page = request.page.clamp(1, total_pages);

    let start = (current_page - 1) * page_size;
    let data: Vec<T> = records
        .into_iter()
        .skip(start)
        .take(page_size)
        .collect();

    debug!(
        "Paginated: total={}, page={}/{}, window={}..{}",
        total_results,
        current_page,
        total_pages,
        start,
        start + data.len()
    );

    ResultSet {
        data,
        total_results,
        total_pages,
        current_page,
        has_more: current_page < total_pages,
    }
}
