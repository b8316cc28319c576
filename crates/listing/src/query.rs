//! The pipeline orchestrator: filter, then sort, then paginate.
//!
//! The stage order is a contract, not a style choice — filtering first
//! means the sort only ever touches survivors. Each run is a pure
//! function of its inputs: same records, same criteria, same result.

use crate::filter::FilterSpec;
use crate::page::{paginate, PageRequest, ResultSet};
use crate::sort::{sort_records, SortKey};
use crate::traits::Listable;
use tracing::debug;

/// Run the full listing pipeline over a record snapshot.
///
/// The input slice is never mutated; survivors are cloned out, sorted,
/// and the requested page sliced off.
pub fn run_query<R>(
    records: &[R],
    filters: &FilterSpec,
    sort: SortKey,
    page: PageRequest,
) -> ResultSet<R>
where
    R: Listable + Clone,
{
    let mut matched: Vec<R> = records
        .iter()
        .filter(|record| filters.matches(*record))
        .cloned()
        .collect();
    debug!(
        "Filtered: {} of {} records match ({} active filters)",
        matched.len(),
        records.len(),
        filters.active_count()
    );

    sort_records(&mut matched, sort);
    debug!("Sorted {} records by {}", matched.len(), sort.as_str());

    paginate(matched, page)
}

/// One listing session's criteria, with explicit recompute entry points.
///
/// The UI re-runs the pipeline whenever a criterion changes; this type
/// makes those transitions explicit instead of reactive. Changing the
/// filters or the sort key resets the page to 1 so the session never
/// lands on a page that no longer exists.
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    filters: FilterSpec,
    sort: SortKey,
    page: PageRequest,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session starting from an initial sort (the jobs page opens on
    /// "recent", the directory on "name").
    pub fn with_sort(sort: SortKey) -> Self {
        Self {
            sort,
            ..Self::default()
        }
    }

    pub fn filters(&self) -> &FilterSpec {
        &self.filters
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn page(&self) -> PageRequest {
        self.page
    }

    /// Replace the filter spec. Resets to page 1.
    pub fn set_filters(&mut self, filters: FilterSpec) {
        self.filters = filters;
        self.page.page = 1;
    }

    /// Update only the free-text query. Resets to page 1.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.filters.search = query.into();
        self.page.page = 1;
    }

    /// Drop every constraint. Resets to page 1.
    pub fn clear_filters(&mut self) {
        self.filters = FilterSpec::default();
        self.page.page = 1;
    }

    /// Change the ordering. Resets to page 1.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.page.page = 1;
    }

    /// Navigate to another page of the current results.
    pub fn set_page(&mut self, page: usize) {
        self.page.page = page;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page.page_size = page_size;
        self.page.page = 1;
    }

    /// Recompute the result set against a record snapshot.
    pub fn run<R: Listable + Clone>(&self, records: &[R]) -> ResultSet<R> {
        run_query(records, &self.filters, self.sort, self.page)
    }
}
