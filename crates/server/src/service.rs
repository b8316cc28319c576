//! # Directory Service
//!
//! This module coordinates the listing features end to end:
//! 1. Hold the loaded catalog (shared, immutable snapshot)
//! 2. Run the filter/sort/paginate pipeline per record type
//! 3. Expose facet options for the filter sidebar
//! 4. Record submitted search queries in the session history
//!
//! The service is the boundary where criteria arrive as loose values
//! (query params, CLI flags); everything below it works with typed specs.

use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use directory_data::{AlumniProfile, DirectoryCatalog, EventListing, JobPosting};
use listing::{
    facet_counts, run_query, FacetDimension, FilterSpec, PageRequest, ResultSet, SortKey,
};

use crate::history::SearchHistory;

/// Serves directory, job, and event listings from a catalog snapshot.
pub struct DirectoryService {
    catalog: Arc<DirectoryCatalog>,
    history: SearchHistory,
}

impl DirectoryService {
    /// Create a service over an already-loaded catalog.
    pub fn new(catalog: Arc<DirectoryCatalog>) -> Self {
        let (profiles, jobs, events) = catalog.counts();
        info!(
            "Directory service ready: {} profiles, {} jobs, {} events",
            profiles, jobs, events
        );
        Self {
            catalog,
            history: SearchHistory::new(),
        }
    }

    /// Search the alumni directory.
    pub fn search_alumni(
        &mut self,
        filters: &FilterSpec,
        sort: SortKey,
        page: PageRequest,
    ) -> ResultSet<AlumniProfile> {
        self.remember_search(filters);

        let start = Instant::now();
        let result = run_query(self.catalog.profiles(), filters, sort, page);
        info!(
            "Alumni search: {} matches, page {}/{}, {:.2?}",
            result.total_results,
            result.current_page,
            result.total_pages,
            start.elapsed()
        );
        result
    }

    /// Search the job board.
    pub fn search_jobs(
        &mut self,
        filters: &FilterSpec,
        sort: SortKey,
        page: PageRequest,
    ) -> ResultSet<JobPosting> {
        self.remember_search(filters);

        let start = Instant::now();
        let result = run_query(self.catalog.jobs(), filters, sort, page);
        info!(
            "Job search: {} matches, page {}/{}, {:.2?}",
            result.total_results,
            result.current_page,
            result.total_pages,
            start.elapsed()
        );
        result
    }

    /// Search the events page.
    pub fn search_events(
        &mut self,
        filters: &FilterSpec,
        sort: SortKey,
        page: PageRequest,
    ) -> ResultSet<EventListing> {
        self.remember_search(filters);

        let start = Instant::now();
        let result = run_query(self.catalog.events(), filters, sort, page);
        info!(
            "Event search: {} matches, page {}/{}, {:.2?}",
            result.total_results,
            result.current_page,
            result.total_pages,
            start.elapsed()
        );
        result
    }

    /// Facet options over the full alumni directory (filter sidebar).
    pub fn alumni_facets(&self, dimension: FacetDimension) -> Vec<(String, usize)> {
        facet_counts(self.catalog.profiles(), dimension)
    }

    /// Facet options over the full job board.
    pub fn job_facets(&self, dimension: FacetDimension) -> Vec<(String, usize)> {
        facet_counts(self.catalog.jobs(), dimension)
    }

    /// Recently submitted search queries, most recent first.
    pub fn recent_searches(&self) -> &[String] {
        self.history.recent()
    }

    fn remember_search(&mut self, filters: &FilterSpec) {
        let query = filters.search.trim();
        if !query.is_empty() {
            self.history.push(query);
        }
    }
}
