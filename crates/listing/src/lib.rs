//! Listing pipeline for the alumni directory, job board, and events pages.
//!
//! This crate provides:
//! - The `Listable` trait that maps record types onto filter dimensions
//! - `FilterSpec` and the predicate evaluator
//! - `SortKey` and stable comparators
//! - The paginator and `ResultSet` output shape
//! - `run_query` / `QueryState` composing the three stages
//! - Facet extraction for the filter sidebar
//!
//! ## Architecture
//! Every query runs the same three stages, in this order:
//! 1. Filter: keep records matching the `FilterSpec` (dimensions AND
//!    together, values within a dimension OR together)
//! 2. Sort: stable ordering by the requested `SortKey`
//! 3. Paginate: slice one page and compute page metadata
//!
//! The pipeline is synchronous and pure: it never mutates its input,
//! performs no I/O, and identical inputs produce identical results.
//!
//! ## Example Usage
//! ```ignore
//! use listing::{run_query, FilterSpec, PageRequest, SortKey};
//!
//! let filters = FilterSpec {
//!     skills: vec!["rust".to_string()],
//!     verified_only: true,
//!     ..FilterSpec::default()
//! };
//!
//! let page = run_query(catalog.profiles(), &filters, SortKey::Name, PageRequest::first());
//! println!("{} of {} matches", page.data.len(), page.total_results);
//! ```

pub mod facets;
pub mod filter;
pub mod page;
pub mod query;
pub mod records;
pub mod sort;
pub mod traits;

// Re-export main types
pub use facets::{facet_counts, FacetDimension};
pub use filter::FilterSpec;
pub use page::{paginate, PageRequest, ResultSet, DEFAULT_PAGE_SIZE};
pub use query::{run_query, QueryState};
pub use sort::{sort_records, SortKey};
pub use traits::Listable;
