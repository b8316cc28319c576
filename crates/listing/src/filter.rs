//! The predicate evaluator: does a record match the active filters?
//!
//! A `FilterSpec` carries every filter dimension the listing pages
//! expose. Values inside a dimension are OR-combined, dimensions are
//! AND-combined, and an empty dimension constrains nothing.

use crate::traits::Listable;
use serde::{Deserialize, Serialize};

/// The full set of user-selected filter criteria.
///
/// Defaults to "no constraints": every record matches an empty spec.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Free-text query, matched case-insensitively as a substring of any
    /// of the record's search fields. Empty matches everything.
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub companies: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    /// When set, only verified profiles / active postings match.
    #[serde(default)]
    pub verified_only: bool,
    /// Inclusive [min, max] batch-year window.
    #[serde(default)]
    pub year_range: Option<(u16, u16)>,
}

impl FilterSpec {
    /// Create an unconstrained spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Spec with only a free-text query set.
    pub fn with_search(query: impl Into<String>) -> Self {
        Self {
            search: query.into(),
            ..Self::default()
        }
    }

    /// True when no dimension constrains anything.
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of constrained dimensions (shown as a badge in the UI).
    ///
    /// Multi-select dimensions count each selected value; the flag and the
    /// year range count once.
    pub fn active_count(&self) -> usize {
        let mut count = self.companies.len()
            + self.skills.len()
            + self.locations.len()
            + self.roles.len();
        if !self.search.trim().is_empty() {
            count += 1;
        }
        if self.verified_only {
            count += 1;
        }
        if self.year_range.is_some() {
            count += 1;
        }
        count
    }

    /// Evaluate this spec against one record.
    ///
    /// ## Algorithm
    /// 1. Free text: lowercase substring match against any search field
    /// 2. Each category dimension: selected values must intersect the
    ///    record's values for that dimension (empty selection passes)
    /// 3. Verified flag: when enabled, record's flag must be set
    /// 4. Year range: record's year must exist and fall inside [min, max]
    /// 5. AND everything together
    ///
    /// Pure function of its two inputs; records are never mutated.
    pub fn matches<R: Listable>(&self, record: &R) -> bool {
        self.matches_search(record)
            && dimension_matches(&self.companies, &record.companies())
            && dimension_matches(&self.skills, &record.skills())
            && dimension_matches(&self.locations, &record.locations())
            && dimension_matches(&self.roles, &record.roles())
            && (!self.verified_only || record.is_verified())
            && self.matches_year(record)
    }

    fn matches_search<R: Listable>(&self, record: &R) -> bool {
        let query = self.search.trim();
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }

    fn matches_year<R: Listable>(&self, record: &R) -> bool {
        match self.year_range {
            None => true,
            Some((min, max)) => match record.year() {
                Some(year) => year >= min && year <= max,
                None => false,
            },
        }
    }
}

/// One category dimension: empty selection is unconstrained, otherwise the
/// record's values must intersect the selection. Matching is exact — the
/// selected values come from the dataset itself (facet lists).
fn dimension_matches(selected: &[String], values: &[&str]) -> bool {
    selected.is_empty() || values.iter().any(|v| selected.iter().any(|s| s == v))
}
