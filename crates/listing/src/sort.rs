//! The comparator selector: map a sort key onto a stable ordering.
//!
//! Every comparator is total, and missing sort-field values go last
//! regardless of direction so their placement is deterministic. Sorting
//! uses `slice::sort_by`, which is stable: ties keep input order, and
//! re-sorting an already-sorted sequence leaves it untouched.

use crate::traits::Listable;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Which ordering the caller asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Alphabetical by display name, case-insensitive, ascending.
    Name,
    /// Most recent first, by the record's timestamp.
    Recent,
    /// Highest popularity score first.
    Popular,
    /// Input order preserved. Also the fallback for unrecognized keys.
    #[default]
    Unsorted,
}

impl SortKey {
    /// Parse a sort token from an external boundary (query string, CLI).
    ///
    /// Unrecognized tokens fall back to `Unsorted` — a bad sort parameter
    /// must not fail the whole listing.
    pub fn parse_lenient(token: &str) -> Self {
        match token.trim().to_lowercase().as_str() {
            "name" => SortKey::Name,
            "recent" => SortKey::Recent,
            "popular" => SortKey::Popular,
            _ => SortKey::Unsorted,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Recent => "recent",
            SortKey::Popular => "popular",
            SortKey::Unsorted => "unsorted",
        }
    }
}

/// Sort records in place according to `key`.
pub fn sort_records<R: Listable>(records: &mut [R], key: SortKey) {
    match key {
        SortKey::Name => records.sort_by(cmp_name),
        SortKey::Recent => records.sort_by(cmp_recent),
        SortKey::Popular => records.sort_by(cmp_popular),
        SortKey::Unsorted => {}
    }
}

fn cmp_name<R: Listable>(a: &R, b: &R) -> Ordering {
    a.display_name()
        .to_lowercase()
        .cmp(&b.display_name().to_lowercase())
}

/// Descending by timestamp; records without one go last.
fn cmp_recent<R: Listable>(a: &R, b: &R) -> Ordering {
    match (a.posted_at(), b.posted_at()) {
        (Some(ta), Some(tb)) => tb.cmp(&ta),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Descending by popularity; records without a score (or with NaN) go last.
fn cmp_popular<R: Listable>(a: &R, b: &R) -> Ordering {
    let score = |r: &R| r.popularity().filter(|s| !s.is_nan());
    match (score(a), score(b)) {
        (Some(sa), Some(sb)) => sb.partial_cmp(&sa).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal record for exercising the comparators in isolation.
    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        at: Option<i64>,
        score: Option<f32>,
    }

    impl Listable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name]
        }
        fn companies(&self) -> Vec<&str> {
            Vec::new()
        }
        fn skills(&self) -> Vec<&str> {
            Vec::new()
        }
        fn locations(&self) -> Vec<&str> {
            Vec::new()
        }
        fn roles(&self) -> Vec<&str> {
            Vec::new()
        }
        fn display_name(&self) -> &str {
            self.name
        }
        fn posted_at(&self) -> Option<i64> {
            self.at
        }
        fn popularity(&self) -> Option<f32> {
            self.score
        }
    }

    fn row(name: &'static str, at: Option<i64>, score: Option<f32>) -> Row {
        Row { name, at, score }
    }

    #[test]
    fn test_parse_lenient_falls_back_to_unsorted() {
        assert_eq!(SortKey::parse_lenient("name"), SortKey::Name);
        assert_eq!(SortKey::parse_lenient(" Recent "), SortKey::Recent);
        assert_eq!(SortKey::parse_lenient("popular"), SortKey::Popular);
        assert_eq!(SortKey::parse_lenient("relevance??"), SortKey::Unsorted);
        assert_eq!(SortKey::parse_lenient(""), SortKey::Unsorted);
    }

    #[test]
    fn test_name_sort_is_case_insensitive() {
        let mut rows = vec![
            row("bob", None, None),
            row("Ann", None, None),
            row("cid", None, None),
        ];
        sort_records(&mut rows, SortKey::Name);
        let names: Vec<_> = rows.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Ann", "bob", "cid"]);
    }

    #[test]
    fn test_recent_sort_puts_missing_timestamps_last() {
        let mut rows = vec![
            row("a", None, None),
            row("b", Some(100), None),
            row("c", Some(300), None),
            row("d", Some(200), None),
        ];
        sort_records(&mut rows, SortKey::Recent);
        let names: Vec<_> = rows.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["c", "d", "b", "a"]);
    }

    #[test]
    fn test_popular_sort_treats_nan_as_missing() {
        let mut rows = vec![
            row("a", None, Some(f32::NAN)),
            row("b", None, Some(5.0)),
            row("c", None, Some(9.0)),
        ];
        sort_records(&mut rows, SortKey::Popular);
        let names: Vec<_> = rows.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let mut rows = vec![
            row("ann", Some(100), None),
            row("Ann", Some(100), None),
            row("ANN", Some(100), None),
        ];
        let before: Vec<_> = rows.iter().map(|r| r.name).collect();

        sort_records(&mut rows, SortKey::Name);
        let after: Vec<_> = rows.iter().map(|r| r.name).collect();
        assert_eq!(after, before);

        sort_records(&mut rows, SortKey::Recent);
        let after: Vec<_> = rows.iter().map(|r| r.name).collect();
        assert_eq!(after, before);
    }

    #[test]
    fn test_resorting_sorted_input_is_idempotent() {
        let mut rows = vec![
            row("d", Some(4), Some(1.0)),
            row("a", Some(1), Some(4.0)),
            row("c", Some(3), Some(2.0)),
            row("b", Some(2), Some(3.0)),
        ];
        sort_records(&mut rows, SortKey::Popular);
        let once = rows.clone();
        sort_records(&mut rows, SortKey::Popular);
        assert_eq!(rows, once);
    }

    #[test]
    fn test_unsorted_preserves_input_order() {
        let mut rows = vec![
            row("z", Some(1), None),
            row("a", Some(9), None),
        ];
        let before = rows.clone();
        sort_records(&mut rows, SortKey::Unsorted);
        assert_eq!(rows, before);
    }
}
