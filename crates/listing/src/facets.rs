//! Facet extraction for the filter sidebar.
//!
//! The sidebar offers the distinct values present in the dataset for each
//! category dimension, with occurrence counts. Counts are computed over
//! whatever snapshot the caller passes, so they can reflect an already
//! narrowed result just as well as the full catalog.

use crate::traits::Listable;
use std::collections::HashMap;

/// Category dimensions that have selectable facet values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetDimension {
    Company,
    Skill,
    Location,
    Role,
}

impl FacetDimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            FacetDimension::Company => "company",
            FacetDimension::Skill => "skill",
            FacetDimension::Location => "location",
            FacetDimension::Role => "role",
        }
    }
}

/// Distinct values and how many records carry each one.
///
/// Ordered by count descending, then value ascending, so the sidebar shows
/// the most useful options first and the order is deterministic.
pub fn facet_counts<R: Listable>(records: &[R], dimension: FacetDimension) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for record in records {
        let values = match dimension {
            FacetDimension::Company => record.companies(),
            FacetDimension::Skill => record.skills(),
            FacetDimension::Location => record.locations(),
            FacetDimension::Role => record.roles(),
        };
        for value in values {
            *counts.entry(value.to_string()).or_insert(0) += 1;
        }
    }

    let mut facets: Vec<(String, usize)> = counts.into_iter().collect();
    facets.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    facets
}

#[cfg(test)]
mod tests {
    use super::*;
    use directory_data::AlumniProfile;

    fn profile(id: u32, company: &str, skills: &[&str]) -> AlumniProfile {
        AlumniProfile {
            id,
            name: format!("P{}", id),
            headline: None,
            current_company: Some(company.to_string()),
            current_role: None,
            location: None,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            batch_year: None,
            is_verified: false,
            willing_to_mentor: false,
            photo_url: None,
            last_active: None,
            profile_views: 0,
        }
    }

    #[test]
    fn test_facet_counts_ordering() {
        let records = vec![
            profile(1, "Acme", &["rust"]),
            profile(2, "Acme", &["rust", "sql"]),
            profile(3, "Globex", &["sql"]),
        ];

        let companies = facet_counts(&records, FacetDimension::Company);
        assert_eq!(
            companies,
            vec![("Acme".to_string(), 2), ("Globex".to_string(), 1)]
        );

        // rust and sql tie on count; value order breaks the tie
        let skills = facet_counts(&records, FacetDimension::Skill);
        assert_eq!(
            skills,
            vec![("rust".to_string(), 2), ("sql".to_string(), 2)]
        );
    }

    #[test]
    fn test_empty_dimension_yields_no_facets() {
        let records = vec![profile(1, "Acme", &[])];
        assert!(facet_counts(&records, FacetDimension::Skill).is_empty());
        assert!(facet_counts(&records, FacetDimension::Role).is_empty());
    }
}
