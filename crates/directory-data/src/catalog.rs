//! Catalog building and validation.
//!
//! This module loads the three dataset files into a `DirectoryCatalog`:
//! parse all files, insert records preserving file order, then validate
//! id uniqueness.

use crate::error::{DataError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

impl DirectoryCatalog {
    /// Load all directory datasets from a directory.
    ///
    /// Expects `alumni.jsonl`, `jobs.jsonl`, and `events.jsonl` inside
    /// `data_dir`. The three files are parsed in parallel with nested
    /// `rayon::join`.
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        let profiles_path = data_dir.join("alumni.jsonl");
        let jobs_path = data_dir.join("jobs.jsonl");
        let events_path = data_dir.join("events.jsonl");

        let ((profiles, jobs), events) = rayon::join(
            || {
                rayon::join(
                    || parser::parse_profiles(&profiles_path),
                    || parser::parse_jobs(&jobs_path),
                )
            },
            || parser::parse_events(&events_path),
        );

        let profiles = profiles?;
        let jobs = jobs?;
        let events = events?;

        info!(
            "Parsed {} profiles, {} jobs, {} events from {}",
            profiles.len(),
            jobs.len(),
            events.len(),
            data_dir.display()
        );

        let mut catalog = DirectoryCatalog::new();
        for profile in profiles {
            catalog.insert_profile(profile);
        }
        for job in jobs {
            catalog.insert_job(job);
        }
        for event in events {
            catalog.insert_event(event);
        }

        catalog.validate()?;
        Ok(catalog)
    }

    /// Validate catalog integrity.
    ///
    /// Ids must be unique per dataset. Insertion overwrites the position
    /// map on duplicates, so this re-walks the raw Vecs rather than
    /// trusting the maps.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for profile in &self.profiles {
            if !seen.insert(profile.id) {
                return Err(DataError::DuplicateId {
                    entity: "profile",
                    id: profile.id,
                });
            }
        }

        seen.clear();
        for job in &self.jobs {
            if !seen.insert(job.id) {
                return Err(DataError::DuplicateId {
                    entity: "job",
                    id: job.id,
                });
            }
        }

        seen.clear();
        for event in &self.events {
            if !seen.insert(event.id) {
                return Err(DataError::DuplicateId {
                    entity: "event",
                    id: event.id,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_profile(id: ProfileId, name: &str) -> AlumniProfile {
        AlumniProfile {
            id,
            name: name.to_string(),
            headline: None,
            current_company: None,
            current_role: None,
            location: None,
            skills: vec![],
            batch_year: None,
            is_verified: false,
            willing_to_mentor: false,
            photo_url: None,
            last_active: None,
            profile_views: 0,
        }
    }

    #[test]
    fn test_validate_accepts_unique_ids() {
        let mut catalog = DirectoryCatalog::new();
        catalog.insert_profile(test_profile(1, "Ann"));
        catalog.insert_profile(test_profile(2, "Bob"));

        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut catalog = DirectoryCatalog::new();
        catalog.insert_profile(test_profile(1, "Ann"));
        catalog.insert_profile(test_profile(1, "Imposter Ann"));

        let err = catalog.validate().unwrap_err();
        assert!(matches!(
            err,
            DataError::DuplicateId {
                entity: "profile",
                id: 1
            }
        ));
    }

    #[test]
    fn test_insert_preserves_file_order() {
        let mut catalog = DirectoryCatalog::new();
        catalog.insert_profile(test_profile(5, "Cid"));
        catalog.insert_profile(test_profile(3, "Ann"));
        catalog.insert_profile(test_profile(9, "Bob"));

        let names: Vec<_> = catalog.profiles().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Cid", "Ann", "Bob"]);
        assert_eq!(catalog.get_profile(3).unwrap().name, "Ann");
    }
}
