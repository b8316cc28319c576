//! Parser for directory dataset files.
//!
//! Datasets are JSON Lines: one record per line, which keeps parse errors
//! attributable to a file and line number. The three files are:
//! - alumni.jsonl: one `AlumniProfile` per line
//! - jobs.jsonl: one `JobPosting` per line
//! - events.jsonl: one `EventListing` per line

use crate::error::{DataError, Result};
use crate::types::*;
use rayon::prelude::*;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Parse one JSONL file into a Vec of records.
///
/// Blank lines are skipped. Lines are deserialized in parallel with Rayon;
/// on failure one of the offending lines is reported with its line number.
fn parse_jsonl<T>(path: &Path) -> Result<Vec<T>>
where
    T: DeserializeOwned + Send,
{
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DataError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataError::Io(e),
    })?;

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|(idx, line)| {
            serde_json::from_str::<T>(line).map_err(|e| DataError::Parse {
                file: file_name.clone(),
                line: idx + 1,
                reason: e.to_string(),
            })
        })
        .collect()
}

/// Parse the alumni.jsonl file.
pub fn parse_profiles(path: &Path) -> Result<Vec<AlumniProfile>> {
    parse_jsonl(path)
}

/// Parse the jobs.jsonl file.
pub fn parse_jobs(path: &Path) -> Result<Vec<JobPosting>> {
    parse_jsonl(path)
}

/// Parse the events.jsonl file.
pub fn parse_events(path: &Path) -> Result<Vec<EventListing>> {
    parse_jsonl(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("directory-data-test-{}-{}", std::process::id(), name));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_parse_profiles() {
        let path = write_temp(
            "profiles.jsonl",
            r#"{"id":1,"name":"Ann Park","headline":"Backend engineer","current_company":"Acme","current_role":"Engineer","location":"Berlin","skills":["rust","sql"],"batch_year":2019,"is_verified":true,"willing_to_mentor":false,"photo_url":null,"last_active":1700000000,"profile_views":42}
{"id":2,"name":"Bob Lin","headline":null,"current_company":null,"current_role":null,"location":null,"batch_year":null,"photo_url":null,"last_active":null}
"#,
        );

        let profiles = parse_profiles(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].name, "Ann Park");
        assert_eq!(profiles[0].skills, vec!["rust", "sql"]);
        assert_eq!(profiles[0].batch_year, Some(2019));
        // Missing optional collections and flags fall back to defaults
        assert!(profiles[1].skills.is_empty());
        assert!(!profiles[1].is_verified);
        assert_eq!(profiles[1].profile_views, 0);
    }

    #[test]
    fn test_parse_jobs_enums() {
        let path = write_temp(
            "jobs.jsonl",
            r#"{"id":10,"title":"Platform Engineer","company":"Acme","location":"Remote","job_type":"full-time","experience_required":"senior","skills_required":["go"],"salary_range":"$150k-$180k","description":null,"created_at":1700000000,"views_count":7}
"#,
        );

        let jobs = parse_jobs(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].job_type, JobType::FullTime);
        assert_eq!(jobs[0].experience_required, ExperienceLevel::Senior);
        // is_active defaults to true when the provider omits it
        assert!(jobs[0].is_active);
    }

    #[test]
    fn test_parse_error_carries_line_number() {
        let path = write_temp(
            "bad.jsonl",
            r#"{"id":1,"name":"Ok","headline":null,"current_company":null,"current_role":null,"location":null,"batch_year":null,"photo_url":null,"last_active":null}
{"id":"not-a-number"}
"#,
        );

        let err = parse_profiles(&path).unwrap_err();
        fs::remove_file(&path).ok();

        match err {
            DataError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = parse_events(Path::new("/nonexistent/events.jsonl")).unwrap_err();
        assert!(matches!(err, DataError::FileNotFound { .. }));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let path = write_temp(
            "events.jsonl",
            "\n{\"id\":1,\"title\":\"Reunion 2026\",\"description\":null,\"event_type\":\"reunion\",\"location\":\"Campus\",\"start_date\":1760000000,\"max_attendees\":200,\"banner_image\":null}\n\n",
        );

        let events = parse_events(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, EventType::Reunion);
    }
}
