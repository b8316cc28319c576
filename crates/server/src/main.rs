//! Simple test harness for the directory service.
//!
//! This binary loads a dataset directory and runs a few representative
//! searches end to end, logging counts and timings.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use directory_data::DirectoryCatalog;
use listing::{FacetDimension, FilterSpec, PageRequest, SortKey};
use server::DirectoryService;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("info,server=debug,listing=debug,directory_data=debug")
        .init();

    info!("Starting AlumLink directory test harness");

    let data_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/directory"));

    info!("Loading catalog from {}...", data_dir.display());
    let catalog = tokio::task::spawn_blocking(move || DirectoryCatalog::load_from_dir(&data_dir))
        .await
        .context("Catalog load task panicked")?
        .context("Failed to load directory datasets")?;
    let catalog = Arc::new(catalog);
    info!("Catalog loaded");

    let mut service = DirectoryService::new(catalog);

    // Free-text search over the alumni directory
    let filters = FilterSpec::with_search("engineer");
    let result = service.search_alumni(&filters, SortKey::Name, PageRequest::first());
    info!(
        "'engineer' in alumni: {} matches across {} pages",
        result.total_results, result.total_pages
    );
    for profile in &result.data {
        info!(
            "  {} — {} @ {}",
            profile.name,
            profile.current_role.as_deref().unwrap_or("-"),
            profile.current_company.as_deref().unwrap_or("-"),
        );
    }

    // Recent job postings, active only
    let filters = FilterSpec {
        verified_only: true,
        ..FilterSpec::default()
    };
    let result = service.search_jobs(&filters, SortKey::Recent, PageRequest::first());
    info!("Active jobs, newest first: {} matches", result.total_results);
    for job in &result.data {
        info!("  {} at {}", job.title, job.company);
    }

    // Sidebar facets
    let skills = service.alumni_facets(FacetDimension::Skill);
    info!("Top alumni skills:");
    for (skill, count) in skills.iter().take(5) {
        info!("  {} ({})", skill, count);
    }

    Ok(())
}
