//! # Directory Data Crate
//!
//! This crate handles loading and holding the alumni directory datasets.
//!
//! ## Main Components
//!
//! - **types**: Record schemas (AlumniProfile, JobPosting, EventListing)
//!   and the DirectoryCatalog that owns them
//! - **parser**: Parse JSON Lines dataset files into records
//! - **catalog**: Load-from-directory and integrity validation
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use directory_data::DirectoryCatalog;
//! use std::path::Path;
//!
//! let catalog = DirectoryCatalog::load_from_dir(Path::new("data/directory"))?;
//!
//! let (profiles, jobs, events) = catalog.counts();
//! println!("{} profiles, {} jobs, {} events", profiles, jobs, events);
//! ```
//!
//! The catalog owns the records; accessors hand out borrowed slices in
//! load order. Nothing downstream mutates a loaded record.

// Public modules
pub mod catalog;
pub mod error;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{DataError, Result};
pub use types::{
    // Type aliases
    ProfileId,
    JobId,
    EventId,
    // Core types
    AlumniProfile,
    JobPosting,
    EventListing,
    DirectoryCatalog,
    // Enums
    JobType,
    ExperienceLevel,
    EventType,
};
