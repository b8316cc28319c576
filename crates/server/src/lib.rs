//! Server crate for the AlumLink directory backend.
//!
//! This crate contains the service that coordinates the catalog and the
//! listing pipeline, plus the role policy and search-history pieces the
//! listing pages need around it.

pub mod history;
pub mod policy;
pub mod service;

pub use history::SearchHistory;
pub use policy::{can_create_events, can_post_jobs, can_verify_profiles, UserRole};
pub use service::DirectoryService;
