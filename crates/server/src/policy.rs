//! Role-based capability checks.
//!
//! The current user's role is always an explicit argument. Nothing here
//! reads ambient per-process state, so the same service instance can
//! answer for different callers.

use serde::{Deserialize, Serialize};

/// Who is asking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Alumni,
    Recruiter,
    Admin,
}

/// Alumni and recruiters publish postings; admins can as well.
pub fn can_post_jobs(role: UserRole) -> bool {
    matches!(role, UserRole::Alumni | UserRole::Recruiter | UserRole::Admin)
}

/// Community events are hosted by alumni or platform admins.
pub fn can_create_events(role: UserRole) -> bool {
    matches!(role, UserRole::Alumni | UserRole::Admin)
}

/// Only admins hand out the verified badge.
pub fn can_verify_profiles(role: UserRole) -> bool {
    matches!(role, UserRole::Admin)
}
