//! Core domain types for the alumni directory datasets.
//!
//! This module defines the record schemas for the three listing datasets
//! (alumni profiles, job postings, event listings) and the in-memory
//! catalog that owns them. Optional fields are explicit `Option<T>`s —
//! records arrive from external providers and rarely fill every field.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================
// These make the domain clearer and prevent mixing up entity ids

/// Unique identifier for an alumni profile
pub type ProfileId = u32;

/// Unique identifier for a job posting
pub type JobId = u32;

/// Unique identifier for an event listing
pub type EventId = u32;

// =============================================================================
// Alumni Profiles
// =============================================================================

/// A single alumni profile as published in the directory.
///
/// Records are read-only snapshots; nothing in this workspace mutates a
/// profile after it has been loaded into the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlumniProfile {
    pub id: ProfileId,
    pub name: String,
    /// Short self-description shown under the name (e.g., "Backend engineer")
    pub headline: Option<String>,
    pub current_company: Option<String>,
    pub current_role: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Graduation year
    pub batch_year: Option<u16>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub willing_to_mentor: bool,
    pub photo_url: Option<String>,
    /// Unix timestamp of the profile's last activity
    pub last_active: Option<i64>,
    /// Lifetime view counter, used as the popularity signal
    #[serde(default)]
    pub profile_views: u32,
}

// =============================================================================
// Job Postings
// =============================================================================

/// A job posting published on the platform's job board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub job_type: JobType,
    pub experience_required: ExperienceLevel,
    #[serde(default)]
    pub skills_required: Vec<String>,
    pub salary_range: Option<String>,
    pub description: Option<String>,
    /// Unix timestamp when the posting was created
    pub created_at: i64,
    #[serde(default)]
    pub applications_count: u32,
    #[serde(default)]
    pub views_count: u32,
    /// Postings are soft-closed rather than deleted
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Employment type of a job posting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Internship,
    Contract,
}

impl JobType {
    /// Wire/display form, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Internship => "internship",
            JobType::Contract => "contract",
        }
    }
}

/// Seniority bucket required by a job posting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Lead,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Lead => "lead",
        }
    }
}

// =============================================================================
// Event Listings
// =============================================================================

/// A community event (reunion, webinar, career fair, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventListing {
    pub id: EventId,
    pub title: String,
    pub description: Option<String>,
    pub event_type: EventType,
    pub location: Option<String>,
    #[serde(default)]
    pub is_virtual: bool,
    /// Unix timestamp of the event start
    pub start_date: i64,
    pub max_attendees: Option<u32>,
    #[serde(default)]
    pub current_attendees_count: u32,
    pub banner_image: Option<String>,
}

/// Category of a community event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    Reunion,
    Webinar,
    Workshop,
    Networking,
    CareerFair,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Reunion => "reunion",
            EventType::Webinar => "webinar",
            EventType::Workshop => "workshop",
            EventType::Networking => "networking",
            EventType::CareerFair => "career-fair",
        }
    }
}

// =============================================================================
// DirectoryCatalog - The In-Memory Record Store
// =============================================================================

/// Owns all loaded records and provides id lookups.
///
/// Records are kept in file order. Input order is part of the listing
/// contract: the query pipeline's stable sort and its `Unsorted` fallback
/// both preserve it, so the catalog must not reorder on insert.
#[derive(Debug, Default)]
pub struct DirectoryCatalog {
    pub(crate) profiles: Vec<AlumniProfile>,
    pub(crate) jobs: Vec<JobPosting>,
    pub(crate) events: Vec<EventListing>,

    // id -> position lookups
    pub(crate) profile_positions: HashMap<ProfileId, usize>,
    pub(crate) job_positions: HashMap<JobId, usize>,
    pub(crate) event_positions: HashMap<EventId, usize>,
}

impl DirectoryCatalog {
    /// Creates a new, empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// All alumni profiles, in load order.
    pub fn profiles(&self) -> &[AlumniProfile] {
        &self.profiles
    }

    /// All job postings, in load order.
    pub fn jobs(&self) -> &[JobPosting] {
        &self.jobs
    }

    /// All event listings, in load order.
    pub fn events(&self) -> &[EventListing] {
        &self.events
    }

    /// Get a profile by id.
    pub fn get_profile(&self, id: ProfileId) -> Option<&AlumniProfile> {
        self.profile_positions.get(&id).map(|&i| &self.profiles[i])
    }

    /// Get a job posting by id.
    pub fn get_job(&self, id: JobId) -> Option<&JobPosting> {
        self.job_positions.get(&id).map(|&i| &self.jobs[i])
    }

    /// Get an event listing by id.
    pub fn get_event(&self, id: EventId) -> Option<&EventListing> {
        self.event_positions.get(&id).map(|&i| &self.events[i])
    }

    /// Insert a profile at the end of the load order.
    pub fn insert_profile(&mut self, profile: AlumniProfile) {
        self.profile_positions
            .insert(profile.id, self.profiles.len());
        self.profiles.push(profile);
    }

    /// Insert a job posting at the end of the load order.
    pub fn insert_job(&mut self, job: JobPosting) {
        self.job_positions.insert(job.id, self.jobs.len());
        self.jobs.push(job);
    }

    /// Insert an event listing at the end of the load order.
    pub fn insert_event(&mut self, event: EventListing) {
        self.event_positions.insert(event.id, self.events.len());
        self.events.push(event);
    }

    /// Record counts for logging/validation: (profiles, jobs, events).
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.profiles.len(), self.jobs.len(), self.events.len())
    }
}
