//! `Listable` implementations for the directory record types.
//!
//! This is where the per-page filter shapes of the platform are unified:
//! each record type declares which of its fields feed which pipeline
//! dimension, and the pipeline never needs to know the concrete type.

use crate::traits::Listable;
use directory_data::{AlumniProfile, EventListing, JobPosting};

impl Listable for AlumniProfile {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        if let Some(headline) = &self.headline {
            fields.push(headline);
        }
        if let Some(company) = &self.current_company {
            fields.push(company);
        }
        if let Some(role) = &self.current_role {
            fields.push(role);
        }
        fields
    }

    fn companies(&self) -> Vec<&str> {
        self.current_company.as_deref().into_iter().collect()
    }

    fn skills(&self) -> Vec<&str> {
        self.skills.iter().map(String::as_str).collect()
    }

    fn locations(&self) -> Vec<&str> {
        self.location.as_deref().into_iter().collect()
    }

    fn roles(&self) -> Vec<&str> {
        self.current_role.as_deref().into_iter().collect()
    }

    fn is_verified(&self) -> bool {
        self.is_verified
    }

    fn year(&self) -> Option<u16> {
        self.batch_year
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn posted_at(&self) -> Option<i64> {
        self.last_active
    }

    fn popularity(&self) -> Option<f32> {
        Some(self.profile_views as f32)
    }
}

impl Listable for JobPosting {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.company.as_str()];
        if let Some(description) = &self.description {
            fields.push(description);
        }
        fields
    }

    fn companies(&self) -> Vec<&str> {
        vec![self.company.as_str()]
    }

    fn skills(&self) -> Vec<&str> {
        self.skills_required.iter().map(String::as_str).collect()
    }

    fn locations(&self) -> Vec<&str> {
        self.location.as_deref().into_iter().collect()
    }

    // Job type and experience level are both role-like tags; selecting
    // "internship" or "senior" in the role dimension narrows postings.
    fn roles(&self) -> Vec<&str> {
        vec![
            self.job_type.as_str(),
            self.experience_required.as_str(),
        ]
    }

    fn is_verified(&self) -> bool {
        self.is_active
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn posted_at(&self) -> Option<i64> {
        Some(self.created_at)
    }

    fn popularity(&self) -> Option<f32> {
        Some(self.views_count as f32)
    }
}

impl Listable for EventListing {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        if let Some(description) = &self.description {
            fields.push(description);
        }
        if let Some(location) = &self.location {
            fields.push(location);
        }
        fields
    }

    fn companies(&self) -> Vec<&str> {
        Vec::new()
    }

    fn skills(&self) -> Vec<&str> {
        Vec::new()
    }

    fn locations(&self) -> Vec<&str> {
        self.location.as_deref().into_iter().collect()
    }

    fn roles(&self) -> Vec<&str> {
        vec![self.event_type.as_str()]
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn posted_at(&self) -> Option<i64> {
        Some(self.start_date)
    }

    fn popularity(&self) -> Option<f32> {
        Some(self.current_attendees_count as f32)
    }
}
