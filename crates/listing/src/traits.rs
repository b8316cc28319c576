//! Core trait for the listing pipeline.
//!
//! The directory, job board, and events pages all run the same
//! filter/sort/paginate pipeline over different record types. `Listable`
//! is the seam: it maps a record's fields onto the pipeline's filter
//! dimensions and sort keys so the pipeline itself stays generic.

/// A record that can flow through the listing pipeline.
///
/// Dimension accessors return every value a record carries for that
/// dimension (scalar fields become zero-or-one-element Vecs). A record
/// type that does not have a dimension returns an empty Vec / `None` /
/// `false`; constraining such a dimension then matches nothing, which is
/// exactly the AND semantics the filter wants.
pub trait Listable {
    /// Fields the free-text search runs over (name, headline, company, ...).
    fn search_fields(&self) -> Vec<&str>;

    /// Company names associated with the record.
    fn companies(&self) -> Vec<&str>;

    /// Skill tags associated with the record.
    fn skills(&self) -> Vec<&str>;

    /// Locations associated with the record.
    fn locations(&self) -> Vec<&str>;

    /// Role-like tags: current role for profiles, job type and experience
    /// level for postings, event type for events.
    fn roles(&self) -> Vec<&str>;

    /// Verified flag (profiles) or active flag (postings). Record types
    /// without such a flag report `false` and are excluded by a
    /// verified-only filter.
    fn is_verified(&self) -> bool {
        false
    }

    /// Batch/graduation year, when the record has one.
    fn year(&self) -> Option<u16> {
        None
    }

    /// Display name, used by the alphabetical sort.
    fn display_name(&self) -> &str;

    /// Timestamp for the recency sort (creation, last activity, start).
    fn posted_at(&self) -> Option<i64> {
        None
    }

    /// Derived popularity score for the popularity sort.
    fn popularity(&self) -> Option<f32> {
        None
    }
}
