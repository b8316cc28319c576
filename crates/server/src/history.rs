//! Session-scoped search history.
//!
//! The directory saves submitted queries so the search box can offer
//! them back. Bounded and de-duplicated: re-searching an old query moves
//! it to the front instead of adding a second copy.

/// Most-recent-first list of submitted search queries.
#[derive(Debug, Clone)]
pub struct SearchHistory {
    entries: Vec<String>,
    capacity: usize,
}

/// How many queries the search box offers back.
const DEFAULT_CAPACITY: usize = 10;

impl SearchHistory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Record a submitted query.
    pub fn push(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }

        self.entries.retain(|q| q != query);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(self.capacity);
    }

    /// All remembered queries, most recent first.
    pub fn recent(&self) -> &[String] {
        &self.entries
    }
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::new()
    }
}
