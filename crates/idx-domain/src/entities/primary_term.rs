use serde::{Deserialize, Serialize};

/// Primary term selected for a post within one taxonomy
///
/// `(post_id, taxonomy)` identifies a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryTerm {
    /// Storage id, assigned on first save
    pub id: Option<u64>,
    /// Post the term is primary for
    pub post_id: u64,
    /// Selected term
    pub term_id: Option<u64>,
    /// Taxonomy name (e.g. `category`)
    pub taxonomy: String,
    /// Blog the record belongs to
    pub blog_id: Option<u64>,
}

impl PrimaryTerm {
    /// Create an unsaved record for a post and taxonomy
    pub fn new(post_id: u64, taxonomy: impl Into<String>) -> Self {
        Self {
            post_id,
            taxonomy: taxonomy.into(),
            ..Self::default()
        }
    }
}
