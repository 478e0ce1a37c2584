use serde::{Deserialize, Serialize};

/// Explicit context handed to every builder invocation
///
/// Carries the site the build runs for, so builders never consult
/// process-wide state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildContext {
    /// Id of the blog/site the indexable belongs to
    pub blog_id: u64,
}

impl BuildContext {
    /// Create a context for the given blog
    pub fn new(blog_id: u64) -> Self {
        Self { blog_id }
    }
}

impl Default for BuildContext {
    fn default() -> Self {
        Self { blog_id: 1 }
    }
}
