//! In-memory primary term repository

use dashmap::DashMap;
use idx_domain::PrimaryTerm;
use idx_domain::error::Result;
use idx_domain::ports::PrimaryTermRepository;
use std::sync::atomic::{AtomicU64, Ordering};

type TermKey = (u64, String);

/// In-memory primary term repository keyed by `(post_id, taxonomy)`
pub struct InMemoryPrimaryTermRepository {
    rows: DashMap<TermKey, PrimaryTerm>,
    next_id: AtomicU64,
}

impl InMemoryPrimaryTermRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Stored association of a post in a taxonomy
    pub fn get(&self, post_id: u64, taxonomy: &str) -> Option<PrimaryTerm> {
        self.rows
            .get(&(post_id, taxonomy.to_string()))
            .map(|row| row.clone())
    }

    /// Number of stored associations
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether nothing is stored
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Default for InMemoryPrimaryTermRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PrimaryTermRepository for InMemoryPrimaryTermRepository {
    fn find_by_post_id_and_taxonomy(
        &self,
        post_id: u64,
        taxonomy: &str,
        auto_create: bool,
    ) -> Result<Option<PrimaryTerm>> {
        Ok(self
            .get(post_id, taxonomy)
            .or_else(|| auto_create.then(|| PrimaryTerm::new(post_id, taxonomy))))
    }

    fn save(&self, primary_term: &mut PrimaryTerm) -> Result<()> {
        let key = (primary_term.post_id, primary_term.taxonomy.clone());
        if primary_term.id.is_none() {
            let existing = self.rows.get(&key).and_then(|row| row.id);
            primary_term.id =
                Some(existing.unwrap_or_else(|| self.next_id.fetch_add(1, Ordering::Relaxed)));
        }
        self.rows.insert(key, primary_term.clone());
        Ok(())
    }

    fn delete(&self, primary_term: &PrimaryTerm) -> Result<()> {
        self.rows
            .remove(&(primary_term.post_id, primary_term.taxonomy.clone()));
        Ok(())
    }
}
