//! In-memory indexable repository
//!
//! Rows are keyed by object identity (type, id, sub type), so saving a fresh
//! record for an object that already has one updates the stored row.

use dashmap::DashMap;
use idx_domain::entities::IndexableKey;
use idx_domain::error::{Error, Result};
use idx_domain::ports::IndexableRepository;
use idx_domain::{Indexable, ObjectType};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::trace;

/// In-memory indexable repository
pub struct InMemoryIndexableRepository {
    rows: DashMap<IndexableKey, Indexable>,
    keys: DashMap<u64, IndexableKey>,
    next_id: AtomicU64,
}

impl InMemoryIndexableRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
            keys: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Number of stored indexables
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether nothing is stored
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Stored indexable by storage id
    pub fn get(&self, id: u64) -> Option<Indexable> {
        let key = self.keys.get(&id)?.clone();
        self.rows.get(&key).map(|row| row.clone())
    }

    /// All stored indexables, ordered by storage id
    pub fn all(&self) -> Vec<Indexable> {
        let mut rows: Vec<_> = self.rows.iter().map(|row| row.value().clone()).collect();
        rows.sort_by_key(|row| row.id);
        rows
    }
}

impl Default for InMemoryIndexableRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexableRepository for InMemoryIndexableRepository {
    fn create(&self, initial: Indexable) -> Result<Indexable> {
        Ok(initial)
    }

    fn find_by_id_and_type(
        &self,
        object_id: u64,
        object_type: ObjectType,
        auto_create: bool,
    ) -> Result<Option<Indexable>> {
        let found = self
            .rows
            .iter()
            .filter(|row| {
                row.key().object_type == object_type && row.key().object_id == Some(object_id)
            })
            .map(|row| row.value().clone())
            .min_by_key(|row| row.id);

        match found {
            Some(row) => Ok(Some(row)),
            None if auto_create => Ok(Some(Indexable::for_object(object_id, object_type))),
            None => Ok(None),
        }
    }

    fn save(&self, indexable: &mut Indexable) -> Result<()> {
        let key = indexable
            .key()
            .ok_or_else(|| Error::persist("Cannot save an indexable without object type"))?;

        let id = match indexable.id {
            Some(id) => id,
            None => self
                .rows
                .get(&key)
                .and_then(|row| row.id)
                .unwrap_or_else(|| self.next_id.fetch_add(1, Ordering::Relaxed)),
        };
        indexable.id = Some(id);

        if let Some((_, previous_key)) = self.keys.remove(&id) {
            if previous_key != key {
                self.rows.remove(&previous_key);
            }
        }
        if let Some(replaced) = self.rows.insert(key.clone(), indexable.clone()) {
            if let Some(replaced_id) = replaced.id.filter(|replaced_id| *replaced_id != id) {
                self.keys.remove(&replaced_id);
            }
        }
        self.keys.insert(id, key);

        trace!(id, "Saved indexable");
        Ok(())
    }

    fn delete(&self, indexable: &Indexable) -> Result<()> {
        if let Some(key) = indexable.key() {
            if let Some((_, removed)) = self.rows.remove(&key) {
                if let Some(id) = removed.id {
                    self.keys.remove(&id);
                }
            }
        }
        Ok(())
    }
}
