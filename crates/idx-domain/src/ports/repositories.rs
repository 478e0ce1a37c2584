//! Repository ports
//!
//! Persistence boundary of the pipeline. Repositories are the sole arbiter
//! of durable state.

use crate::entities::{Indexable, PrimaryTerm};
use crate::error::Result;
use crate::value_objects::ObjectType;

/// Persistence of indexables
pub trait IndexableRepository: Send + Sync {
    /// Hydrate a new, unsaved indexable from initial field values
    ///
    /// Pass `Indexable::default()` for an empty record.
    fn create(&self, initial: Indexable) -> Result<Indexable>;

    /// Find the indexable of an object
    ///
    /// With `auto_create` a missing record is returned as a fresh unsaved
    /// indexable for the object instead of `None`.
    fn find_by_id_and_type(
        &self,
        object_id: u64,
        object_type: ObjectType,
        auto_create: bool,
    ) -> Result<Option<Indexable>>;

    /// Insert or update an indexable, assigning its storage id
    fn save(&self, indexable: &mut Indexable) -> Result<()>;

    /// Remove an indexable
    fn delete(&self, indexable: &Indexable) -> Result<()>;
}

/// Persistence of primary term associations
pub trait PrimaryTermRepository: Send + Sync {
    /// Find the primary term of a post in a taxonomy
    ///
    /// With `auto_create` a missing record is returned as a fresh unsaved
    /// association instead of `None`.
    fn find_by_post_id_and_taxonomy(
        &self,
        post_id: u64,
        taxonomy: &str,
        auto_create: bool,
    ) -> Result<Option<PrimaryTerm>>;

    /// Insert or update an association
    fn save(&self, primary_term: &mut PrimaryTerm) -> Result<()>;

    /// Remove an association
    fn delete(&self, primary_term: &PrimaryTerm) -> Result<()>;
}
