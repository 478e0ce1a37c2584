//! In-memory repository implementations
//!
//! Data is not persisted and will be lost on restart.

/// Indexable repository
pub mod indexable;
/// Primary term repository
pub mod primary_term;

pub use indexable::InMemoryIndexableRepository;
pub use primary_term::InMemoryPrimaryTermRepository;
