//! Domain Entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`Indexable`] | Derived SEO metadata of one content object |
//! | [`IndexableSnapshot`] | Read-only copy taken before a build |
//! | [`PrimaryTerm`] | Primary term chosen for a post in one taxonomy |

/// Indexable record and snapshot
pub mod indexable;
/// Primary term association
pub mod primary_term;

pub use indexable::{Indexable, IndexableKey, IndexableSnapshot};
pub use primary_term::PrimaryTerm;
