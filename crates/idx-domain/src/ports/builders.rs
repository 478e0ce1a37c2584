//! Builder ports
//!
//! [`IndexableBuilder`] is the capability every dispatchable builder
//! implements. The remaining traits are collaborators the build manager
//! calls directly for object kinds that skip dispatch.

use crate::entities::Indexable;
use crate::error::Result;
use crate::value_objects::{BuildContext, ObjectType};

/// Outcome of a single builder run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStatus {
    /// The indexable now holds a usable record
    Built,
    /// The builder intentionally produced no indexable content
    NoResult,
}

/// A component contributing fields of an indexable
///
/// `understands` and `priority` must be pure and stable for a given object
/// type. Lower priorities run first.
pub trait IndexableBuilder: Send + Sync {
    /// Name used in logs and reports
    fn name(&self) -> &str;

    /// Whether this builder handles the object type
    fn understands(&self, object_type: ObjectType) -> bool;

    /// Sort key for the object type, lower runs first
    fn priority(&self, object_type: ObjectType) -> i32;

    /// Build in place
    ///
    /// Returns `Err(Error::Builder { .. })` when the builder cannot produce
    /// a result for this object; other errors abort the build.
    fn build(
        &self,
        object_id: u64,
        indexable: &mut Indexable,
        context: &BuildContext,
    ) -> Result<BuildStatus>;
}

/// Ancestor hierarchy maintenance for posts and terms
pub trait HierarchyBuilder: Send + Sync {
    /// Rebuild the stored hierarchy of an indexable
    fn build(&self, indexable: &Indexable) -> Result<()>;
}

/// Designated builder for the home page
pub trait HomePageBuilder: Send + Sync {
    /// Fill the home page indexable
    fn build(&self, indexable: &mut Indexable, context: &BuildContext) -> Result<()>;
}

/// Designated builder for date archives
pub trait DateArchiveBuilder: Send + Sync {
    /// Fill the date archive indexable
    fn build(&self, indexable: &mut Indexable, context: &BuildContext) -> Result<()>;
}

/// Designated builder for post type archives
pub trait PostTypeArchiveBuilder: Send + Sync {
    /// Fill the archive indexable of a post type
    fn build(
        &self,
        post_type: &str,
        indexable: &mut Indexable,
        context: &BuildContext,
    ) -> Result<()>;
}

/// Designated builder for system pages
pub trait SystemPageBuilder: Send + Sync {
    /// Fill the indexable of a system page kind (e.g. `search-result`)
    fn build(
        &self,
        object_sub_type: &str,
        indexable: &mut Indexable,
        context: &BuildContext,
    ) -> Result<()>;
}
