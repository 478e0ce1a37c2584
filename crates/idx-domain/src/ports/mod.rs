//! Domain Ports
//!
//! Contracts the pipeline consumes. Implementations live in the providers
//! crate or are supplied by the embedding platform.
//!
//! | Port | Description |
//! |------|-------------|
//! | [`repositories`] | Indexable and primary term persistence |
//! | [`helpers`] | Read-only access to content, meta and URLs |
//! | [`builders`] | Builder capability and designated builders |

pub mod builders;
pub mod helpers;
pub mod repositories;

pub use builders::{
    BuildStatus, DateArchiveBuilder, HierarchyBuilder, HomePageBuilder, IndexableBuilder,
    PostTypeArchiveBuilder, SystemPageBuilder,
};
pub use helpers::{
    AuthorArchiveHelper, AuthorMetaHelper, AvatarHelper, MetaHelper, PermalinkHelper,
    PrimaryTermHelper,
};
pub use repositories::{IndexableRepository, PrimaryTermRepository};
