//! Value Objects
//!
//! Immutable values shared by entities, builders and ports.

/// Object type of an indexable
pub mod object_type;
/// Per-request build context
pub mod context;
/// Social image candidates
pub mod social_image;

pub use context::BuildContext;
pub use object_type::ObjectType;
pub use social_image::SocialImage;
