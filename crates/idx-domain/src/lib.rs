//! # Domain Layer
//!
//! Core types and contracts for building SEO indexables.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | `Indexable` and `PrimaryTerm` records |
//! | [`value_objects`] | Object types, build context, social images |
//! | [`events`] | Domain events and the publisher port |
//! | [`ports`] | Repository, helper and builder contracts |
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Meta keys and well-known values |

pub mod constants;
pub mod entities;
pub mod error;
pub mod events;
pub mod ports;
pub mod value_objects;

pub use entities::{Indexable, IndexableSnapshot, PrimaryTerm};
pub use error::{Error, Result};
pub use events::{DomainEvent, EventPublisher};
pub use value_objects::{BuildContext, ObjectType, SocialImage};
