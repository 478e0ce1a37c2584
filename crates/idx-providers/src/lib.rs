//! # SEO Indexables - Provider Implementations
//!
//! Implementations of the domain ports for standalone use and tests.
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Repository | `IndexableRepository`, `PrimaryTermRepository` | InMemory |
//! | Content | `MetaHelper`, `AuthorMetaHelper`, ... | FixtureContentStore |
//! | Events | `EventPublisher` | TokioBroadcast, Null |

// Re-export idx-domain types commonly used with providers
pub use idx_domain::error::{Error, Result};

/// In-memory repositories
pub mod repository;

/// Fixture-backed content helpers
pub mod content;

/// Event publishers
pub mod events;

pub use content::{ContentFixture, FixtureContentStore, PostFixture, UserFixture};
pub use events::{NullEventPublisher, TokioBroadcastEventBus};
pub use repository::{InMemoryIndexableRepository, InMemoryPrimaryTermRepository};
