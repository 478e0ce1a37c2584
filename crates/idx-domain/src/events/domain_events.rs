//! Event Publisher Domain Port
//!
//! Defines the contract for publishing pipeline events without coupling the
//! build manager to a specific transport.

use crate::constants::INDEXABLE_SAVED_EVENT;
use crate::entities::{Indexable, IndexableSnapshot};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Events emitted by the indexable pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DomainEvent {
    /// An indexable is about to be persisted
    IndexableSaved {
        /// Field values before the build ran
        before: IndexableSnapshot,
        /// Field values that are being saved
        after: Indexable,
    },
}

impl DomainEvent {
    /// Stable event name
    pub fn name(&self) -> &'static str {
        match self {
            Self::IndexableSaved { .. } => INDEXABLE_SAVED_EVENT,
        }
    }
}

/// Domain port for publishing pipeline events
///
/// Subscribers observe events; a failing publish must never fail the
/// pipeline, so callers log and drop publish errors.
pub trait EventPublisher: Send + Sync {
    /// Publish an event to all subscribers
    fn publish(&self, event: DomainEvent) -> Result<()>;

    /// Check if there are any active subscribers
    fn has_subscribers(&self) -> bool;
}

/// Shared event publisher for dependency injection
pub type SharedEventPublisher = Arc<dyn EventPublisher>;
