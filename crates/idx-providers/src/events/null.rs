//! Null event publisher

use idx_domain::error::Result;
use idx_domain::events::{DomainEvent, EventPublisher};
use std::sync::Arc;

/// Discards all published events
///
/// Used when event publishing is disabled in configuration.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEventPublisher;

impl NullEventPublisher {
    /// Create a new null publisher
    pub fn new() -> Self {
        Self
    }

    /// Create as Arc for sharing
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

impl EventPublisher for NullEventPublisher {
    fn publish(&self, _event: DomainEvent) -> Result<()> {
        Ok(())
    }

    fn has_subscribers(&self) -> bool {
        false
    }
}
