//! Domain Events
//!
//! Events emitted by the build pipeline and the port used to publish them.

/// Event types and publisher port
pub mod domain_events;

pub use domain_events::{DomainEvent, EventPublisher, SharedEventPublisher};
