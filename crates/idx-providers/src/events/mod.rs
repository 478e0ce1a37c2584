//! Event publisher implementations

/// Discarding publisher
pub mod null;
/// In-process broadcast bus
pub mod tokio;

pub use null::NullEventPublisher;
pub use tokio::TokioBroadcastEventBus;
