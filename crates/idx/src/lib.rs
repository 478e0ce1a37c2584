//! # SEO Indexables
//!
//! Computes and stores a derived "indexable" record per content object by
//! running every builder that understands the object's type, in priority
//! order, and wires those builders together through variadic capability
//! injection.
//!
//! ## Example
//!
//! ```ignore
//! use idx::infrastructure::{AppConfig, AppContext};
//! use idx::ObjectType;
//!
//! let context = AppContext::build(AppConfig::default())?;
//! let indexable = context
//!     .build_manager()?
//!     .build_for_id_and_type(42, ObjectType::User, None)?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - entities, events, error type and ports
//! - `application` - builders, build manager and component entries
//! - `providers` - in-memory repositories, fixture content, event bus
//! - `infrastructure` - config, logging, registry, resolver and container

/// Domain layer - entities, events and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use idx_domain::*;
}

/// Application layer - builders and the build manager
pub mod application {
    pub use idx_application::*;
}

/// Providers - repositories, content and event publishers
pub mod providers {
    pub use idx_providers::*;
}

/// Infrastructure layer - config, logging and component wiring
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use idx_infrastructure::*;
}

pub mod cli;

// Re-export commonly used domain types at the crate root
pub use domain::*;

pub use cli::{Cli, Command};
