//! Component wiring
//!
//! ```text
//! COMPONENTS (linkme) → ComponentRegistry → VariadicInjectionResolver
//!                                                   │ bindings
//!                                                   ▼
//!                       Services ──────────→ ComponentContainer → AppContext
//! ```
//!
//! The resolver only records bindings; the container realizes them.

pub mod bootstrap;
pub mod container;
pub mod registry;
pub mod resolver;

pub use bootstrap::AppContext;
pub use container::ComponentContainer;
pub use registry::{Argument, ComponentDefinition, ComponentRegistry};
pub use resolver::{ResolutionReport, SkippedDefinition, VariadicBinding, VariadicInjectionResolver};
