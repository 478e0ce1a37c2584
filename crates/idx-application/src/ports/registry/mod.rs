//! Component Registry System
//!
//! Defines the auto-registration infrastructure for pluggable components.
//! Uses the `linkme` crate for compile-time registration of components that
//! are discovered when the container is assembled.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                  Component Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Component defines: #[distributed_slice(COMPONENTS)]         │
//! │                        static ENTRY: ComponentEntry = ...       │
//! │                              ↓                                  │
//! │  2. Registry collects: COMPONENTS.iter() → definitions          │
//! │                              ↓                                  │
//! │  3. Resolver binds:    Manager(Builder... builders)             │
//! │                        ← every other Builder implementer        │
//! │                              ↓                                  │
//! │  4. Container builds:  factory(&InstantiationContext)           │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Registering a Component
//!
//! ```ignore
//! use idx_application::ports::registry::{ComponentEntry, COMPONENTS, INDEXABLE_BUILDER};
//!
//! #[linkme::distributed_slice(COMPONENTS)]
//! static MY_BUILDER: ComponentEntry = ComponentEntry {
//!     name: "my_builder",
//!     description: "Fills custom fields",
//!     implements: &[INDEXABLE_BUILDER],
//!     signature: my_builder_signature,
//!     factory: build_my_builder,
//! };
//! ```

pub mod components;
pub mod instances;

pub use components::{
    COMPONENTS, Capability, ComponentEntry, ComponentFactory, ConstructorSignature,
    INDEXABLE_BUILDER, Parameter, ParameterType, SignatureProbe, list_components,
};
pub use instances::{ComponentInstance, InstantiationContext, Services};
