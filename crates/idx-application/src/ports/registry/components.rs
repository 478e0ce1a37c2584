//! Component entries and constructor signatures
//!
//! Components describe their constructor shape through a signature probe
//! instead of runtime type introspection. The probe may fail, which the
//! resolver treats as a reflection failure for that component only.

use idx_domain::error::Result;
use linkme::distributed_slice;
use std::fmt;

use super::instances::{ComponentInstance, InstantiationContext};

/// Named contract a component can implement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Capability(&'static str);

impl Capability {
    /// Declare a capability
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Capability name
    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Capability of every dispatchable indexable builder
pub const INDEXABLE_BUILDER: Capability = Capability::new("indexable_builder");

/// Declared type of a constructor parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterType {
    /// A capability other components can implement
    Capability(Capability),
    /// A concrete, externally supplied type
    Named(&'static str),
    /// Any of several types
    Union(Vec<&'static str>),
    /// No declared type
    Untyped,
}

/// One declared constructor parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name
    pub name: &'static str,
    /// Declared type
    pub ty: ParameterType,
    /// Whether the parameter accepts any number of trailing arguments
    pub variadic: bool,
}

impl Parameter {
    /// A regular positional parameter
    pub fn new(name: &'static str, ty: ParameterType) -> Self {
        Self {
            name,
            ty,
            variadic: false,
        }
    }

    /// A variadic trailing parameter
    pub fn variadic(name: &'static str, ty: ParameterType) -> Self {
        Self {
            name,
            ty,
            variadic: true,
        }
    }
}

/// Declared constructor shape of a component
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstructorSignature {
    parameters: Vec<Parameter>,
}

impl ConstructorSignature {
    /// Create a signature from its parameters, in declaration order
    pub fn new(parameters: Vec<Parameter>) -> Self {
        Self { parameters }
    }

    /// Declared parameters
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Position and declaration of the last parameter
    pub fn last_parameter(&self) -> Option<(usize, &Parameter)> {
        self.parameters.iter().enumerate().next_back()
    }
}

/// Introspects a component's constructor
///
/// `Ok(None)` means the component has no constructor to inject into.
pub type SignatureProbe = fn() -> Result<Option<ConstructorSignature>>;

/// Builds a component instance from its resolved dependencies
pub type ComponentFactory = fn(&InstantiationContext<'_>) -> Result<ComponentInstance>;

/// Registry entry for components
///
/// Each component registers itself with this entry using
/// `#[linkme::distributed_slice(COMPONENTS)]`.
pub struct ComponentEntry {
    /// Unique component name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Capabilities the component implements
    pub implements: &'static [Capability],
    /// Constructor introspection
    pub signature: SignatureProbe,
    /// Factory function to create the instance
    pub factory: ComponentFactory,
}

// Auto-collection via linkme distributed slices - components submit entries at compile time
#[distributed_slice]
pub static COMPONENTS: [ComponentEntry] = [..];

/// List all registered components
///
/// Returns `(name, description)` tuples sorted by name.
pub fn list_components() -> Vec<(&'static str, &'static str)> {
    let mut components: Vec<_> = COMPONENTS
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect();
    components.sort_unstable();
    components
}
