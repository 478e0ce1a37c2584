//! Component registry
//!
//! Definitions in registration order. Each definition carries the compiled
//! argument list the resolver fills in.

use idx_application::ports::registry::{
    COMPONENTS, Capability, ComponentEntry, ComponentFactory, ConstructorSignature, SignatureProbe,
};
use idx_domain::error::{Error, Result};
use std::collections::BTreeMap;
use tracing::debug;

/// A compiled constructor argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    /// Instance of another registered component, by id
    Reference(String),
}

impl Argument {
    /// Id of the referenced component
    pub fn reference_id(&self) -> &str {
        match self {
            Self::Reference(id) => id,
        }
    }
}

/// One registered component
#[derive(Clone)]
pub struct ComponentDefinition {
    id: String,
    description: String,
    implements: Vec<Capability>,
    signature: SignatureProbe,
    factory: Option<ComponentFactory>,
    arguments: BTreeMap<usize, Argument>,
}

impl ComponentDefinition {
    /// Declare a component with its constructor probe
    pub fn new<S: Into<String>>(id: S, signature: SignatureProbe) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            implements: Vec::new(),
            signature,
            factory: None,
            arguments: BTreeMap::new(),
        }
    }

    /// Definition of a linked component entry
    pub fn from_entry(entry: &ComponentEntry) -> Self {
        Self::new(entry.name, entry.signature)
            .with_description(entry.description)
            .implementing(entry.implements)
            .with_factory(entry.factory)
    }

    /// Set the human-readable description
    #[must_use]
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = description.into();
        self
    }

    /// Declare implemented capabilities
    #[must_use]
    pub fn implementing(mut self, capabilities: &[Capability]) -> Self {
        self.implements.extend_from_slice(capabilities);
        self
    }

    /// Set the instance factory
    #[must_use]
    pub fn with_factory(mut self, factory: ComponentFactory) -> Self {
        self.factory = Some(factory);
        self
    }

    /// Component id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Implemented capabilities
    pub fn capabilities(&self) -> &[Capability] {
        &self.implements
    }

    /// Whether the component implements a capability
    pub fn implements(&self, capability: Capability) -> bool {
        self.implements.contains(&capability)
    }

    /// Introspect the constructor
    pub fn signature(&self) -> Result<Option<ConstructorSignature>> {
        (self.signature)()
    }

    /// Instance factory, if the component can be instantiated
    pub fn factory(&self) -> Option<ComponentFactory> {
        self.factory
    }

    /// Compiled arguments by position
    pub fn arguments(&self) -> &BTreeMap<usize, Argument> {
        &self.arguments
    }

    /// Set the argument at a position
    pub fn set_argument(&mut self, index: usize, argument: Argument) {
        self.arguments.insert(index, argument);
    }

    /// Drop every argument at or after a position
    pub fn clear_arguments_from(&mut self, index: usize) {
        self.arguments.retain(|position, _| *position < index);
    }

    /// Referenced component ids in argument order
    pub fn references(&self) -> Vec<&str> {
        self.arguments.values().map(Argument::reference_id).collect()
    }
}

impl std::fmt::Debug for ComponentDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentDefinition")
            .field("id", &self.id)
            .field("implements", &self.implements)
            .field("factory", &self.factory.is_some())
            .field("arguments", &self.arguments)
            .finish()
    }
}

/// Registered component definitions in registration order
#[derive(Debug, Default, Clone)]
pub struct ComponentRegistry {
    definitions: Vec<ComponentDefinition>,
}

impl ComponentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry of every linked component, sorted by id
    pub fn from_linked() -> Result<Self> {
        Self::from_linked_except(&[])
    }

    /// Registry of the linked components whose id is not in `disabled`
    pub fn from_linked_except(disabled: &[String]) -> Result<Self> {
        let mut entries: Vec<&ComponentEntry> = COMPONENTS.iter().collect();
        entries.sort_by_key(|entry| entry.name);

        let mut registry = Self::new();
        for entry in entries {
            if disabled.iter().any(|id| id == entry.name) {
                debug!(component = entry.name, "Component disabled by configuration");
                continue;
            }
            registry.register(ComponentDefinition::from_entry(entry))?;
        }
        Ok(registry)
    }

    /// Append a definition; ids must be unique
    pub fn register(&mut self, definition: ComponentDefinition) -> Result<()> {
        if self.get(definition.id()).is_some() {
            return Err(Error::registry(format!(
                "Component '{}' is already registered",
                definition.id()
            )));
        }
        debug!(component = definition.id(), "Component registered");
        self.definitions.push(definition);
        Ok(())
    }

    /// Definitions in registration order
    pub fn definitions(&self) -> &[ComponentDefinition] {
        &self.definitions
    }

    /// Mutable definitions in registration order
    pub fn definitions_mut(&mut self) -> &mut [ComponentDefinition] {
        &mut self.definitions
    }

    /// Definition by id
    pub fn get(&self, id: &str) -> Option<&ComponentDefinition> {
        self.definitions.iter().find(|definition| definition.id() == id)
    }

    /// Ids in registration order
    pub fn ids(&self) -> Vec<&str> {
        self.definitions.iter().map(ComponentDefinition::id).collect()
    }

    /// Number of definitions
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
