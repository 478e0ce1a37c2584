//! Component container
//!
//! Realizes a resolved registry: every definition with a factory is
//! instantiated once, after the components it references.

use idx_application::ports::registry::{
    Capability, ComponentInstance, InstantiationContext, Services,
};
use idx_domain::error::{Error, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

use super::registry::ComponentRegistry;

/// Instantiated components by id
#[derive(Debug, Default)]
pub struct ComponentContainer {
    instances: HashMap<String, ComponentInstance>,
    order: Vec<String>,
}

impl ComponentContainer {
    /// Instantiate every component of the registry that has a factory
    ///
    /// Fails on reference cycles, unknown references and factory errors.
    pub fn build(registry: &ComponentRegistry, services: &Services) -> Result<Self> {
        let mut container = Self::default();
        for definition in registry.definitions() {
            if definition.factory().is_some() {
                let mut path = Vec::new();
                container.instantiate(registry, services, definition.id(), &mut path)?;
            }
        }
        info!(components = container.order.len(), "Component container built");
        Ok(container)
    }

    fn instantiate(
        &mut self,
        registry: &ComponentRegistry,
        services: &Services,
        id: &str,
        path: &mut Vec<String>,
    ) -> Result<()> {
        if self.instances.contains_key(id) {
            return Ok(());
        }
        if path.iter().any(|visiting| visiting == id) {
            path.push(id.to_string());
            return Err(Error::injection(format!(
                "Reference cycle: {}",
                path.join(" -> ")
            )));
        }

        let definition = registry.get(id).ok_or_else(|| {
            Error::injection(format!(
                "Component '{}' references unknown component '{id}'",
                path.last().map_or("<root>", String::as_str)
            ))
        })?;
        let factory = definition.factory().ok_or_else(|| {
            Error::injection(format!("Component '{id}' has no factory"))
        })?;

        path.push(id.to_string());
        let references = definition.references();
        for reference in &references {
            self.instantiate(registry, services, reference, path)?;
        }
        path.pop();

        let instance = {
            let arguments = references
                .iter()
                .map(|reference| {
                    self.instances
                        .get(*reference)
                        .map(|instance| (*reference, instance))
                        .ok_or_else(|| {
                            Error::internal(format!("Reference '{reference}' was not instantiated"))
                        })
                })
                .collect::<Result<Vec<_>>>()?;
            let context = InstantiationContext::new(id, services, arguments);
            factory(&context)?
        };

        debug!(component = id, arguments = references.len(), "Component instantiated");
        self.instances.insert(id.to_string(), instance);
        self.order.push(id.to_string());
        Ok(())
    }

    /// Instance by id
    pub fn instance(&self, id: &str) -> Option<&ComponentInstance> {
        self.instances.get(id)
    }

    /// Component as its concrete type
    pub fn get<T: Send + Sync + 'static>(&self, id: &str) -> Option<Arc<T>> {
        self.instance(id)?.get::<T>()
    }

    /// Component as a capability facet
    pub fn facet<F: ?Sized + Send + Sync + 'static>(
        &self,
        id: &str,
        capability: Capability,
    ) -> Option<Arc<F>> {
        self.instance(id)?.facet::<F>(capability)
    }

    /// Ids in instantiation order
    pub fn ids(&self) -> &[String] {
        &self.order
    }

    /// Number of instances
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing was instantiated
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
