//! Type-erased component instances and the factory context
//!
//! Components are stored as `Arc<dyn Any>` together with one facet per
//! implemented capability, so consumers can receive them as trait objects
//! (e.g. `Arc<dyn IndexableBuilder>`).

use idx_domain::error::{Error, Result};
use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::sync::Arc;

use super::components::Capability;

type Erased = Box<dyn Any + Send + Sync>;

/// Externally supplied services, keyed by type
///
/// Holds repositories, helpers and other collaborators that are not
/// components themselves.
#[derive(Default)]
pub struct Services {
    entries: HashMap<TypeId, (&'static str, Erased)>,
}

impl Services {
    /// Create an empty service map
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a service, replacing any previous one of the same type
    pub fn insert<T: ?Sized + Send + Sync + 'static>(&mut self, service: Arc<T>) {
        self.entries.insert(
            TypeId::of::<Arc<T>>(),
            (type_name::<T>(), Box::new(service)),
        );
    }

    /// Builder-style [`Services::insert`]
    #[must_use]
    pub fn with<T: ?Sized + Send + Sync + 'static>(mut self, service: Arc<T>) -> Self {
        self.insert(service);
        self
    }

    /// Look up a service
    pub fn get<T: ?Sized + Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.entries
            .get(&TypeId::of::<Arc<T>>())
            .and_then(|(_, service)| service.downcast_ref::<Arc<T>>())
            .cloned()
    }

    /// Names of the registered service types
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.values().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names
    }
}

/// A realized component
pub struct ComponentInstance {
    value: Arc<dyn Any + Send + Sync>,
    facets: HashMap<Capability, Erased>,
}

impl ComponentInstance {
    /// Wrap a concrete component
    pub fn new<T: Send + Sync + 'static>(value: Arc<T>) -> Self {
        Self {
            value,
            facets: HashMap::new(),
        }
    }

    /// Expose the component under a capability
    #[must_use]
    pub fn with_facet<F: ?Sized + Send + Sync + 'static>(
        mut self,
        capability: Capability,
        facet: Arc<F>,
    ) -> Self {
        self.facets.insert(capability, Box::new(facet));
        self
    }

    /// The component as its concrete type
    pub fn get<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.value).downcast::<T>().ok()
    }

    /// The component as a capability facet
    pub fn facet<F: ?Sized + Send + Sync + 'static>(
        &self,
        capability: Capability,
    ) -> Option<Arc<F>> {
        self.facets
            .get(&capability)
            .and_then(|facet| facet.downcast_ref::<Arc<F>>())
            .cloned()
    }

    /// Whether the instance exposes a capability
    pub fn has_facet(&self, capability: Capability) -> bool {
        self.facets.contains_key(&capability)
    }
}

impl std::fmt::Debug for ComponentInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut facets: Vec<_> = self.facets.keys().map(Capability::name).collect();
        facets.sort_unstable();
        f.debug_struct("ComponentInstance")
            .field("facets", &facets)
            .finish_non_exhaustive()
    }
}

/// What a component factory can see while instantiating
pub struct InstantiationContext<'a> {
    component: &'a str,
    services: &'a Services,
    arguments: Vec<(&'a str, &'a ComponentInstance)>,
}

impl<'a> InstantiationContext<'a> {
    /// Create a context; `arguments` are the bound references in argument order
    pub fn new(
        component: &'a str,
        services: &'a Services,
        arguments: Vec<(&'a str, &'a ComponentInstance)>,
    ) -> Self {
        Self {
            component,
            services,
            arguments,
        }
    }

    /// Id of the component being instantiated
    pub fn component(&self) -> &str {
        self.component
    }

    /// A required service
    pub fn service<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Arc<T>> {
        self.services.get::<T>().ok_or_else(|| {
            Error::injection(format!(
                "Component '{}' requires service '{}' which is not registered",
                self.component,
                type_name::<T>()
            ))
        })
    }

    /// An optional service
    pub fn optional_service<T: ?Sized + Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.services.get::<T>()
    }

    /// Bound arguments as capability facets, in argument order
    pub fn variadic<F: ?Sized + Send + Sync + 'static>(
        &self,
        capability: Capability,
    ) -> Result<Vec<Arc<F>>> {
        self.arguments
            .iter()
            .map(|(id, instance)| {
                instance.facet::<F>(capability).ok_or_else(|| {
                    Error::injection(format!(
                        "Argument '{id}' of component '{}' does not expose \
                         capability '{capability}'",
                        self.component
                    ))
                })
            })
            .collect()
    }
}
