//! Variadic injection resolver
//!
//! Compile step over the registry: a definition whose last constructor
//! parameter is variadic and typed to a single capability gets every other
//! definition implementing that capability bound as successive references,
//! starting at the variadic parameter's position. Nothing is instantiated.

use idx_application::ports::registry::{Capability, ConstructorSignature, ParameterType};
use idx_domain::error::Result;
use std::fmt;
use tracing::{debug, info, warn};

use super::registry::{Argument, ComponentRegistry};

/// Bindings produced for one variadic consumer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariadicBinding {
    /// Consumer id
    pub component: String,
    /// Name of the variadic parameter
    pub parameter: String,
    /// Capability the parameter is typed to
    pub capability: Capability,
    /// Position of the first bound argument
    pub index: usize,
    /// Bound component ids in argument order
    pub arguments: Vec<String>,
}

/// A definition the resolver could not introspect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDefinition {
    /// Component id
    pub component: String,
    /// Introspection error
    pub reason: String,
}

/// Outcome of one resolver pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionReport {
    /// Variadic consumers in registry order
    pub bound: Vec<VariadicBinding>,
    /// Definitions skipped because introspection failed
    pub skipped: Vec<SkippedDefinition>,
}

impl ResolutionReport {
    /// Bindings of a consumer
    pub fn binding(&self, component: &str) -> Option<&VariadicBinding> {
        self.bound.iter().find(|binding| binding.component == component)
    }

    /// Whether a definition was skipped
    pub fn is_skipped(&self, component: &str) -> bool {
        self.skipped.iter().any(|skipped| skipped.component == component)
    }
}

impl fmt::Display for ResolutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for binding in &self.bound {
            writeln!(
                f,
                "{}({}: {}...) <- [{}]",
                binding.component,
                binding.parameter,
                binding.capability,
                binding.arguments.join(", ")
            )?;
        }
        for skipped in &self.skipped {
            writeln!(f, "{} skipped: {}", skipped.component, skipped.reason)?;
        }
        Ok(())
    }
}

/// Trailing variadic capability parameter of a definition
struct VariadicSlot {
    index: usize,
    parameter: String,
    capability: Capability,
}

/// Binds capability implementers into variadic constructor parameters
#[derive(Debug, Default, Clone, Copy)]
pub struct VariadicInjectionResolver;

impl VariadicInjectionResolver {
    /// Create a resolver
    pub fn new() -> Self {
        Self
    }

    /// Resolve every variadic consumer of the registry
    ///
    /// Running it again over an unchanged registry yields the same bindings.
    pub fn resolve(&self, registry: &mut ComponentRegistry) -> ResolutionReport {
        let mut report = ResolutionReport::default();

        for position in 0..registry.len() {
            let definition = &registry.definitions()[position];
            let slot = match Self::variadic_slot(definition.id(), definition.signature()) {
                Ok(Some(slot)) => slot,
                Ok(None) => continue,
                Err(reason) => {
                    warn!(
                        component = definition.id(),
                        reason = %reason,
                        "Skipping component that cannot be introspected"
                    );
                    report.skipped.push(SkippedDefinition {
                        component: definition.id().to_string(),
                        reason,
                    });
                    continue;
                }
            };

            let candidates: Vec<String> = registry
                .definitions()
                .iter()
                .enumerate()
                .filter(|(other, candidate)| {
                    *other != position && candidate.implements(slot.capability)
                })
                .map(|(_, candidate)| candidate.id().to_string())
                .collect();

            let definition = &mut registry.definitions_mut()[position];
            definition.clear_arguments_from(slot.index);
            for (offset, id) in candidates.iter().enumerate() {
                definition.set_argument(slot.index + offset, Argument::Reference(id.clone()));
            }

            debug!(
                component = definition.id(),
                capability = %slot.capability,
                count = candidates.len(),
                "Bound variadic arguments"
            );
            report.bound.push(VariadicBinding {
                component: definition.id().to_string(),
                parameter: slot.parameter,
                capability: slot.capability,
                index: slot.index,
                arguments: candidates,
            });
        }

        info!(
            consumers = report.bound.len(),
            skipped = report.skipped.len(),
            "Variadic injection resolved"
        );
        report
    }

    /// Variadic capability slot, `Ok(None)` when the definition is no consumer
    fn variadic_slot(
        component: &str,
        signature: Result<Option<ConstructorSignature>>,
    ) -> std::result::Result<Option<VariadicSlot>, String> {
        let signature = signature.map_err(|e| e.to_string())?;
        let Some(signature) = signature else {
            debug!(component, "No constructor, nothing to inject");
            return Ok(None);
        };
        let Some((index, parameter)) = signature.last_parameter() else {
            return Ok(None);
        };
        if !parameter.variadic {
            return Ok(None);
        }
        match &parameter.ty {
            ParameterType::Capability(capability) => Ok(Some(VariadicSlot {
                index,
                parameter: parameter.name.to_string(),
                capability: *capability,
            })),
            ParameterType::Named(_) | ParameterType::Union(_) | ParameterType::Untyped => {
                debug!(
                    component,
                    parameter = parameter.name,
                    "Variadic parameter is not a single capability"
                );
                Ok(None)
            }
        }
    }
}
