//! Tests for the variadic injection resolver

use idx_application::ports::registry::{
    Capability, ConstructorSignature, Parameter, ParameterType,
};
use idx_domain::error::{Error, Result};
use idx_infrastructure::di::{
    Argument, ComponentDefinition, ComponentRegistry, VariadicInjectionResolver,
};

const PLUGIN: Capability = Capability::new("plugin");
const OTHER: Capability = Capability::new("other");

fn variadic_plugins() -> Result<Option<ConstructorSignature>> {
    Ok(Some(ConstructorSignature::new(vec![Parameter::variadic(
        "items",
        ParameterType::Capability(PLUGIN),
    )])))
}

fn logger_then_variadic_plugins() -> Result<Option<ConstructorSignature>> {
    Ok(Some(ConstructorSignature::new(vec![
        Parameter::new("logger", ParameterType::Named("Logger")),
        Parameter::variadic("items", ParameterType::Capability(PLUGIN)),
    ])))
}

fn single_plugin() -> Result<Option<ConstructorSignature>> {
    Ok(Some(ConstructorSignature::new(vec![Parameter::new(
        "item",
        ParameterType::Capability(PLUGIN),
    )])))
}

fn variadic_untyped() -> Result<Option<ConstructorSignature>> {
    Ok(Some(ConstructorSignature::new(vec![Parameter::variadic(
        "items",
        ParameterType::Untyped,
    )])))
}

fn variadic_union() -> Result<Option<ConstructorSignature>> {
    Ok(Some(ConstructorSignature::new(vec![Parameter::variadic(
        "items",
        ParameterType::Union(vec!["Plugin", "Other"]),
    )])))
}

fn variadic_concrete() -> Result<Option<ConstructorSignature>> {
    Ok(Some(ConstructorSignature::new(vec![Parameter::variadic(
        "items",
        ParameterType::Named("ConcretePlugin"),
    )])))
}

fn variadic_then_regular() -> Result<Option<ConstructorSignature>> {
    Ok(Some(ConstructorSignature::new(vec![
        Parameter::variadic("items", ParameterType::Capability(PLUGIN)),
        Parameter::new("logger", ParameterType::Named("Logger")),
    ])))
}

fn no_constructor() -> Result<Option<ConstructorSignature>> {
    Ok(None)
}

fn empty_constructor() -> Result<Option<ConstructorSignature>> {
    Ok(Some(ConstructorSignature::default()))
}

fn broken() -> Result<Option<ConstructorSignature>> {
    Err(Error::reflection("broken", "class cannot be loaded"))
}

fn plugin(id: &str) -> ComponentDefinition {
    ComponentDefinition::new(id, no_constructor).implementing(&[PLUGIN])
}

fn registry(definitions: Vec<ComponentDefinition>) -> ComponentRegistry {
    let mut registry = ComponentRegistry::new();
    for definition in definitions {
        registry.register(definition).unwrap();
    }
    registry
}

fn references(registry: &ComponentRegistry, id: &str) -> Vec<String> {
    registry
        .get(id)
        .unwrap()
        .references()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_manager_receives_all_implementers_in_registry_order() {
    let mut registry = registry(vec![
        plugin("a"),
        ComponentDefinition::new("manager", variadic_plugins),
        plugin("b"),
        plugin("c"),
        ComponentDefinition::new("consumer", single_plugin),
    ]);

    let report = VariadicInjectionResolver::new().resolve(&mut registry);

    assert_eq!(references(&registry, "manager"), vec!["a", "b", "c"]);
    let arguments = registry.get("manager").unwrap().arguments();
    assert_eq!(arguments.get(&0), Some(&Argument::Reference("a".to_string())));
    assert_eq!(arguments.get(&2), Some(&Argument::Reference("c".to_string())));
    assert!(registry.get("consumer").unwrap().arguments().is_empty());
    assert_eq!(report.bound.len(), 1);
    assert_eq!(report.binding("manager").unwrap().capability, PLUGIN);
}

#[test]
fn test_binding_starts_at_variadic_position() {
    let mut registry = registry(vec![
        ComponentDefinition::new("manager", logger_then_variadic_plugins),
        plugin("a"),
        plugin("b"),
    ]);

    VariadicInjectionResolver::new().resolve(&mut registry);

    let arguments = registry.get("manager").unwrap().arguments();
    assert_eq!(arguments.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn test_non_consumers_are_untouched() {
    let mut registry = registry(vec![
        plugin("a"),
        ComponentDefinition::new("untyped", variadic_untyped),
        ComponentDefinition::new("union", variadic_union),
        ComponentDefinition::new("concrete", variadic_concrete),
        ComponentDefinition::new("not_last", variadic_then_regular),
        ComponentDefinition::new("empty", empty_constructor),
        ComponentDefinition::new("none", no_constructor),
    ]);

    let report = VariadicInjectionResolver::new().resolve(&mut registry);

    assert!(report.bound.is_empty());
    assert!(report.skipped.is_empty());
    for definition in registry.definitions() {
        assert!(definition.arguments().is_empty(), "{} was bound", definition.id());
    }
}

#[test]
fn test_consumer_never_binds_itself() {
    let mut registry = registry(vec![
        plugin("a"),
        ComponentDefinition::new("composite", variadic_plugins).implementing(&[PLUGIN]),
        plugin("b"),
    ]);

    VariadicInjectionResolver::new().resolve(&mut registry);

    assert_eq!(references(&registry, "composite"), vec!["a", "b"]);
}

#[test]
fn test_declaring_capability_without_implementing_is_no_candidate() {
    let mut registry = registry(vec![
        ComponentDefinition::new("manager", variadic_plugins),
        ComponentDefinition::new("user_of_plugin", single_plugin),
        ComponentDefinition::new("unrelated", no_constructor).implementing(&[OTHER]),
        plugin("a"),
    ]);

    VariadicInjectionResolver::new().resolve(&mut registry);

    assert_eq!(references(&registry, "manager"), vec!["a"]);
}

#[test]
fn test_zero_candidates_binds_nothing() {
    let mut registry = registry(vec![ComponentDefinition::new("manager", variadic_plugins)]);

    let report = VariadicInjectionResolver::new().resolve(&mut registry);

    assert!(registry.get("manager").unwrap().arguments().is_empty());
    assert!(report.binding("manager").unwrap().arguments.is_empty());
}

#[test]
fn test_introspection_failure_skips_only_that_definition() {
    let mut registry = registry(vec![
        plugin("a"),
        ComponentDefinition::new("broken", broken).implementing(&[PLUGIN]),
        ComponentDefinition::new("manager", variadic_plugins),
    ]);

    let report = VariadicInjectionResolver::new().resolve(&mut registry);

    assert!(report.is_skipped("broken"));
    assert!(report.skipped[0].reason.contains("class cannot be loaded"));
    // Still a candidate: it is skipped as a consumer, not as an implementer
    assert_eq!(references(&registry, "manager"), vec!["a", "broken"]);
}

#[test]
fn test_resolving_twice_is_idempotent() {
    let mut registry = registry(vec![
        plugin("a"),
        ComponentDefinition::new("manager", variadic_plugins),
        plugin("b"),
    ]);
    let resolver = VariadicInjectionResolver::new();

    let first = resolver.resolve(&mut registry);
    let bound_once = registry.get("manager").unwrap().arguments().clone();
    let second = resolver.resolve(&mut registry);

    assert_eq!(first, second);
    assert_eq!(registry.get("manager").unwrap().arguments(), &bound_once);
}

#[test]
fn test_stale_bindings_are_replaced() {
    let mut registry = registry(vec![
        plugin("a"),
        ComponentDefinition::new("manager", variadic_plugins),
    ]);
    registry.definitions_mut()[1].set_argument(0, Argument::Reference("gone".to_string()));
    registry.definitions_mut()[1].set_argument(5, Argument::Reference("gone".to_string()));

    VariadicInjectionResolver::new().resolve(&mut registry);

    assert_eq!(references(&registry, "manager"), vec!["a"]);
}

#[test]
fn test_report_renders_bindings() {
    let mut registry = registry(vec![
        plugin("a"),
        ComponentDefinition::new("manager", variadic_plugins),
        ComponentDefinition::new("broken", broken),
    ]);

    let rendered = VariadicInjectionResolver::new().resolve(&mut registry).to_string();

    assert!(rendered.contains("manager(items: plugin...) <- [a]"));
    assert!(rendered.contains("broken skipped:"));
}
