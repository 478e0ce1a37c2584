//! Tests for component self-registration

use idx_application::ports::registry::{
    COMPONENTS, INDEXABLE_BUILDER, ParameterType, list_components,
};

#[test]
fn test_builders_implement_indexable_builder() {
    for name in ["author_builder", "primary_term_builder"] {
        let entry = COMPONENTS
            .iter()
            .find(|entry| entry.name == name)
            .unwrap_or_else(|| panic!("{name} should be registered"));
        assert!(entry.implements.contains(&INDEXABLE_BUILDER));
    }
}

#[test]
fn test_manager_declares_variadic_builders() {
    let entry = COMPONENTS
        .iter()
        .find(|entry| entry.name == "indexable_build_manager")
        .expect("manager should be registered");

    let signature = (entry.signature)().unwrap().unwrap();
    let (index, last) = signature.last_parameter().unwrap();
    assert_eq!(index, 0);
    assert!(last.variadic);
    assert_eq!(last.ty, ParameterType::Capability(INDEXABLE_BUILDER));
    assert!(entry.implements.is_empty());
}

#[test]
fn test_component_names_are_unique() {
    let names: Vec<_> = list_components().into_iter().map(|(name, _)| name).collect();
    let mut deduplicated = names.clone();
    deduplicated.dedup();
    assert_eq!(names, deduplicated);
}
