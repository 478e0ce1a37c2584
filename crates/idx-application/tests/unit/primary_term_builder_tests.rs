//! Tests for the primary term builder

use idx_application::PrimaryTermBuilder;
use idx_domain::error::Error;
use idx_domain::ports::{BuildStatus, IndexableBuilder, PrimaryTermRepository};
use idx_domain::{BuildContext, Indexable, ObjectType, PrimaryTerm};
use idx_providers::{FixtureContentStore, InMemoryPrimaryTermRepository};
use std::sync::Arc;

fn builder_for(
    fixture: &str,
    repository: Arc<InMemoryPrimaryTermRepository>,
) -> PrimaryTermBuilder {
    let content = Arc::new(FixtureContentStore::from_json(fixture).unwrap());
    PrimaryTermBuilder::new(repository, content.clone(), content)
}

#[test]
fn test_primary_term_builder_selection() {
    let builder = builder_for("{}", Arc::new(InMemoryPrimaryTermRepository::new()));

    assert!(builder.understands(ObjectType::Post));
    assert!(!builder.understands(ObjectType::User));
    assert_eq!(builder.priority(ObjectType::Post), 1);
}

#[test]
fn test_selected_terms_are_saved() {
    let repository = Arc::new(InMemoryPrimaryTermRepository::new());
    let builder = builder_for(
        r#"{ "posts": { "7": {
            "primary_term_taxonomies": ["category", "series"],
            "meta": { "primary_category": "12", "primary_series": "4" }
        } } }"#,
        repository.clone(),
    );
    let mut indexable = Indexable::for_object(7, ObjectType::Post);
    let untouched = indexable.clone();

    let status = builder
        .build(7, &mut indexable, &BuildContext::new(3))
        .unwrap();

    assert_eq!(status, BuildStatus::NoResult);
    assert_eq!(indexable, untouched);
    let category = repository.get(7, "category").unwrap();
    assert_eq!(category.term_id, Some(12));
    assert_eq!(category.blog_id, Some(3));
    assert_eq!(repository.get(7, "series").unwrap().term_id, Some(4));
}

#[test]
fn test_unselected_term_deletes_existing_record() {
    let repository = Arc::new(InMemoryPrimaryTermRepository::new());
    let mut existing = PrimaryTerm::new(7, "category");
    existing.term_id = Some(12);
    repository.save(&mut existing).unwrap();
    let builder = builder_for(
        r#"{ "posts": { "7": { "primary_term_taxonomies": ["category"] } } }"#,
        repository.clone(),
    );

    builder
        .build(7, &mut Indexable::default(), &BuildContext::default())
        .unwrap();

    assert!(repository.get(7, "category").is_none());
}

#[test]
fn test_zero_term_creates_nothing() {
    let repository = Arc::new(InMemoryPrimaryTermRepository::new());
    let builder = builder_for(
        r#"{ "posts": { "7": {
            "primary_term_taxonomies": ["category"],
            "meta": { "primary_category": "0" }
        } } }"#,
        repository.clone(),
    );

    builder
        .build(7, &mut Indexable::default(), &BuildContext::default())
        .unwrap();

    assert!(repository.is_empty());
}

#[test]
fn test_malformed_term_is_builder_failure() {
    let builder = builder_for(
        r#"{ "posts": { "7": {
            "primary_term_taxonomies": ["category"],
            "meta": { "primary_category": "twelve" }
        } } }"#,
        Arc::new(InMemoryPrimaryTermRepository::new()),
    );

    let error = builder
        .build(7, &mut Indexable::default(), &BuildContext::default())
        .unwrap_err();

    assert!(error.is_builder_failure());
    assert!(matches!(error, Error::Builder { .. }));
}
