//! Tests for the author builder

use idx_application::{
    AuthorBuilder, IndexableBuildManager, PrimaryTermBuilder, SocialImageHelper,
};
use idx_domain::constants::GRAVATAR_IMAGE_SOURCE;
use idx_domain::ports::{BuildStatus, IndexableBuilder, IndexableRepository};
use idx_domain::{BuildContext, Indexable, ObjectType};
use idx_providers::{
    FixtureContentStore, InMemoryIndexableRepository, InMemoryPrimaryTermRepository,
};
use std::sync::Arc;

const FIXTURE: &str = r#"{
    "site_url": "https://example.com",
    "users": {
        "42": {
            "nicename": "ada",
            "meta": {
                "wpseo_title": "Ada's archive",
                "wpseo_metadesc": "",
                "wpseo_noindex_author": "on"
            },
            "has_public_posts": true,
            "avatar_url": "https://avatars.example.com/ada.png?s={size}"
        },
        "43": {
            "nicename": "grace",
            "meta": { "wpseo_metadesc": "Compilers" }
        }
    }
}"#;

fn author_builder(repository: Arc<InMemoryIndexableRepository>) -> AuthorBuilder {
    let content = Arc::new(FixtureContentStore::from_json(FIXTURE).unwrap());
    AuthorBuilder::new(
        repository,
        content.clone(),
        content.clone(),
        content.clone(),
        content,
        SocialImageHelper::new(),
    )
}

#[test]
fn test_author_builder_selection() {
    let builder = author_builder(Arc::new(InMemoryIndexableRepository::new()));

    assert_eq!(builder.name(), "author_builder");
    assert!(builder.understands(ObjectType::User));
    assert!(builder.understands(ObjectType::Post));
    assert!(!builder.understands(ObjectType::Term));
    assert_eq!(builder.priority(ObjectType::User), 2);
}

#[test]
fn test_author_fields_from_meta() {
    let builder = author_builder(Arc::new(InMemoryIndexableRepository::new()));
    let mut indexable = Indexable::default();

    let status = builder
        .build(42, &mut indexable, &BuildContext::new(2))
        .unwrap();

    assert_eq!(status, BuildStatus::Built);
    assert_eq!(indexable.object_id, Some(42));
    assert_eq!(indexable.object_type, Some(ObjectType::User));
    assert_eq!(indexable.title.as_deref(), Some("Ada's archive"));
    assert_eq!(indexable.description, None);
    assert_eq!(
        indexable.permalink.as_deref(),
        Some("https://example.com/author/ada/")
    );
    assert_eq!(indexable.is_robots_noindex, Some(true));
    assert_eq!(indexable.is_public, Some(false));
    assert_eq!(indexable.has_public_posts, Some(true));
    assert!(!indexable.is_cornerstone);
    assert_eq!(indexable.blog_id, Some(2));
}

#[test]
fn test_author_without_noindex_is_undecided_public() {
    let builder = author_builder(Arc::new(InMemoryIndexableRepository::new()));
    let mut indexable = Indexable::default();

    builder
        .build(43, &mut indexable, &BuildContext::default())
        .unwrap();

    assert_eq!(indexable.is_robots_noindex, Some(false));
    assert_eq!(indexable.is_public, None);
    assert_eq!(indexable.title, None);
    assert_eq!(indexable.description.as_deref(), Some("Compilers"));
    assert_eq!(indexable.open_graph_image, None);
    assert_eq!(indexable.twitter_image, None);
}

#[test]
fn test_avatar_fills_both_social_images() {
    let builder = author_builder(Arc::new(InMemoryIndexableRepository::new()));
    let mut indexable = Indexable::default();
    indexable.open_graph_image = Some("https://stale.example.com/og.png".to_string());

    builder
        .build(42, &mut indexable, &BuildContext::default())
        .unwrap();

    let avatar = "https://avatars.example.com/ada.png?s=500";
    assert_eq!(indexable.open_graph_image.as_deref(), Some(avatar));
    assert_eq!(
        indexable.open_graph_image_source.as_deref(),
        Some(GRAVATAR_IMAGE_SOURCE)
    );
    assert_eq!(indexable.twitter_image.as_deref(), Some(avatar));
    assert_eq!(
        indexable.twitter_image_source.as_deref(),
        Some(GRAVATAR_IMAGE_SOURCE)
    );
}

#[test]
fn test_stored_author_is_reused() {
    let repository = Arc::new(InMemoryIndexableRepository::new());
    let mut stored = Indexable::for_object(42, ObjectType::User);
    stored.title = Some("Stored".to_string());
    repository.save(&mut stored).unwrap();
    let builder = author_builder(repository);

    let mut indexable = Indexable::for_object(7, ObjectType::Post);
    indexable.author_id = Some(42);
    builder
        .build(7, &mut indexable, &BuildContext::default())
        .unwrap();

    assert_eq!(indexable, stored);
}

#[test]
fn test_user_build_dispatches_author_builder_only() {
    let repository = Arc::new(InMemoryIndexableRepository::new());
    let content = Arc::new(FixtureContentStore::from_json(FIXTURE).unwrap());
    let primary_terms = Arc::new(InMemoryPrimaryTermRepository::new());
    let builders: Vec<Arc<dyn IndexableBuilder>> = vec![
        Arc::new(author_builder(repository.clone())),
        Arc::new(PrimaryTermBuilder::new(primary_terms, content.clone(), content)),
    ];
    let manager = IndexableBuildManager::new(repository.clone(), builders);

    let report = manager.build_with_report(42, ObjectType::User, None).unwrap();

    assert_eq!(report.dispatched, vec!["author_builder"]);
    assert_eq!(report.indexable.object_type, Some(ObjectType::User));
    assert_eq!(report.indexable.title.as_deref(), Some("Ada's archive"));
    assert_eq!(report.indexable.is_public, Some(false));
    assert_eq!(repository.len(), 1);
}

#[test]
fn test_post_build_stores_author_record() {
    let repository = Arc::new(InMemoryIndexableRepository::new());
    let builders: Vec<Arc<dyn IndexableBuilder>> =
        vec![Arc::new(author_builder(repository.clone()))];
    let manager = IndexableBuildManager::new(repository.clone(), builders);

    let report = manager.build_with_report(8, ObjectType::Post, None).unwrap();

    assert_eq!(report.dispatched, vec!["author_builder"]);
    assert!(!report.used_fallback);
    assert_eq!(report.indexable.object_type, Some(ObjectType::User));
    assert_eq!(report.indexable.object_id, Some(8));
    assert_eq!(repository.len(), 1);
    assert!(
        repository
            .find_by_id_and_type(8, ObjectType::User, false)
            .unwrap()
            .is_some()
    );
    assert!(
        repository
            .find_by_id_and_type(8, ObjectType::Post, false)
            .unwrap()
            .is_none()
    );
}
