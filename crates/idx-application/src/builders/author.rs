//! Author builder
//!
//! Formats user meta into an author archive indexable.

use idx_domain::constants::{
    AUTHOR_AVATAR_SIZE, AUTHOR_META_DESCRIPTION, AUTHOR_META_NOINDEX, AUTHOR_META_TITLE,
    AUTHOR_NOINDEX_ON, GRAVATAR_IMAGE_SOURCE,
};
use idx_domain::error::{Error, Result};
use idx_domain::ports::{
    AuthorArchiveHelper, AuthorMetaHelper, AvatarHelper, BuildStatus, IndexableBuilder,
    IndexableRepository, PermalinkHelper,
};
use idx_domain::{BuildContext, Indexable, ObjectType, SocialImage};
use linkme::distributed_slice;
use std::sync::Arc;
use tracing::debug;

use super::social_image::SocialImageHelper;
use crate::ports::registry::{
    COMPONENTS, ComponentEntry, ComponentInstance, ConstructorSignature, INDEXABLE_BUILDER,
    InstantiationContext, Parameter, ParameterType,
};

/// Builds author archive indexables from user meta
pub struct AuthorBuilder {
    repository: Arc<dyn IndexableRepository>,
    author_meta: Arc<dyn AuthorMetaHelper>,
    author_archive: Arc<dyn AuthorArchiveHelper>,
    permalinks: Arc<dyn PermalinkHelper>,
    avatars: Arc<dyn AvatarHelper>,
    social_images: SocialImageHelper,
}

/// User meta the builder reads
struct AuthorMeta {
    title: Option<String>,
    description: Option<String>,
    noindex: Option<String>,
}

impl AuthorBuilder {
    /// Registry name of the component
    pub const COMPONENT: &'static str = "author_builder";

    /// Create the builder from its collaborators
    pub fn new(
        repository: Arc<dyn IndexableRepository>,
        author_meta: Arc<dyn AuthorMetaHelper>,
        author_archive: Arc<dyn AuthorArchiveHelper>,
        permalinks: Arc<dyn PermalinkHelper>,
        avatars: Arc<dyn AvatarHelper>,
        social_images: SocialImageHelper,
    ) -> Self {
        Self {
            repository,
            author_meta,
            author_archive,
            permalinks,
            avatars,
            social_images,
        }
    }

    fn author_meta(&self, user_id: u64, key: &str) -> Option<String> {
        self.author_meta
            .get_author_meta(user_id, key)
            .filter(|value| !value.is_empty())
    }

    fn meta_data(&self, user_id: u64) -> AuthorMeta {
        AuthorMeta {
            title: self.author_meta(user_id, AUTHOR_META_TITLE),
            description: self.author_meta(user_id, AUTHOR_META_DESCRIPTION),
            noindex: self.author_meta(user_id, AUTHOR_META_NOINDEX),
        }
    }

    fn alternative_image(&self, user_id: u64) -> Option<SocialImage> {
        self.avatars
            .avatar_url(user_id, AUTHOR_AVATAR_SIZE)
            .map(|url| SocialImage::new(url, GRAVATAR_IMAGE_SOURCE))
    }

    /// Stored author indexable the record refers to, if any
    fn existing_author(&self, indexable: &Indexable) -> Result<Option<Indexable>> {
        let Some(author_id) = indexable.author_id else {
            return Ok(None);
        };
        self.repository
            .find_by_id_and_type(author_id, ObjectType::User, false)
            .map_err(|e| Error::builder(Self::COMPONENT, format!("author lookup failed: {e}")))
    }
}

impl IndexableBuilder for AuthorBuilder {
    fn name(&self) -> &str {
        Self::COMPONENT
    }

    fn understands(&self, object_type: ObjectType) -> bool {
        matches!(object_type, ObjectType::User | ObjectType::Post)
    }

    fn priority(&self, _object_type: ObjectType) -> i32 {
        2
    }

    fn build(
        &self,
        user_id: u64,
        indexable: &mut Indexable,
        context: &BuildContext,
    ) -> Result<BuildStatus> {
        if let Some(author) = self.existing_author(indexable)? {
            debug!(user_id, "Reusing stored author indexable");
            *indexable = author;
            return Ok(BuildStatus::Built);
        }

        let meta = self.meta_data(user_id);

        indexable.object_id = Some(user_id);
        indexable.object_type = Some(ObjectType::User);
        indexable.permalink = self.permalinks.author_posts_url(user_id);
        indexable.title = meta.title;
        indexable.description = meta.description;
        indexable.is_cornerstone = false;
        indexable.is_robots_noindex = Some(meta.noindex.as_deref() == Some(AUTHOR_NOINDEX_ON));
        indexable.is_robots_nofollow = None;
        indexable.is_robots_noarchive = None;
        indexable.is_robots_noimageindex = None;
        indexable.is_robots_nosnippet = None;
        indexable.is_public = indexable.derived_public_flag();
        indexable.has_public_posts = self.author_archive.author_has_public_posts(user_id);
        indexable.blog_id = Some(context.blog_id);

        self.social_images.reset(indexable);
        let alternative = self.alternative_image(user_id);
        self.social_images.apply(indexable, alternative.as_ref());

        Ok(BuildStatus::Built)
    }
}

fn author_builder_signature() -> Result<Option<ConstructorSignature>> {
    Ok(Some(ConstructorSignature::new(vec![
        Parameter::new("repository", ParameterType::Named("IndexableRepository")),
        Parameter::new("author_meta", ParameterType::Named("AuthorMetaHelper")),
        Parameter::new("author_archive", ParameterType::Named("AuthorArchiveHelper")),
        Parameter::new("permalinks", ParameterType::Named("PermalinkHelper")),
        Parameter::new("avatars", ParameterType::Named("AvatarHelper")),
    ])))
}

fn author_builder_factory(context: &InstantiationContext<'_>) -> Result<ComponentInstance> {
    let builder = Arc::new(AuthorBuilder::new(
        context.service::<dyn IndexableRepository>()?,
        context.service::<dyn AuthorMetaHelper>()?,
        context.service::<dyn AuthorArchiveHelper>()?,
        context.service::<dyn PermalinkHelper>()?,
        context.service::<dyn AvatarHelper>()?,
        SocialImageHelper::new(),
    ));
    Ok(ComponentInstance::new(Arc::clone(&builder))
        .with_facet::<dyn IndexableBuilder>(INDEXABLE_BUILDER, builder))
}

#[distributed_slice(COMPONENTS)]
static AUTHOR_BUILDER_COMPONENT: ComponentEntry = ComponentEntry {
    name: AuthorBuilder::COMPONENT,
    description: "Formats user meta into author archive indexables",
    implements: &[INDEXABLE_BUILDER],
    signature: author_builder_signature,
    factory: author_builder_factory,
};
