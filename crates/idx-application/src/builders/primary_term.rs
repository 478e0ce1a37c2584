//! Primary term builder
//!
//! Side-channel builder: stores the primary term of each taxonomy of a post
//! and leaves the indexable untouched.

use idx_domain::constants::PRIMARY_TERM_META_PREFIX;
use idx_domain::error::{Error, Result};
use idx_domain::ports::{
    BuildStatus, IndexableBuilder, MetaHelper, PrimaryTermHelper, PrimaryTermRepository,
};
use idx_domain::{BuildContext, Indexable, ObjectType};
use linkme::distributed_slice;
use std::sync::Arc;
use tracing::debug;

use crate::ports::registry::{
    COMPONENTS, ComponentEntry, ComponentInstance, ConstructorSignature, INDEXABLE_BUILDER,
    InstantiationContext, Parameter, ParameterType,
};

/// Saves primary term associations for posts
pub struct PrimaryTermBuilder {
    repository: Arc<dyn PrimaryTermRepository>,
    primary_terms: Arc<dyn PrimaryTermHelper>,
    meta: Arc<dyn MetaHelper>,
}

impl PrimaryTermBuilder {
    /// Registry name of the component
    pub const COMPONENT: &'static str = "primary_term_builder";

    /// Create the builder from its collaborators
    pub fn new(
        repository: Arc<dyn PrimaryTermRepository>,
        primary_terms: Arc<dyn PrimaryTermHelper>,
        meta: Arc<dyn MetaHelper>,
    ) -> Self {
        Self {
            repository,
            primary_terms,
            meta,
        }
    }

    /// Selected term of a taxonomy; `0` and empty values mean "none"
    fn selected_term(&self, post_id: u64, taxonomy: &str) -> Result<Option<u64>> {
        let key = format!("{PRIMARY_TERM_META_PREFIX}{taxonomy}");
        let Some(raw) = self.meta.get_value(&key, post_id) else {
            return Ok(None);
        };
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        let term_id = raw.parse::<u64>().map_err(|_| {
            Error::builder(
                Self::COMPONENT,
                format!("meta '{key}' of post {post_id} is not a term id: '{raw}'"),
            )
        })?;
        Ok((term_id != 0).then_some(term_id))
    }

    fn save_primary_term(
        &self,
        post_id: u64,
        taxonomy: &str,
        context: &BuildContext,
    ) -> Result<()> {
        let term_id = self.selected_term(post_id, taxonomy)?;
        let primary_term = self
            .repository
            .find_by_post_id_and_taxonomy(post_id, taxonomy, term_id.is_some())
            .map_err(|e| Error::builder(Self::COMPONENT, e.to_string()))?;

        let Some(term_id) = term_id else {
            if let Some(existing) = primary_term {
                debug!(post_id, taxonomy, "Removing primary term without selection");
                self.repository
                    .delete(&existing)
                    .map_err(|e| Error::builder(Self::COMPONENT, e.to_string()))?;
            }
            return Ok(());
        };

        let mut primary_term = primary_term.ok_or_else(|| {
            Error::builder(
                Self::COMPONENT,
                format!("no primary term record for post {post_id} in '{taxonomy}'"),
            )
        })?;
        primary_term.term_id = Some(term_id);
        primary_term.post_id = post_id;
        primary_term.taxonomy = taxonomy.to_string();
        primary_term.blog_id = Some(context.blog_id);
        self.repository
            .save(&mut primary_term)
            .map_err(|e| Error::builder(Self::COMPONENT, e.to_string()))
    }
}

impl IndexableBuilder for PrimaryTermBuilder {
    fn name(&self) -> &str {
        Self::COMPONENT
    }

    fn understands(&self, object_type: ObjectType) -> bool {
        object_type == ObjectType::Post
    }

    fn priority(&self, _object_type: ObjectType) -> i32 {
        1
    }

    fn build(
        &self,
        post_id: u64,
        _indexable: &mut Indexable,
        context: &BuildContext,
    ) -> Result<BuildStatus> {
        for taxonomy in self.primary_terms.primary_term_taxonomies(post_id) {
            self.save_primary_term(post_id, &taxonomy, context)?;
        }
        Ok(BuildStatus::NoResult)
    }
}

fn primary_term_builder_signature() -> Result<Option<ConstructorSignature>> {
    Ok(Some(ConstructorSignature::new(vec![
        Parameter::new("repository", ParameterType::Named("PrimaryTermRepository")),
        Parameter::new("primary_terms", ParameterType::Named("PrimaryTermHelper")),
        Parameter::new("meta", ParameterType::Named("MetaHelper")),
    ])))
}

fn primary_term_builder_factory(context: &InstantiationContext<'_>) -> Result<ComponentInstance> {
    let builder = Arc::new(PrimaryTermBuilder::new(
        context.service::<dyn PrimaryTermRepository>()?,
        context.service::<dyn PrimaryTermHelper>()?,
        context.service::<dyn MetaHelper>()?,
    ));
    Ok(ComponentInstance::new(Arc::clone(&builder))
        .with_facet::<dyn IndexableBuilder>(INDEXABLE_BUILDER, builder))
}

#[distributed_slice(COMPONENTS)]
static PRIMARY_TERM_BUILDER_COMPONENT: ComponentEntry = ComponentEntry {
    name: PrimaryTermBuilder::COMPONENT,
    description: "Stores the primary term of each taxonomy of a post",
    implements: &[INDEXABLE_BUILDER],
    signature: primary_term_builder_signature,
    factory: primary_term_builder_factory,
};
