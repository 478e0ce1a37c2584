//! Indexable build manager
//!
//! Orchestrates builder selection, ordering and execution, snapshots the
//! indexable before any builder runs, and persists the result.
//!
//! ```text
//! Init → Snapshot → Dispatch → Hierarchy? → Persist → Done
//!   └────────┴──────────┴──────────┴───────────┴──→ Failed
//! ```

use idx_domain::error::{Error, Result};
use idx_domain::ports::{
    BuildStatus, DateArchiveBuilder, HierarchyBuilder, HomePageBuilder, IndexableBuilder,
    IndexableRepository, PostTypeArchiveBuilder, SystemPageBuilder,
};
use idx_domain::{
    BuildContext, DomainEvent, EventPublisher, Indexable, IndexableSnapshot, ObjectType,
};
use linkme::distributed_slice;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::ports::registry::{
    COMPONENTS, ComponentEntry, ComponentInstance, ConstructorSignature, INDEXABLE_BUILDER,
    InstantiationContext, Parameter, ParameterType,
};

/// Stage of a build request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    /// Resolving or allocating the indexable
    Init,
    /// Capturing the "before" copy
    Snapshot,
    /// Running the matching builders
    Dispatch,
    /// Updating the ancestor hierarchy
    Hierarchy,
    /// Notifying observers and saving
    Persist,
    /// Finished successfully
    Done,
    /// Aborted; nothing is returned as success
    Failed,
}

impl fmt::Display for BuildState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Init => "init",
            Self::Snapshot => "snapshot",
            Self::Dispatch => "dispatch",
            Self::Hierarchy => "hierarchy",
            Self::Persist => "persist",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// A builder that could not produce a result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderFailure {
    /// Builder name
    pub builder: String,
    /// Failure description
    pub message: String,
}

/// Outcome of a successful build
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// The persisted indexable
    pub indexable: Indexable,
    /// Builders invoked, in invocation order
    pub dispatched: Vec<String>,
    /// Builders that failed without aborting the build
    pub failures: Vec<BuilderFailure>,
    /// Whether the "unindexed" fallback record was persisted
    pub used_fallback: bool,
    /// Final state, always [`BuildState::Done`]
    pub state: BuildState,
}

/// Tracks the state of one build request
struct BuildRun {
    label: String,
    state: BuildState,
}

impl BuildRun {
    fn start(label: String) -> Self {
        debug!(build = %label, state = %BuildState::Init, "Build started");
        Self {
            label,
            state: BuildState::Init,
        }
    }

    fn advance(&mut self, next: BuildState) {
        debug!(build = %self.label, from = %self.state, to = %next, "Build transition");
        self.state = next;
    }

    fn fail(&mut self, error: Error) -> Error {
        warn!(build = %self.label, state = %self.state, error = %error, "Build failed");
        self.state = BuildState::Failed;
        error
    }

    fn guard<T>(&mut self, result: Result<T>) -> Result<T> {
        result.map_err(|error| self.fail(error))
    }
}

/// Builds and persists indexables
///
/// Builders are kept in registration order; dispatch sorts the matching
/// ones by priority with a stable sort, so equal priorities keep that order.
pub struct IndexableBuildManager {
    builders: Vec<Arc<dyn IndexableBuilder>>,
    repository: Arc<dyn IndexableRepository>,
    events: Option<Arc<dyn EventPublisher>>,
    hierarchy: Option<Arc<dyn HierarchyBuilder>>,
    home_page: Option<Arc<dyn HomePageBuilder>>,
    date_archive: Option<Arc<dyn DateArchiveBuilder>>,
    post_type_archive: Option<Arc<dyn PostTypeArchiveBuilder>>,
    system_page: Option<Arc<dyn SystemPageBuilder>>,
    context: BuildContext,
}

impl IndexableBuildManager {
    /// Registry name of the component
    pub const COMPONENT: &'static str = "indexable_build_manager";

    /// Create a manager over builders in registration order
    pub fn new(
        repository: Arc<dyn IndexableRepository>,
        builders: Vec<Arc<dyn IndexableBuilder>>,
    ) -> Self {
        Self {
            builders,
            repository,
            events: None,
            hierarchy: None,
            home_page: None,
            date_archive: None,
            post_type_archive: None,
            system_page: None,
            context: BuildContext::default(),
        }
    }

    /// Publish `indexable_saved` events through this publisher
    #[must_use]
    pub fn with_event_publisher(mut self, events: Arc<dyn EventPublisher>) -> Self {
        self.events = Some(events);
        self
    }

    /// Maintain post/term hierarchies with this collaborator
    #[must_use]
    pub fn with_hierarchy_builder(mut self, hierarchy: Arc<dyn HierarchyBuilder>) -> Self {
        self.hierarchy = Some(hierarchy);
        self
    }

    /// Designated home page builder
    #[must_use]
    pub fn with_home_page_builder(mut self, builder: Arc<dyn HomePageBuilder>) -> Self {
        self.home_page = Some(builder);
        self
    }

    /// Designated date archive builder
    #[must_use]
    pub fn with_date_archive_builder(mut self, builder: Arc<dyn DateArchiveBuilder>) -> Self {
        self.date_archive = Some(builder);
        self
    }

    /// Designated post type archive builder
    #[must_use]
    pub fn with_post_type_archive_builder(
        mut self,
        builder: Arc<dyn PostTypeArchiveBuilder>,
    ) -> Self {
        self.post_type_archive = Some(builder);
        self
    }

    /// Designated system page builder
    #[must_use]
    pub fn with_system_page_builder(mut self, builder: Arc<dyn SystemPageBuilder>) -> Self {
        self.system_page = Some(builder);
        self
    }

    /// Context handed to every builder
    #[must_use]
    pub fn with_context(mut self, context: BuildContext) -> Self {
        self.context = context;
        self
    }

    /// Registered builders, in registration order
    pub fn builders(&self) -> &[Arc<dyn IndexableBuilder>] {
        &self.builders
    }

    /// Builders that understand the object type, in invocation order
    pub fn dispatch_order(&self, object_type: ObjectType) -> Vec<Arc<dyn IndexableBuilder>> {
        let mut matching: Vec<_> = self
            .builders
            .iter()
            .filter(|builder| builder.understands(object_type))
            .cloned()
            .collect();
        matching.sort_by_key(|builder| builder.priority(object_type));
        matching
    }

    /// Build the indexable of an object
    ///
    /// `indexable` is an existing record to overwrite; a new one is
    /// requested from the repository otherwise.
    pub fn build_for_id_and_type(
        &self,
        object_id: u64,
        object_type: ObjectType,
        indexable: Option<Indexable>,
    ) -> Result<Indexable> {
        self.build_with_report(object_id, object_type, indexable)
            .map(|report| report.indexable)
    }

    /// [`Self::build_for_id_and_type`] returning dispatch details
    ///
    /// Home pages, date archives, post type archives and system pages are
    /// rejected; they go through their `build_for_*` entry points.
    pub fn build_with_report(
        &self,
        object_id: u64,
        object_type: ObjectType,
        indexable: Option<Indexable>,
    ) -> Result<BuildReport> {
        let mut run = BuildRun::start(format!("{object_type}#{object_id}"));
        if object_type.is_designated() {
            return Err(run.fail(Error::lookup(format!(
                "Object type '{object_type}' has a designated builder and is not dispatched"
            ))));
        }

        let mut indexable = run.guard(self.ensure_indexable(indexable))?;
        run.advance(BuildState::Snapshot);
        let before = run.guard(self.snapshot(&indexable))?;

        run.advance(BuildState::Dispatch);
        let mut dispatched = Vec::new();
        let mut failures = Vec::new();
        let mut produced = false;
        for builder in self.dispatch_order(object_type) {
            dispatched.push(builder.name().to_string());
            match builder.build(object_id, &mut indexable, &self.context) {
                Ok(BuildStatus::Built) => produced = true,
                Ok(BuildStatus::NoResult) => {
                    debug!(builder = builder.name(), object_id, "Builder produced no result");
                }
                Err(error) if error.is_builder_failure() => {
                    warn!(builder = builder.name(), object_id, error = %error, "Builder failed");
                    failures.push(BuilderFailure {
                        builder: builder.name().to_string(),
                        message: error.to_string(),
                    });
                }
                Err(error) => return Err(run.fail(error)),
            }
        }

        let used_fallback = !produced;
        if used_fallback {
            info!(
                %object_type,
                object_id,
                "No builder produced a result, storing unindexed record"
            );
            indexable = run.guard(
                self.repository
                    .create(Indexable::unindexed(object_id, object_type)),
            )?;
        }

        if object_type.is_hierarchical() && !indexable.is_unindexed() {
            run.advance(BuildState::Hierarchy);
            match &self.hierarchy {
                Some(hierarchy) => run.guard(hierarchy.build(&indexable))?,
                None => debug!("No hierarchy builder wired, skipping"),
            }
        }

        run.advance(BuildState::Persist);
        run.guard(self.save_indexable(&mut indexable, Some(before)))?;
        run.advance(BuildState::Done);

        Ok(BuildReport {
            indexable,
            dispatched,
            failures,
            used_fallback,
            state: BuildState::Done,
        })
    }

    /// Build the home page indexable
    pub fn build_for_home_page(&self, indexable: Option<Indexable>) -> Result<Indexable> {
        let builder = self
            .home_page
            .as_ref()
            .ok_or_else(|| Error::missing_collaborator("home page builder"))?;
        self.build_designated("home-page", indexable, |indexable| {
            builder.build(indexable, &self.context)
        })
    }

    /// Build the date archive indexable
    pub fn build_for_date_archive(&self, indexable: Option<Indexable>) -> Result<Indexable> {
        let builder = self
            .date_archive
            .as_ref()
            .ok_or_else(|| Error::missing_collaborator("date archive builder"))?;
        self.build_designated("date-archive", indexable, |indexable| {
            builder.build(indexable, &self.context)
        })
    }

    /// Build the archive indexable of a post type
    pub fn build_for_post_type_archive(
        &self,
        post_type: &str,
        indexable: Option<Indexable>,
    ) -> Result<Indexable> {
        let builder = self
            .post_type_archive
            .as_ref()
            .ok_or_else(|| Error::missing_collaborator("post type archive builder"))?;
        self.build_designated(
            &format!("post-type-archive:{post_type}"),
            indexable,
            |indexable| builder.build(post_type, indexable, &self.context),
        )
    }

    /// Build the indexable of a system page
    pub fn build_for_system_page(
        &self,
        object_sub_type: &str,
        indexable: Option<Indexable>,
    ) -> Result<Indexable> {
        let builder = self
            .system_page
            .as_ref()
            .ok_or_else(|| Error::missing_collaborator("system page builder"))?;
        self.build_designated(
            &format!("system-page:{object_sub_type}"),
            indexable,
            |indexable| builder.build(object_sub_type, indexable, &self.context),
        )
    }

    /// Snapshot, run one designated builder and persist
    fn build_designated<F>(
        &self,
        label: &str,
        indexable: Option<Indexable>,
        build: F,
    ) -> Result<Indexable>
    where
        F: FnOnce(&mut Indexable) -> Result<()>,
    {
        let mut run = BuildRun::start(label.to_string());

        let mut indexable = run.guard(self.ensure_indexable(indexable))?;
        run.advance(BuildState::Snapshot);
        let before = run.guard(self.snapshot(&indexable))?;

        run.advance(BuildState::Dispatch);
        run.guard(build(&mut indexable))?;

        run.advance(BuildState::Persist);
        run.guard(self.save_indexable(&mut indexable, Some(before)))?;
        run.advance(BuildState::Done);

        Ok(indexable)
    }

    fn ensure_indexable(&self, indexable: Option<Indexable>) -> Result<Indexable> {
        match indexable {
            Some(indexable) => Ok(indexable),
            None => self
                .repository
                .create(Indexable::default())
                .map_err(|e| Error::lookup(format!("Unable to create indexable: {e}"))),
        }
    }

    fn snapshot(&self, indexable: &Indexable) -> Result<IndexableSnapshot> {
        self.repository
            .create(indexable.clone())
            .map(IndexableSnapshot::from)
            .map_err(|e| Error::lookup(format!("Unable to hydrate indexable snapshot: {e}")))
    }

    /// Notify observers, then save
    fn save_indexable(
        &self,
        indexable: &mut Indexable,
        before: Option<IndexableSnapshot>,
    ) -> Result<()> {
        if let (Some(before), Some(events)) = (before, &self.events) {
            let event = DomainEvent::IndexableSaved {
                before,
                after: indexable.clone(),
            };
            if let Err(error) = events.publish(event) {
                warn!(error = %error, "Failed to publish indexable_saved event");
            }
        }

        self.repository.save(indexable).map_err(|error| {
            if matches!(error, Error::Persist { .. }) {
                error
            } else {
                Error::persist_with_source("Failed to save indexable", error)
            }
        })
    }
}

impl fmt::Debug for IndexableBuildManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let builders: Vec<_> = self.builders.iter().map(|builder| builder.name()).collect();
        f.debug_struct("IndexableBuildManager")
            .field("builders", &builders)
            .field("events", &self.events.is_some())
            .field("hierarchy", &self.hierarchy.is_some())
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

fn build_manager_signature() -> Result<Option<ConstructorSignature>> {
    Ok(Some(ConstructorSignature::new(vec![Parameter::variadic(
        "builders",
        ParameterType::Capability(INDEXABLE_BUILDER),
    )])))
}

fn build_manager_factory(context: &InstantiationContext<'_>) -> Result<ComponentInstance> {
    let builders = context.variadic::<dyn IndexableBuilder>(INDEXABLE_BUILDER)?;
    let mut manager =
        IndexableBuildManager::new(context.service::<dyn IndexableRepository>()?, builders);

    if let Some(build_context) = context.optional_service::<BuildContext>() {
        manager = manager.with_context(*build_context);
    }
    if let Some(events) = context.optional_service::<dyn EventPublisher>() {
        manager = manager.with_event_publisher(events);
    }
    if let Some(hierarchy) = context.optional_service::<dyn HierarchyBuilder>() {
        manager = manager.with_hierarchy_builder(hierarchy);
    }
    if let Some(builder) = context.optional_service::<dyn HomePageBuilder>() {
        manager = manager.with_home_page_builder(builder);
    }
    if let Some(builder) = context.optional_service::<dyn DateArchiveBuilder>() {
        manager = manager.with_date_archive_builder(builder);
    }
    if let Some(builder) = context.optional_service::<dyn PostTypeArchiveBuilder>() {
        manager = manager.with_post_type_archive_builder(builder);
    }
    if let Some(builder) = context.optional_service::<dyn SystemPageBuilder>() {
        manager = manager.with_system_page_builder(builder);
    }

    debug!(builders = manager.builders().len(), "Indexable build manager wired");
    Ok(ComponentInstance::new(Arc::new(manager)))
}

#[distributed_slice(COMPONENTS)]
static BUILD_MANAGER_COMPONENT: ComponentEntry = ComponentEntry {
    name: IndexableBuildManager::COMPONENT,
    description: "Dispatches indexable builders by priority and persists the result",
    implements: &[],
    signature: build_manager_signature,
    factory: build_manager_factory,
};
