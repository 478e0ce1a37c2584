//! Composition root
//!
//! ```text
//! AppConfig → Services (repositories, content, events, context)
//!          → ComponentRegistry (linkme, minus disabled) → resolver → container
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = AppContext::build(ConfigLoader::new().load()?)?;
//! let manager = context.build_manager()?;
//! let indexable = manager.build_for_id_and_type(42, ObjectType::User, None)?;
//! ```

use crate::config::AppConfig;
use idx_application::IndexableBuildManager;
use idx_application::ports::registry::Services;
use idx_domain::error::{Error, Result};
use idx_domain::events::{DomainEvent, EventPublisher};
use idx_domain::ports::{
    AuthorArchiveHelper, AuthorMetaHelper, AvatarHelper, IndexableRepository, MetaHelper,
    PermalinkHelper, PrimaryTermHelper, PrimaryTermRepository,
};
use idx_providers::{
    FixtureContentStore, InMemoryIndexableRepository, InMemoryPrimaryTermRepository,
    NullEventPublisher, TokioBroadcastEventBus,
};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::info;

use super::container::ComponentContainer;
use super::registry::ComponentRegistry;
use super::resolver::{ResolutionReport, VariadicInjectionResolver};

/// Application context with the wired components and their collaborators
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    registry: ComponentRegistry,
    resolution: ResolutionReport,
    container: ComponentContainer,

    indexables: Arc<InMemoryIndexableRepository>,
    primary_terms: Arc<InMemoryPrimaryTermRepository>,
    event_bus: Option<Arc<TokioBroadcastEventBus>>,
}

impl AppContext {
    /// Wire the application, reading content from the configured fixture
    pub fn build(config: AppConfig) -> Result<Self> {
        let content = match &config.content.fixture_path {
            Some(path) => FixtureContentStore::from_path(path)?,
            None => FixtureContentStore::default(),
        };
        Self::build_with_content(config, content)
    }

    /// Wire the application over the given content
    pub fn build_with_content(config: AppConfig, content: FixtureContentStore) -> Result<Self> {
        let indexables = Arc::new(InMemoryIndexableRepository::new());
        let primary_terms = Arc::new(InMemoryPrimaryTermRepository::new());
        let content = Arc::new(content);

        let event_bus = config
            .events
            .enabled
            .then(|| Arc::new(TokioBroadcastEventBus::with_capacity(config.events.capacity)));
        let publisher: Arc<dyn EventPublisher> = match &event_bus {
            Some(bus) => Arc::clone(bus) as Arc<dyn EventPublisher>,
            None => NullEventPublisher::new_shared() as Arc<dyn EventPublisher>,
        };

        let services = Services::new()
            .with::<dyn IndexableRepository>(indexables.clone())
            .with::<dyn PrimaryTermRepository>(primary_terms.clone())
            .with::<dyn MetaHelper>(content.clone())
            .with::<dyn AuthorMetaHelper>(content.clone())
            .with::<dyn AuthorArchiveHelper>(content.clone())
            .with::<dyn PrimaryTermHelper>(content.clone())
            .with::<dyn PermalinkHelper>(content.clone())
            .with::<dyn AvatarHelper>(content)
            .with::<dyn EventPublisher>(publisher)
            .with(Arc::new(config.site.build_context()));

        let mut registry = ComponentRegistry::from_linked_except(&config.components.disabled)?;
        let resolution = VariadicInjectionResolver::new().resolve(&mut registry);
        let container = ComponentContainer::build(&registry, &services)?;

        info!(
            components = container.len(),
            events = config.events.enabled,
            blog_id = config.site.blog_id,
            "Application context ready"
        );

        Ok(Self {
            config: Arc::new(config),
            registry,
            resolution,
            container,
            indexables,
            primary_terms,
            event_bus,
        })
    }

    /// The wired build manager
    pub fn build_manager(&self) -> Result<Arc<IndexableBuildManager>> {
        self.container
            .get::<IndexableBuildManager>(IndexableBuildManager::COMPONENT)
            .ok_or_else(|| Error::missing_collaborator(IndexableBuildManager::COMPONENT))
    }

    /// Subscribe to pipeline events; `None` when events are disabled
    pub fn subscribe(&self) -> Option<broadcast::Receiver<DomainEvent>> {
        self.event_bus.as_ref().map(|bus| bus.subscribe())
    }

    /// Get the event bus
    pub fn event_bus(&self) -> Option<Arc<TokioBroadcastEventBus>> {
        self.event_bus.clone()
    }

    /// Compiled registry
    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Variadic bindings of the registry
    pub fn resolution(&self) -> &ResolutionReport {
        &self.resolution
    }

    /// Instantiated components
    pub fn container(&self) -> &ComponentContainer {
        &self.container
    }

    /// Indexable storage
    pub fn indexables(&self) -> Arc<InMemoryIndexableRepository> {
        self.indexables.clone()
    }

    /// Primary term storage
    pub fn primary_terms(&self) -> Arc<InMemoryPrimaryTermRepository> {
        self.primary_terms.clone()
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("components", &self.container.ids())
            .field("events", &self.event_bus.is_some())
            .finish_non_exhaustive()
    }
}
