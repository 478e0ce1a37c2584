//! Shared doubles for application tests

use idx_domain::error::{Error, Result};
use idx_domain::ports::{BuildStatus, IndexableBuilder, IndexableRepository};
use idx_domain::{BuildContext, DomainEvent, EventPublisher, Indexable, ObjectType};
use idx_providers::InMemoryIndexableRepository;
use std::sync::{Arc, Mutex};

/// Ordered record of what the doubles observed
pub type CallLog = Arc<Mutex<Vec<String>>>;

pub fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn entries(log: &CallLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

/// What a [`ScriptedBuilder`] does when run
#[derive(Clone)]
pub enum Outcome {
    Built,
    NoResult,
    BuilderError,
    FatalError,
}

/// Builder with fixed answers that logs every call
pub struct ScriptedBuilder {
    name: &'static str,
    types: Vec<ObjectType>,
    priority: i32,
    outcome: Outcome,
    log: CallLog,
}

impl ScriptedBuilder {
    pub fn new(
        name: &'static str,
        types: &[ObjectType],
        priority: i32,
        outcome: Outcome,
        log: &CallLog,
    ) -> Arc<dyn IndexableBuilder> {
        Arc::new(Self {
            name,
            types: types.to_vec(),
            priority,
            outcome,
            log: Arc::clone(log),
        })
    }
}

impl IndexableBuilder for ScriptedBuilder {
    fn name(&self) -> &str {
        self.name
    }

    fn understands(&self, object_type: ObjectType) -> bool {
        self.types.contains(&object_type)
    }

    fn priority(&self, _object_type: ObjectType) -> i32 {
        self.priority
    }

    fn build(
        &self,
        object_id: u64,
        indexable: &mut Indexable,
        _context: &BuildContext,
    ) -> Result<BuildStatus> {
        self.log.lock().unwrap().push(format!("build:{}", self.name));
        match self.outcome {
            Outcome::Built => {
                indexable.object_id = Some(object_id);
                indexable.title = Some(format!("built by {}", self.name));
                indexable.object_type.get_or_insert(self.types[0]);
                Ok(BuildStatus::Built)
            }
            Outcome::NoResult => Ok(BuildStatus::NoResult),
            Outcome::BuilderError => Err(Error::builder(self.name, "content missing")),
            Outcome::FatalError => Err(Error::internal("builder crashed")),
        }
    }
}

/// Publisher recording event names into the call log
pub struct RecordingPublisher {
    pub events: Mutex<Vec<DomainEvent>>,
    log: CallLog,
}

impl RecordingPublisher {
    pub fn new(log: &CallLog) -> Arc<Self> {
        Arc::new(Self {
            events: Mutex::new(Vec::new()),
            log: Arc::clone(log),
        })
    }
}

impl EventPublisher for RecordingPublisher {
    fn publish(&self, event: DomainEvent) -> Result<()> {
        self.log.lock().unwrap().push(format!("publish:{}", event.name()));
        self.events.lock().unwrap().push(event);
        Ok(())
    }

    fn has_subscribers(&self) -> bool {
        true
    }
}

/// Repository delegating to the in-memory one while logging calls
pub struct LoggingRepository {
    inner: InMemoryIndexableRepository,
    log: CallLog,
    fail_save: bool,
}

impl LoggingRepository {
    pub fn new(log: &CallLog) -> Arc<Self> {
        Arc::new(Self {
            inner: InMemoryIndexableRepository::new(),
            log: Arc::clone(log),
            fail_save: false,
        })
    }

    pub fn failing_save(log: &CallLog) -> Arc<Self> {
        Arc::new(Self {
            inner: InMemoryIndexableRepository::new(),
            log: Arc::clone(log),
            fail_save: true,
        })
    }

    pub fn stored(&self) -> Vec<Indexable> {
        self.inner.all()
    }
}

impl IndexableRepository for LoggingRepository {
    fn create(&self, initial: Indexable) -> Result<Indexable> {
        self.log.lock().unwrap().push("create".to_string());
        self.inner.create(initial)
    }

    fn find_by_id_and_type(
        &self,
        object_id: u64,
        object_type: ObjectType,
        auto_create: bool,
    ) -> Result<Option<Indexable>> {
        self.inner
            .find_by_id_and_type(object_id, object_type, auto_create)
    }

    fn save(&self, indexable: &mut Indexable) -> Result<()> {
        self.log.lock().unwrap().push("save".to_string());
        if self.fail_save {
            return Err(Error::internal("disk full"));
        }
        self.inner.save(indexable)
    }

    fn delete(&self, indexable: &Indexable) -> Result<()> {
        self.inner.delete(indexable)
    }
}
