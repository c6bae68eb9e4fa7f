//! Shared fixtures: a scripted manager serving `scheme://` references.

#![allow(dead_code)]

use assetio_manager::{
    BatchElementError, Context, EntityReference, ErrorCode, LocatableContent, Manager,
    ManagerInterface, ManagerResult, ManagerSettings, TraitSet, TraitsData, TracingLogger,
};
use assetio_resolver::{DefaultResolver, ManagedResolver};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

pub const PREFIX: &str = "scheme://";

/// What the scripted manager answers for one entity.
#[derive(Debug, Clone)]
pub enum Answer {
    /// `content.LocatableContent` with this `location`.
    Location(String),
    /// Imbued with `content.LocatableContent` but no `location`.
    NoLocation,
    Error(ErrorCode, String),
}

#[derive(Debug, Default)]
pub struct ScriptedManager {
    answers: HashMap<String, Answer>,
    queries: AtomicUsize,
}

impl ScriptedManager {
    pub fn with(mut self, reference: &str, answer: Answer) -> Self {
        self.answers.insert(reference.to_string(), answer);
        self
    }

    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl ManagerInterface for ScriptedManager {
    fn identifier(&self) -> &str {
        "test.scripted"
    }

    fn display_name(&self) -> &str {
        "Scripted Manager"
    }

    fn initialize(&mut self, _settings: &ManagerSettings) -> ManagerResult<()> {
        Ok(())
    }

    fn is_entity_reference_string(&self, candidate: &str) -> bool {
        candidate.starts_with(PREFIX)
    }

    fn resolve(
        &self,
        references: &[EntityReference],
        traits: &TraitSet,
        _context: &Context,
        on_success: &mut dyn FnMut(usize, TraitsData),
        on_error: &mut dyn FnMut(usize, BatchElementError),
    ) {
        assert!(traits.contains(LocatableContent::ID));
        for (idx, reference) in references.iter().enumerate() {
            self.queries.fetch_add(1, Ordering::SeqCst);
            match self.answers.get(reference.as_str()) {
                Some(Answer::Location(url)) => {
                    let mut data = TraitsData::new();
                    LocatableContent::set_location(&mut data, url.clone());
                    on_success(idx, data);
                }
                Some(Answer::NoLocation) => {
                    let mut data = TraitsData::new();
                    data.add_trait(LocatableContent::ID);
                    on_success(idx, data);
                }
                Some(Answer::Error(code, message)) => {
                    on_error(idx, BatchElementError::new(*code, message.clone()));
                }
                None => on_error(
                    idx,
                    BatchElementError::new(ErrorCode::EntityResolutionError, "unknown entity"),
                ),
            }
        }
    }
}

pub fn managed(manager: ScriptedManager) -> (ManagedResolver<DefaultResolver>, Arc<ScriptedManager>) {
    managed_over(manager, DefaultResolver::new())
}

/// Routes dispatcher traces to the test harness; filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn managed_over(
    manager: ScriptedManager,
    fallback: DefaultResolver,
) -> (ManagedResolver<DefaultResolver>, Arc<ScriptedManager>) {
    init_tracing();
    let scripted = Arc::new(manager);
    let handle = Manager::new(scripted.clone(), Arc::new(TracingLogger));
    (ManagedResolver::new(handle, fallback), scripted)
}

/// Field values of one captured `tracing` event, rendered with `Debug`.
pub type EventFields = BTreeMap<String, String>;

#[derive(Clone, Default)]
struct CaptureLayer(Arc<Mutex<Vec<EventFields>>>);

struct FieldRecorder<'a>(&'a mut EventFields);

impl tracing::field::Visit for FieldRecorder<'_> {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for CaptureLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut fields = EventFields::new();
        event.record(&mut FieldRecorder(&mut fields));
        self.0.lock().unwrap().push(fields);
    }
}

/// Runs `f` with a thread-local subscriber and returns every event it emitted.
pub fn capture_events(f: impl FnOnce()) -> Vec<EventFields> {
    use tracing_subscriber::layer::SubscriberExt;

    let layer = CaptureLayer::default();
    tracing::subscriber::with_default(tracing_subscriber::registry().with(layer.clone()), f);
    let events = layer.0.lock().unwrap().clone();
    events
}

/// The single event tagged with `op`.
pub fn op_event(events: &[EventFields], op: &str) -> EventFields {
    let matching: Vec<_> = events
        .iter()
        .filter(|fields| fields.get("op").map(String::as_str) == Some(op))
        .collect();
    assert_eq!(matching.len(), 1, "expected one '{op}' event in {events:?}");
    matching[0].clone()
}
