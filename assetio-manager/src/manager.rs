//! Manager plugin trait and the host-side handle wrapping it.

use crate::context::Context;
use crate::error::{BatchElementError, ErrorCode, ManagerResult};
use crate::log::{Severity, SharedLogger};
use crate::reference::EntityReference;
use crate::traits::{PropertyValue, TraitSet, TraitsData};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Settings handed to a manager at initialization.
pub type ManagerSettings = BTreeMap<String, PropertyValue>;

/// Implemented by asset managers.
///
/// `resolve` reports each element of the batch through exactly one of the
/// two callbacks, with the element's index in `references`. Callbacks fire
/// before `resolve` returns.
pub trait ManagerInterface: Send + Sync {
    /// Reverse-DNS identifier of the manager.
    fn identifier(&self) -> &str;

    fn display_name(&self) -> &str;

    /// Applies settings. Called once, before the manager is shared.
    fn initialize(&mut self, settings: &ManagerSettings) -> ManagerResult<()>;

    /// Whether `candidate` is syntactically one of this manager's references.
    fn is_entity_reference_string(&self, candidate: &str) -> bool;

    fn resolve(
        &self,
        references: &[EntityReference],
        traits: &TraitSet,
        context: &Context,
        on_success: &mut dyn FnMut(usize, TraitsData),
        on_error: &mut dyn FnMut(usize, BatchElementError),
    );
}

/// Shared host-side handle to an initialized manager.
///
/// Cloning is cheap; every clone talks to the same implementation.
#[derive(Clone)]
pub struct Manager {
    interface: Arc<dyn ManagerInterface>,
    logger: SharedLogger,
}

impl Manager {
    pub fn new(interface: Arc<dyn ManagerInterface>, logger: SharedLogger) -> Self {
        Self { interface, logger }
    }

    #[must_use]
    pub fn identifier(&self) -> &str {
        self.interface.identifier()
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        self.interface.display_name()
    }

    #[must_use]
    pub fn logger(&self) -> &SharedLogger {
        &self.logger
    }

    #[must_use]
    pub fn is_entity_reference_string(&self, candidate: &str) -> bool {
        self.interface.is_entity_reference_string(candidate)
    }

    /// Validates `candidate`, returning `None` if it is not a reference.
    #[must_use]
    pub fn create_entity_reference_if_valid(&self, candidate: &str) -> Option<EntityReference> {
        self.is_entity_reference_string(candidate)
            .then(|| EntityReference::new(candidate))
    }

    /// Validates `candidate`, failing if it is not a reference.
    pub fn create_entity_reference(&self, candidate: &str) -> ManagerResult<EntityReference> {
        self.create_entity_reference_if_valid(candidate)
            .ok_or_else(|| crate::ManagerError::InvalidEntityReference(candidate.to_string()))
    }

    /// Batch resolve with per-element callbacks.
    pub fn resolve(
        &self,
        references: &[EntityReference],
        traits: &TraitSet,
        context: &Context,
        on_success: &mut dyn FnMut(usize, TraitsData),
        on_error: &mut dyn FnMut(usize, BatchElementError),
    ) {
        if self.logger.is_severity_logged(Severity::DebugApi) {
            self.logger.debug_api(&format!(
                "{}: resolve {} reference(s) for traits [{}] ({:?})",
                self.identifier(),
                references.len(),
                traits.iter().collect::<Vec<_>>().join(", "),
                context.access,
            ));
        }
        self.interface
            .resolve(references, traits, context, on_success, on_error);
    }

    /// Resolves a single reference as a one-element batch.
    ///
    /// A manager that reports zero outcomes, or more than one, for the
    /// element, or reports any index other than 0, yields an `Unknown` error.
    pub fn resolve_one(
        &self,
        reference: &EntityReference,
        traits: &TraitSet,
        context: &Context,
    ) -> Result<TraitsData, BatchElementError> {
        let outcomes = RefCell::new(Vec::with_capacity(1));
        let stray_index = Cell::new(None);
        let record = |idx: usize, outcome: Result<TraitsData, BatchElementError>| {
            if idx == 0 {
                outcomes.borrow_mut().push(outcome);
            } else {
                stray_index.set(Some(idx));
            }
        };

        self.resolve(
            std::slice::from_ref(reference),
            traits,
            context,
            &mut |idx, data| record(idx, Ok(data)),
            &mut |idx, err| record(idx, Err(err)),
        );

        if let Some(idx) = stray_index.get() {
            return Err(BatchElementError::new(
                ErrorCode::Unknown,
                format!(
                    "manager '{}' reported an outcome for index {idx} of a one-element batch",
                    self.identifier()
                ),
            ));
        }

        let mut outcomes = outcomes.into_inner();
        match outcomes.len() {
            1 => outcomes.remove(0),
            count => Err(BatchElementError::new(
                ErrorCode::Unknown,
                format!(
                    "manager '{}' reported {count} outcomes for '{reference}', expected exactly one",
                    self.identifier()
                ),
            )),
        }
    }
}

impl fmt::Debug for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manager")
            .field("identifier", &self.identifier())
            .finish_non_exhaustive()
    }
}
