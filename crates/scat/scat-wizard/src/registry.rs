//! StepperRegistry: one stepper per user, shared across threads via DashMap.
//!
//! Steppers held here queue their events. The registry dispatches them only
//! after the map entry is released, so handlers may call back into the
//! registry, including for the same user.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use scat_core::catalog::Catalog;
use scat_core::errors::{ScatError, ScatResult};
use scat_core::{IProgressStore, ScatConfig};

use crate::events::{EventDispatcher, WizardEvent};
use crate::stepper::{FormStepper, LoadOutcome};

/// Result of a [`StepperRegistry::save_all`] pass.
#[derive(Debug, Default)]
pub struct SaveSummary {
    pub saved: usize,
    pub failures: Vec<(String, ScatError)>,
}

impl SaveSummary {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Open steppers keyed by user id. All steppers share one catalog, store,
/// config, and event dispatcher.
pub struct StepperRegistry {
    catalog: Arc<Catalog>,
    store: Arc<dyn IProgressStore>,
    config: ScatConfig,
    events: EventDispatcher,
    steppers: DashMap<String, FormStepper>,
}

impl StepperRegistry {
    pub fn new(catalog: Arc<Catalog>, store: Arc<dyn IProgressStore>, config: ScatConfig) -> Self {
        Self {
            catalog,
            store,
            config,
            events: EventDispatcher::new(),
            steppers: DashMap::new(),
        }
    }

    pub fn with_events(mut self, events: EventDispatcher) -> Self {
        self.events = events;
        self
    }

    pub fn config(&self) -> &ScatConfig {
        &self.config
    }

    /// Create the user's stepper and restore their stored progress.
    /// Returns `None` without reloading if the user already has one open.
    pub fn open(&self, user_id: &str) -> ScatResult<Option<LoadOutcome>> {
        let (outcome, events) = match self.steppers.entry(user_id.to_string()) {
            Entry::Occupied(_) => return Ok(None),
            Entry::Vacant(slot) => {
                let mut stepper =
                    FormStepper::new(Arc::clone(&self.catalog), Arc::clone(&self.store), user_id)
                        .with_config(self.config.clone())
                        .with_deferred_events();
                let outcome = stepper.load_progress()?;
                let events = stepper.take_pending_events();
                slot.insert(stepper);
                (outcome, events)
            }
        };
        tracing::debug!(user_id, "stepper opened");
        self.events.dispatch_all(events);
        Ok(Some(outcome))
    }

    /// Run `f` against the user's stepper. `None` if the user has none open.
    ///
    /// `f` runs with the user's entry locked and must not call back into the
    /// registry. Events it triggers are dispatched after `f` returns.
    pub fn with_stepper<R>(&self, user_id: &str, f: impl FnOnce(&mut FormStepper) -> R) -> Option<R> {
        let (result, events) = {
            let mut entry = self.steppers.get_mut(user_id)?;
            let stepper = entry.value_mut();
            let result = f(&mut *stepper);
            (result, stepper.take_pending_events())
        };
        self.events.dispatch_all(events);
        Some(result)
    }

    /// Save every open stepper. Failures are collected, not short-circuited.
    pub fn save_all(&self) -> SaveSummary {
        let mut summary = SaveSummary::default();
        let mut events: Vec<WizardEvent> = Vec::new();
        for mut entry in self.steppers.iter_mut() {
            let stepper = entry.value_mut();
            let result = stepper.save_progress();
            events.extend(stepper.take_pending_events());
            match result {
                Ok(_) => summary.saved += 1,
                Err(e) => {
                    tracing::warn!(user_id = %entry.key(), error = %e, "save failed");
                    summary.failures.push((entry.key().clone(), e));
                }
            }
        }
        self.events.dispatch_all(events);
        summary
    }

    /// Save the user's stepper and drop it, as one step under the entry lock,
    /// so no mutation can land between the save and the removal. A failed
    /// save keeps the stepper open.
    pub fn close(&self, user_id: &str) -> ScatResult<bool> {
        let mut saved: Option<ScatResult<()>> = None;
        let removed = self.steppers.remove_if_mut(user_id, |_, stepper| {
            let result = stepper.save_progress().map(|_| ());
            let ok = result.is_ok();
            saved = Some(result);
            ok
        });

        match (removed, saved) {
            (Some((_, mut stepper)), _) => {
                tracing::debug!(user_id, "stepper closed");
                self.events.dispatch_all(stepper.take_pending_events());
                Ok(true)
            }
            (None, Some(Err(e))) => Err(e),
            (None, _) => Ok(false),
        }
    }

    pub fn user_ids(&self) -> Vec<String> {
        self.steppers.iter().map(|r| r.key().clone()).collect()
    }

    pub fn contains(&self, user_id: &str) -> bool {
        self.steppers.contains_key(user_id)
    }

    pub fn len(&self) -> usize {
        self.steppers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steppers.is_empty()
    }
}
