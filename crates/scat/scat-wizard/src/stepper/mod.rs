//! FormStepper: one user's pass through the three SCAT sections.

mod mutation;
mod navigation;
mod persistence;
mod progress;

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use scat_core::catalog::{Catalog, Cause, Section};
use scat_core::{CauseValidation, IProgressStore, ScatConfig, SectionId};

use crate::events::{EventDispatcher, WizardEvent};

pub use persistence::LoadOutcome;

/// Wizard state machine for a single user.
///
/// Position is `(current_section, current_cause)` with the cause index always
/// inside the section's bounds. Validations are created lazily on the first
/// mutation of a cause and only removed by [`FormStepper::reset_form`].
pub struct FormStepper {
    catalog: Arc<Catalog>,
    store: Arc<dyn IProgressStore>,
    config: ScatConfig,
    user_id: String,
    current_section: SectionId,
    current_cause: usize,
    validations: BTreeMap<String, CauseValidation>,
    events: EventDispatcher,
    /// `Some` while events are queued instead of dispatched.
    pending: Option<Vec<WizardEvent>>,
    last_saved: Option<DateTime<Utc>>,
    dirty: bool,
}

impl FormStepper {
    /// Fresh stepper at `(ci, 0)` with default configuration. Nothing is read
    /// from the store until [`FormStepper::load_progress`].
    pub fn new(
        catalog: Arc<Catalog>,
        store: Arc<dyn IProgressStore>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            store,
            config: ScatConfig::default(),
            user_id: user_id.into(),
            current_section: SectionId::Ci,
            current_cause: 0,
            validations: BTreeMap::new(),
            events: EventDispatcher::new(),
            pending: None,
            last_saved: None,
            dirty: false,
        }
    }

    pub fn with_config(mut self, config: ScatConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_events(mut self, events: EventDispatcher) -> Self {
        self.events = events;
        self
    }

    /// Queue events instead of dispatching them; drain with
    /// [`FormStepper::take_pending_events`]. For hosts that keep the stepper
    /// behind a lock their handlers may need.
    pub fn with_deferred_events(mut self) -> Self {
        self.pending = Some(Vec::new());
        self
    }

    /// Events queued since the last call. Empty unless deferring.
    pub fn take_pending_events(&mut self) -> Vec<WizardEvent> {
        self.pending.as_mut().map(std::mem::take).unwrap_or_default()
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn config(&self) -> &ScatConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Key this stepper's snapshot lives under.
    pub fn storage_key(&self) -> String {
        self.config.persistence.storage_key(&self.user_id)
    }

    pub fn current_section(&self) -> SectionId {
        self.current_section
    }

    pub fn current_cause(&self) -> usize {
        self.current_cause
    }

    pub fn current_section_data(&self) -> &Section {
        self.catalog.section(self.current_section)
    }

    pub fn current_cause_data(&self) -> &Cause {
        &self.current_section_data().causes[self.current_cause]
    }

    pub fn validations(&self) -> &BTreeMap<String, CauseValidation> {
        &self.validations
    }

    pub fn validation(&self, cause_id: &str) -> Option<&CauseValidation> {
        self.validations.get(cause_id)
    }

    /// When the last successful save happened, if any.
    pub fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.last_saved
    }

    /// Whether state changed since the last save or load.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn emit(&mut self, event: WizardEvent) {
        match &mut self.pending {
            Some(queue) => queue.push(event),
            None => self.events.dispatch(&event),
        }
    }

    pub(crate) fn set_position(&mut self, section: SectionId, cause: usize) -> bool {
        let moved = (section, cause) != (self.current_section, self.current_cause);
        if moved {
            tracing::debug!(
                user_id = %self.user_id,
                from_section = %self.current_section,
                from_cause = self.current_cause,
                to_section = %section,
                to_cause = cause,
                "wizard position changed"
            );
            self.current_section = section;
            self.current_cause = cause;
            self.dirty = true;
        }
        moved
    }
}

impl std::fmt::Debug for FormStepper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormStepper")
            .field("user_id", &self.user_id)
            .field("current_section", &self.current_section)
            .field("current_cause", &self.current_cause)
            .field("validations", &self.validations.len())
            .field("dirty", &self.dirty)
            .finish()
    }
}
