//! EventDispatcher: synchronous fan-out to registered handlers.

use std::sync::Arc;

use super::handler::WizardEventHandler;
use super::types::*;

/// Wraps a list of handlers. With none registered, every `emit_*` is a loop
/// over an empty Vec.
#[derive(Default, Clone)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn WizardEventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handler: Arc<dyn WizardEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// A panicking handler is logged and skipped; later handlers still run.
    fn emit<F: Fn(&dyn WizardEventHandler)>(&self, event: &'static str, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!(event, "wizard event handler panicked");
            }
        }
    }

    pub fn dispatch(&self, event: &WizardEvent) {
        match event {
            WizardEvent::CauseCompleted(e) => self.emit_cause_completed(e),
            WizardEvent::SectionCompleted(e) => self.emit_section_completed(e),
            WizardEvent::SectionUnlocked(e) => self.emit_section_unlocked(e),
            WizardEvent::FormCompleted(e) => self.emit_form_completed(e),
            WizardEvent::ProgressSaved(e) => self.emit_progress_saved(e),
            WizardEvent::ProgressRestored(e) => self.emit_progress_restored(e),
            WizardEvent::FormReset(e) => self.emit_form_reset(e),
        }
    }

    pub fn dispatch_all(&self, events: impl IntoIterator<Item = WizardEvent>) {
        for event in events {
            self.dispatch(&event);
        }
    }

    pub fn emit_cause_completed(&self, event: &CauseCompletedEvent) {
        self.emit("cause_completed", |h| h.on_cause_completed(event));
    }

    pub fn emit_section_completed(&self, event: &SectionCompletedEvent) {
        self.emit("section_completed", |h| h.on_section_completed(event));
    }

    pub fn emit_section_unlocked(&self, event: &SectionUnlockedEvent) {
        self.emit("section_unlocked", |h| h.on_section_unlocked(event));
    }

    pub fn emit_form_completed(&self, event: &FormCompletedEvent) {
        self.emit("form_completed", |h| h.on_form_completed(event));
    }

    pub fn emit_progress_saved(&self, event: &ProgressSavedEvent) {
        self.emit("progress_saved", |h| h.on_progress_saved(event));
    }

    pub fn emit_progress_restored(&self, event: &ProgressRestoredEvent) {
        self.emit("progress_restored", |h| h.on_progress_restored(event));
    }

    pub fn emit_form_reset(&self, event: &FormResetEvent) {
        self.emit("form_reset", |h| h.on_form_reset(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
