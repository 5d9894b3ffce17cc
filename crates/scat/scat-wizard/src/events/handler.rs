use super::types::*;

/// Observer of wizard lifecycle events. Every method defaults to a no-op,
/// so implementors override only what they care about.
///
/// A standalone [`FormStepper`](crate::FormStepper) calls handlers
/// synchronously inside the mutating call. Steppers owned by a
/// [`StepperRegistry`](crate::StepperRegistry) queue their events and the
/// registry dispatches them after releasing the user's entry, so handlers may
/// call back into the registry.
pub trait WizardEventHandler: Send + Sync {
    fn on_cause_completed(&self, _event: &CauseCompletedEvent) {}
    fn on_section_completed(&self, _event: &SectionCompletedEvent) {}
    fn on_section_unlocked(&self, _event: &SectionUnlockedEvent) {}
    fn on_form_completed(&self, _event: &FormCompletedEvent) {}
    fn on_progress_saved(&self, _event: &ProgressSavedEvent) {}
    fn on_progress_restored(&self, _event: &ProgressRestoredEvent) {}
    fn on_form_reset(&self, _event: &FormResetEvent) {}
}
