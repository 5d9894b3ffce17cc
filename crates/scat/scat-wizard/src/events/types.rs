//! Event payload types.

use chrono::{DateTime, Utc};
use scat_core::SectionId;

/// Payload for `on_cause_completed`.
#[derive(Debug, Clone, PartialEq)]
pub struct CauseCompletedEvent {
    pub user_id: String,
    pub section: SectionId,
    pub cause_id: String,
}

/// Payload for `on_section_completed`.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionCompletedEvent {
    pub user_id: String,
    pub section: SectionId,
}

/// Payload for `on_section_unlocked`.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionUnlockedEvent {
    pub user_id: String,
    pub section: SectionId,
}

/// Payload for `on_form_completed`.
#[derive(Debug, Clone, PartialEq)]
pub struct FormCompletedEvent {
    pub user_id: String,
    pub completed_at: DateTime<Utc>,
}

/// Payload for `on_progress_saved`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSavedEvent {
    pub user_id: String,
    pub storage_key: String,
    pub timestamp: DateTime<Utc>,
}

/// Payload for `on_progress_restored`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressRestoredEvent {
    pub user_id: String,
    pub section: SectionId,
    pub cause: usize,
    pub validations: usize,
    pub saved_at: DateTime<Utc>,
}

/// Payload for `on_form_reset`.
#[derive(Debug, Clone, PartialEq)]
pub struct FormResetEvent {
    pub user_id: String,
}

/// Any wizard event, for queues that dispatch later.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent {
    CauseCompleted(CauseCompletedEvent),
    SectionCompleted(SectionCompletedEvent),
    SectionUnlocked(SectionUnlockedEvent),
    FormCompleted(FormCompletedEvent),
    ProgressSaved(ProgressSavedEvent),
    ProgressRestored(ProgressRestoredEvent),
    FormReset(FormResetEvent),
}
