//! Validation mutations. Every helper funnels into [`FormStepper::update_validation`]
//! so the merge, the limits, and the events apply uniformly.

use chrono::{DateTime, Utc};
use scat_core::errors::{ScatResult, ValidationError};
use scat_core::{NacDimension, SectionId, ValidationPatch};

use super::FormStepper;
use crate::events::{
    CauseCompletedEvent, FormCompletedEvent, SectionCompletedEvent, SectionUnlockedEvent,
    WizardEvent,
};
use crate::policy;

/// Completion flags captured around a mutation to detect transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Milestones {
    cause: bool,
    sections: [bool; 3],
    form: bool,
}

impl FormStepper {
    /// Merge `patch` onto the record for `cause_id`, creating a default record
    /// first if none exists. Selecting a previously unselected cause stamps
    /// `completed_at`.
    pub fn update_validation(&mut self, cause_id: &str, patch: ValidationPatch) -> ScatResult<()> {
        let section = self.resolve_mutable(cause_id)?;
        policy::check_patch(
            &self.config.validation,
            cause_id,
            self.validations.get(cause_id),
            &patch,
        )?;

        let before = self.milestones(cause_id);
        let now = Utc::now();
        patch.apply_to(
            self.validations.entry(cause_id.to_string()).or_default(),
            now,
        );
        self.dirty = true;
        self.emit_transitions(section, cause_id, before, now);
        Ok(())
    }

    pub fn mark_cause_complete(&mut self, cause_id: &str) -> ScatResult<()> {
        self.update_validation(cause_id, ValidationPatch::new().selected(true))
    }

    pub fn update_observation(
        &mut self,
        cause_id: &str,
        observation: impl Into<String>,
    ) -> ScatResult<()> {
        self.update_validation(cause_id, ValidationPatch::new().observation(observation))
    }

    pub fn add_attachment(&mut self, cause_id: &str, name: impl Into<String>) -> ScatResult<()> {
        let mut attachments = self
            .validations
            .get(cause_id)
            .map(|v| v.attachments.clone())
            .unwrap_or_default();
        attachments.push(name.into());
        self.update_validation(cause_id, ValidationPatch::new().attachments(attachments))
    }

    /// Remove the attachment at `index`. Returns `None` (and changes nothing)
    /// when the cause has no record or the index is out of range.
    pub fn remove_attachment(&mut self, cause_id: &str, index: usize) -> ScatResult<Option<String>> {
        self.resolve_mutable(cause_id)?;
        let Some(record) = self.validations.get_mut(cause_id) else {
            return Ok(None);
        };
        if index >= record.attachments.len() {
            return Ok(None);
        }
        let removed = record.attachments.remove(index);
        self.dirty = true;
        Ok(Some(removed))
    }

    pub fn update_nac_validation(
        &mut self,
        cause_id: &str,
        dimension: NacDimension,
        value: bool,
    ) -> ScatResult<()> {
        self.update_validation(cause_id, ValidationPatch::new().nac(dimension, value))
    }

    /// Catalog lookup plus the optional section-lock check.
    fn resolve_mutable(&self, cause_id: &str) -> ScatResult<SectionId> {
        let section = self
            .catalog
            .find_cause(cause_id)
            .map(|found| found.section)
            .ok_or_else(|| ValidationError::UnknownCause {
                cause_id: cause_id.to_string(),
            })?;
        if self.config.navigation.enforce_section_locks && self.is_section_locked(section) {
            return Err(ValidationError::SectionLocked {
                section: section.to_string(),
            }
            .into());
        }
        Ok(section)
    }

    fn milestones(&self, cause_id: &str) -> Milestones {
        let sections = SectionId::ALL.map(|s| self.section_progress(s).is_complete());
        Milestones {
            cause: self.is_cause_complete(cause_id),
            sections,
            form: sections.iter().all(|&done| done),
        }
    }

    fn emit_transitions(
        &mut self,
        section: SectionId,
        cause_id: &str,
        before: Milestones,
        now: DateTime<Utc>,
    ) {
        let after = self.milestones(cause_id);
        if before == after {
            return;
        }

        if !before.cause && after.cause {
            self.emit(WizardEvent::CauseCompleted(CauseCompletedEvent {
                user_id: self.user_id.clone(),
                section,
                cause_id: cause_id.to_string(),
            }));
        }

        for s in SectionId::ALL {
            if before.sections[s.index()] || !after.sections[s.index()] {
                continue;
            }
            tracing::info!(user_id = %self.user_id, section = %s, "section completed");
            self.emit(WizardEvent::SectionCompleted(SectionCompletedEvent {
                user_id: self.user_id.clone(),
                section: s,
            }));
            if let Some(next) = s.next() {
                tracing::info!(user_id = %self.user_id, section = %next, "section unlocked");
                self.emit(WizardEvent::SectionUnlocked(SectionUnlockedEvent {
                    user_id: self.user_id.clone(),
                    section: next,
                }));
            }
        }

        if !before.form && after.form {
            tracing::info!(user_id = %self.user_id, "form completed");
            self.emit(WizardEvent::FormCompleted(FormCompletedEvent {
                user_id: self.user_id.clone(),
                completed_at: now,
            }));
        }
    }
}
