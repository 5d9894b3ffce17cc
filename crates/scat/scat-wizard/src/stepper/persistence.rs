//! Snapshot and restore through the configured progress store.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use scat_core::errors::ScatResult;
use scat_core::{CauseValidation, DecodedSnapshot, ProgressSnapshot, SectionId};
use tracing::{debug, info, info_span, warn};

use super::FormStepper;
use crate::events::{FormResetEvent, ProgressRestoredEvent, ProgressSavedEvent, WizardEvent};

/// What [`FormStepper::load_progress`] found under the storage key.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// A snapshot was applied.
    Restored { saved_at: DateTime<Utc> },
    /// Nothing stored; state untouched.
    NotFound,
    /// A payload existed but could not be used; state untouched.
    Discarded { reason: String },
}

/// A decoded snapshot checked against the catalog, ready to apply.
struct RestoredState {
    section: SectionId,
    cause: usize,
    validations: BTreeMap<String, CauseValidation>,
    saved_at: DateTime<Utc>,
}

impl FormStepper {
    /// Overwrite the stored snapshot with the full current state.
    /// Returns the timestamp written into the snapshot.
    pub fn save_progress(&mut self) -> ScatResult<DateTime<Utc>> {
        let key = self.storage_key();
        let _span = info_span!("scat.save", user_id = %self.user_id, key = %key).entered();

        let now = Utc::now();
        let snapshot = ProgressSnapshot::new(
            Some(self.user_id.clone()),
            self.current_section,
            self.current_cause,
            self.validations.clone(),
            now,
        );
        let payload = snapshot.to_json()?;
        self.store.put(&key, &payload)?;

        self.last_saved = Some(now);
        self.dirty = false;
        info!(
            section = %self.current_section,
            cause = self.current_cause,
            validations = self.validations.len(),
            "progress saved"
        );
        self.emit(WizardEvent::ProgressSaved(ProgressSavedEvent {
            user_id: self.user_id.clone(),
            storage_key: key,
            timestamp: now,
        }));
        Ok(now)
    }

    /// Restore the stored snapshot, if any.
    ///
    /// Malformed or newer-version payloads are logged and discarded, leaving
    /// state as it was. Unusable individual fields fall back to their defaults
    /// (see [`ProgressSnapshot::decode`]). Validations for cause ids missing
    /// from the catalog are dropped and an out-of-range cause index falls back
    /// to 0.
    ///
    /// With per-user keys and `import_legacy_key` on, a user with nothing
    /// stored adopts a snapshot found under the bare prefix key, provided it
    /// names no other owner. The adopted snapshot is rewritten under the
    /// user's key and the bare key is removed. Store failures propagate.
    pub fn load_progress(&mut self) -> ScatResult<LoadOutcome> {
        let key = self.storage_key();
        let _span = info_span!("scat.load", user_id = %self.user_id, key = %key).entered();

        if let Some(payload) = self.store.get(&key)? {
            let decoded = match ProgressSnapshot::decode(&payload) {
                Ok(decoded) => decoded,
                Err(e) => {
                    warn!(error = %e, "discarding stored progress");
                    return Ok(LoadOutcome::Discarded {
                        reason: e.to_string(),
                    });
                }
            };
            if let Some(owner) = decoded.snapshot.user_id.as_deref() {
                if owner != self.user_id {
                    warn!(owner, "restoring progress saved by another user");
                }
            }
            let state = self.sanitize(decoded);
            return Ok(self.apply(state));
        }

        match self.config.persistence.legacy_key().map(str::to_string) {
            Some(legacy_key) => self.import_legacy(&key, &legacy_key),
            None => Ok(LoadOutcome::NotFound),
        }
    }

    /// Back to `(ci, 0)` with no validations, and delete the stored snapshot.
    /// If the delete fails the in-memory state is left as it was.
    pub fn reset_form(&mut self) -> ScatResult<()> {
        let key = self.storage_key();
        let _span = info_span!("scat.reset", user_id = %self.user_id, key = %key).entered();

        self.store.remove(&key)?;

        self.current_section = SectionId::Ci;
        self.current_cause = 0;
        self.validations.clear();
        self.last_saved = None;
        self.dirty = false;

        info!("form reset");
        self.emit(WizardEvent::FormReset(FormResetEvent {
            user_id: self.user_id.clone(),
        }));
        Ok(())
    }

    fn import_legacy(&mut self, key: &str, legacy_key: &str) -> ScatResult<LoadOutcome> {
        let Some(payload) = self.store.get(legacy_key)? else {
            return Ok(LoadOutcome::NotFound);
        };
        let decoded = match ProgressSnapshot::decode(&payload) {
            Ok(decoded) => decoded,
            Err(e) => {
                warn!(error = %e, legacy_key, "ignoring unreadable legacy snapshot");
                return Ok(LoadOutcome::NotFound);
            }
        };
        if let Some(owner) = decoded.snapshot.user_id.as_deref() {
            if owner != self.user_id {
                debug!(owner, legacy_key, "legacy snapshot belongs to another user");
                return Ok(LoadOutcome::NotFound);
            }
        }

        let state = self.sanitize(decoded);
        let migrated = ProgressSnapshot::new(
            Some(self.user_id.clone()),
            state.section,
            state.cause,
            state.validations.clone(),
            state.saved_at,
        );
        self.store.put(key, &migrated.to_json()?)?;
        self.store.remove(legacy_key)?;
        info!(legacy_key, "legacy snapshot migrated");

        Ok(self.apply(state))
    }

    /// Log what decoding repaired and drop what the catalog does not know.
    fn sanitize(&self, decoded: DecodedSnapshot) -> RestoredState {
        let DecodedSnapshot {
            snapshot,
            repaired_fields,
            rejected_validations,
        } = decoded;

        for field in repaired_fields {
            warn!(field, "stored field unusable, using default");
        }
        for cause_id in rejected_validations {
            warn!(cause_id = %cause_id, "dropping undecodable validation");
        }

        let mut validations = snapshot.validations;
        validations.retain(|cause_id, _| {
            let known = self.catalog.contains_cause(cause_id);
            if !known {
                warn!(cause_id = %cause_id, "dropping validation for unknown cause");
            }
            known
        });

        let section = snapshot.current_section;
        let total = self.catalog.section(section).total_causes();
        let cause = if snapshot.current_cause < total {
            snapshot.current_cause
        } else {
            warn!(
                %section,
                cause = snapshot.current_cause,
                total,
                "stored cause index out of range, resetting to 0"
            );
            0
        };

        RestoredState {
            section,
            cause,
            validations,
            saved_at: snapshot.timestamp,
        }
    }

    fn apply(&mut self, state: RestoredState) -> LoadOutcome {
        let RestoredState {
            section,
            cause,
            validations,
            saved_at,
        } = state;

        self.current_section = section;
        self.current_cause = cause;
        self.validations = validations;
        self.last_saved = Some(saved_at);
        self.dirty = false;

        info!(
            %section,
            cause,
            validations = self.validations.len(),
            "progress restored"
        );
        self.emit(WizardEvent::ProgressRestored(ProgressRestoredEvent {
            user_id: self.user_id.clone(),
            section,
            cause,
            validations: self.validations.len(),
            saved_at,
        }));
        LoadOutcome::Restored { saved_at }
    }
}
