//! Persisted wizard progress and its versioned JSON codec.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use super::cause_validation::CauseValidation;
use super::section::SectionId;
use crate::constants::{LEGACY_SNAPSHOT_SCHEMA_VERSION, SNAPSHOT_SCHEMA_VERSION};
use crate::errors::SnapshotError;

/// The full `(position, validations, timestamp)` tuple written on every save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    pub schema_version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub current_section: SectionId,
    pub current_cause: usize,
    pub validations: BTreeMap<String, CauseValidation>,
    #[serde(deserialize_with = "crate::time::deserialize")]
    pub timestamp: DateTime<Utc>,
}

/// Result of a lenient decode: the snapshot plus what had to be repaired.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedSnapshot {
    pub snapshot: ProgressSnapshot,
    /// Top-level fields whose stored value was unusable and got the default.
    pub repaired_fields: Vec<&'static str>,
    /// Validation entries that did not decode and were dropped.
    pub rejected_validations: Vec<String>,
}

impl ProgressSnapshot {
    /// Build a snapshot at the current schema version.
    pub fn new(
        user_id: Option<String>,
        current_section: SectionId,
        current_cause: usize,
        validations: BTreeMap<String, CauseValidation>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            user_id,
            current_section,
            current_cause,
            validations,
            timestamp,
        }
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed {
            reason: e.to_string(),
        })
    }

    /// Decode a stored blob, upgrading legacy (unversioned) snapshots.
    /// See [`ProgressSnapshot::decode`] for the fallback rules.
    pub fn from_json(payload: &str) -> Result<Self, SnapshotError> {
        Self::decode(payload).map(|decoded| decoded.snapshot)
    }

    /// Decode a stored blob field by field.
    ///
    /// The payload must be a JSON object with a usable `schemaVersion` (absent
    /// means legacy version 1). Every other top-level field falls back on its
    /// own: an unknown, empty or mistyped section becomes `ci`, a negative or
    /// non-integer cause becomes 0, a non-object `validations` becomes empty,
    /// and an unreadable timestamp becomes `Utc::now()`. Individual validation
    /// entries that do not decode are dropped and listed in the result.
    pub fn decode(payload: &str) -> Result<DecodedSnapshot, SnapshotError> {
        let value: Value = serde_json::from_str(payload).map_err(|e| SnapshotError::Malformed {
            reason: e.to_string(),
        })?;
        let Value::Object(mut fields) = value else {
            return Err(SnapshotError::Malformed {
                reason: "snapshot is not a JSON object".to_string(),
            });
        };

        let version = match fields.remove("schemaVersion") {
            None | Some(Value::Null) => LEGACY_SNAPSHOT_SCHEMA_VERSION,
            Some(v) => v
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(|| SnapshotError::Malformed {
                    reason: format!("invalid schemaVersion: {v}"),
                })?,
        };
        if version > SNAPSHOT_SCHEMA_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: version,
                supported: SNAPSHOT_SCHEMA_VERSION,
            });
        }

        let mut repaired_fields = Vec::new();
        let mut field = |name: &'static str| match fields.remove(name) {
            None | Some(Value::Null) => None,
            Some(v) => Some((name, v)),
        };

        let user_id = field("userId").and_then(|(_, v)| v.as_str().map(str::to_string));

        let current_section = match field("currentSection") {
            None => SectionId::default(),
            Some((name, v)) => v.as_str().and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                repaired_fields.push(name);
                SectionId::default()
            }),
        };

        let current_cause = match field("currentCause") {
            None => 0,
            Some((name, v)) => cause_index(&v).unwrap_or_else(|| {
                repaired_fields.push(name);
                0
            }),
        };

        let mut validations = BTreeMap::new();
        let mut rejected_validations = Vec::new();
        match field("validations") {
            None => {}
            Some((_, Value::Object(entries))) => {
                for (cause_id, entry) in entries {
                    match serde_json::from_value::<CauseValidation>(entry) {
                        Ok(validation) => {
                            validations.insert(cause_id, validation);
                        }
                        Err(_) => rejected_validations.push(cause_id),
                    }
                }
            }
            Some((name, _)) => repaired_fields.push(name),
        }

        let timestamp = field("timestamp")
            .and_then(|(_, v)| crate::time::deserialize_option(v).ok().flatten())
            .unwrap_or_else(Utc::now);

        // v1 → v2 only added `schemaVersion` and `userId`; the fields carry over.
        Ok(DecodedSnapshot {
            snapshot: Self {
                schema_version: SNAPSHOT_SCHEMA_VERSION,
                user_id,
                current_section,
                current_cause,
                validations,
                timestamp,
            },
            repaired_fields,
            rejected_validations,
        })
    }
}

/// Non-negative integral JSON numbers, including `3.0`.
fn cause_index(value: &Value) -> Option<usize> {
    if let Some(n) = value.as_u64() {
        return usize::try_from(n).ok();
    }
    value
        .as_f64()
        .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u32::MAX as f64)
        .map(|f| f as usize)
}
