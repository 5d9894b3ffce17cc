use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::section::SectionId;

/// One of the three NAC evaluations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum NacDimension {
    /// Potential.
    P,
    /// Exposure.
    E,
    /// Control.
    C,
}

impl NacDimension {
    pub const ALL: [NacDimension; 3] = [NacDimension::P, NacDimension::E, NacDimension::C];
}

/// Mutable per-cause state. Created lazily on the first mutation of a cause.
///
/// Field names on the wire match what the browser front end persists
/// (`P`, `E`, `C`, `completedAt`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CauseValidation {
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub observation: String,
    #[serde(default)]
    pub attachments: Vec<String>,
    #[serde(rename = "P", default)]
    pub p: Option<bool>,
    #[serde(rename = "E", default)]
    pub e: Option<bool>,
    #[serde(rename = "C", default)]
    pub c: Option<bool>,
    /// Set when the cause first becomes selected. Never cleared.
    #[serde(
        default,
        deserialize_with = "crate::time::deserialize_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub completed_at: Option<DateTime<Utc>>,
}

impl CauseValidation {
    pub fn nac(&self, dimension: NacDimension) -> Option<bool> {
        match dimension {
            NacDimension::P => self.p,
            NacDimension::E => self.e,
            NacDimension::C => self.c,
        }
    }

    /// True when all three NAC evaluations have an answer.
    pub fn nac_evaluated(&self) -> bool {
        self.p.is_some() && self.e.is_some() && self.c.is_some()
    }

    /// A cause is complete iff it is selected and, inside `nac`, all of P/E/C are set.
    pub fn is_complete(&self, section: SectionId) -> bool {
        self.selected && (!section.requires_nac_evaluation() || self.nac_evaluated())
    }
}

/// Partial update of a [`CauseValidation`]. `None` fields keep their prior value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ValidationPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<String>>,
    #[serde(rename = "P", default, skip_serializing_if = "Option::is_none")]
    pub p: Option<bool>,
    #[serde(rename = "E", default, skip_serializing_if = "Option::is_none")]
    pub e: Option<bool>,
    #[serde(rename = "C", default, skip_serializing_if = "Option::is_none")]
    pub c: Option<bool>,
}

impl ValidationPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = Some(selected);
        self
    }

    pub fn observation(mut self, observation: impl Into<String>) -> Self {
        self.observation = Some(observation.into());
        self
    }

    pub fn attachments(mut self, attachments: Vec<String>) -> Self {
        self.attachments = Some(attachments);
        self
    }

    pub fn nac(mut self, dimension: NacDimension, value: bool) -> Self {
        match dimension {
            NacDimension::P => self.p = Some(value),
            NacDimension::E => self.e = Some(value),
            NacDimension::C => self.c = Some(value),
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge onto `record`. Stamps `completed_at` with `now` when the patch
    /// moves `selected` from false to true.
    pub fn apply_to(self, record: &mut CauseValidation, now: DateTime<Utc>) {
        if let Some(selected) = self.selected {
            if selected && !record.selected {
                record.completed_at = Some(now);
            }
            record.selected = selected;
        }
        if let Some(observation) = self.observation {
            record.observation = observation;
        }
        if let Some(attachments) = self.attachments {
            record.attachments = attachments;
        }
        if self.p.is_some() {
            record.p = self.p;
        }
        if self.e.is_some() {
            record.e = self.e;
        }
        if self.c.is_some() {
            record.c = self.c;
        }
    }
}
