//! The static SCAT cause catalog.
//!
//! Sections and causes are configuration, not per-form state: they are loaded
//! once from the embedded `data/scat_catalog.json` and shared read-only.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{CatalogError, ScatResult};
use crate::models::SectionId;

const BUILTIN_CATALOG_JSON: &str = include_str!("../data/scat_catalog.json");

static BUILTIN: LazyLock<Result<Arc<Catalog>, String>> = LazyLock::new(|| {
    Catalog::from_json(BUILTIN_CATALOG_JSON)
        .map(Arc::new)
        .map_err(|e| e.to_string())
});

/// Informational breakdown of a cause. Not tracked for completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Subcause {
    pub id: String,
    pub number: String,
    pub text: String,
}

/// One checklist item within a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cause {
    pub id: String,
    pub number: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub subcauses: Vec<Subcause>,
    /// Cross-reference text, e.g. "Ver NAC 6,9,12".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nac_references: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Section {
    pub id: SectionId,
    /// Short label used in messages, e.g. "CI".
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub causes: Vec<Cause>,
}

impl Section {
    pub fn total_causes(&self) -> usize {
        self.causes.len()
    }

    pub fn last_cause_index(&self) -> usize {
        self.causes.len().saturating_sub(1)
    }
}

/// A resolved cause lookup.
#[derive(Debug, Clone, Copy)]
pub struct CauseRef<'a> {
    pub section: SectionId,
    pub index: usize,
    pub cause: &'a Cause,
}

/// The validated three-section catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    sections: Vec<Section>,
    index: HashMap<String, (SectionId, usize)>,
}

impl Catalog {
    /// Shared catalog compiled into the binary.
    pub fn builtin() -> ScatResult<Arc<Catalog>> {
        match &*BUILTIN {
            Ok(catalog) => Ok(Arc::clone(catalog)),
            Err(reason) => Err(CatalogError::ParseFailed {
                reason: reason.clone(),
            }
            .into()),
        }
    }

    /// Parse and validate a catalog document (a JSON array of sections).
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let sections: Vec<Section> =
            serde_json::from_str(json).map_err(|e| CatalogError::ParseFailed {
                reason: e.to_string(),
            })?;
        Self::from_sections(sections)
    }

    /// Validate sections: exactly `ci, cb, nac` in order, none empty, cause ids unique.
    pub fn from_sections(sections: Vec<Section>) -> Result<Self, CatalogError> {
        let ids: Vec<SectionId> = sections.iter().map(|s| s.id).collect();
        if ids != SectionId::ALL {
            return Err(CatalogError::SectionLayout {
                found: ids
                    .iter()
                    .map(|id| id.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        }

        let mut index = HashMap::new();
        for section in &sections {
            if section.causes.is_empty() {
                return Err(CatalogError::EmptySection {
                    section: section.id.to_string(),
                });
            }
            for (i, cause) in section.causes.iter().enumerate() {
                if index.insert(cause.id.clone(), (section.id, i)).is_some() {
                    return Err(CatalogError::DuplicateCause {
                        id: cause.id.clone(),
                    });
                }
            }
        }

        Ok(Self { sections, index })
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, id: SectionId) -> &Section {
        // Layout is validated on construction, so position == SectionId::index.
        &self.sections[id.index()]
    }

    pub fn find_cause(&self, cause_id: &str) -> Option<CauseRef<'_>> {
        let &(section, index) = self.index.get(cause_id)?;
        Some(CauseRef {
            section,
            index,
            cause: &self.section(section).causes[index],
        })
    }

    pub fn contains_cause(&self, cause_id: &str) -> bool {
        self.index.contains_key(cause_id)
    }

    pub fn total_causes(&self) -> usize {
        self.sections.iter().map(Section::total_causes).sum()
    }
}
