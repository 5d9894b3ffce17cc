//! Derived progress, step status, and completeness queries. Nothing here is
//! stored; every value is recomputed from the validation map.

use scat_core::catalog::Section;
use scat_core::models::progress::percentage;
use scat_core::models::SectionProgressSet;
use scat_core::{FormProgress, FormStep, SectionId, SectionProgress, StepStatus};

use super::FormStepper;

impl FormStepper {
    pub fn section_progress(&self, section: SectionId) -> SectionProgress {
        let data = self.catalog.section(section);
        SectionProgress::new(self.completed_in(data), data.total_causes())
    }

    /// Overall percentage across every cause of every section.
    pub fn total_progress(&self) -> u8 {
        let completed: usize = self
            .catalog
            .sections()
            .iter()
            .map(|s| self.completed_in(s))
            .sum();
        percentage(completed, self.catalog.total_causes())
    }

    pub fn is_form_complete(&self) -> bool {
        SectionId::ALL
            .iter()
            .all(|&s| self.section_progress(s).is_complete())
    }

    /// `cb` is locked until `ci` is complete, `nac` until `cb` is.
    pub fn is_section_locked(&self, section: SectionId) -> bool {
        section
            .previous()
            .is_some_and(|prev| !self.section_progress(prev).is_complete())
    }

    /// Precedence: locked, then active, then completed, then pending.
    pub fn step_status(&self, section: SectionId) -> StepStatus {
        if self.is_section_locked(section) {
            StepStatus::Locked
        } else if section == self.current_section {
            StepStatus::Active
        } else if self.section_progress(section).is_complete() {
            StepStatus::Completed
        } else {
            StepStatus::Pending
        }
    }

    /// Progress-bar entries in section order.
    pub fn steps(&self) -> Vec<FormStep> {
        SectionId::ALL.iter().map(|&s| self.step(s)).collect()
    }

    pub fn current_step(&self) -> FormStep {
        self.step(self.current_section)
    }

    pub fn progress(&self) -> FormProgress {
        FormProgress {
            current_section: self.current_section,
            current_cause: self.current_cause,
            section_progress: SectionProgressSet {
                ci: self.section_progress(SectionId::Ci),
                cb: self.section_progress(SectionId::Cb),
                nac: self.section_progress(SectionId::Nac),
            },
            total_percentage: self.total_progress(),
            is_complete: self.is_form_complete(),
        }
    }

    /// Completeness of a catalog cause. Unknown ids are never complete.
    pub fn is_cause_complete(&self, cause_id: &str) -> bool {
        let Some(found) = self.catalog.find_cause(cause_id) else {
            return false;
        };
        self.validations
            .get(cause_id)
            .is_some_and(|v| v.is_complete(found.section))
    }

    pub fn is_current_cause_complete(&self) -> bool {
        self.is_cause_complete(&self.current_cause_data().id)
    }

    /// Labels for every incomplete cause, in catalog order.
    ///
    /// Unselected causes read `"{section} {number}: {title}"`; selected `nac`
    /// causes still missing an evaluation read
    /// `"{section} {number}: Validaciones P/E/C incompletas"`. Callers showing a
    /// banner take the first [`INCOMPLETE_BANNER_LIMIT`](scat_core::constants::INCOMPLETE_BANNER_LIMIT).
    pub fn incomplete_validations(&self) -> impl Iterator<Item = String> + '_ {
        self.catalog.sections().iter().flat_map(move |section| {
            section.causes.iter().filter_map(move |cause| {
                match self.validations.get(&cause.id) {
                    Some(v) if v.is_complete(section.id) => None,
                    Some(v) if v.selected => Some(format!(
                        "{} {}: Validaciones P/E/C incompletas",
                        section.name, cause.number
                    )),
                    _ => Some(format!("{} {}: {}", section.name, cause.number, cause.title)),
                }
            })
        })
    }

    fn step(&self, section: SectionId) -> FormStep {
        FormStep {
            section,
            title: self.catalog.section(section).title.clone(),
            status: self.step_status(section),
            progress: self.section_progress(section).percentage,
        }
    }

    fn completed_in(&self, section: &Section) -> usize {
        section
            .causes
            .iter()
            .filter(|c| {
                self.validations
                    .get(&c.id)
                    .is_some_and(|v| v.is_complete(section.id))
            })
            .count()
    }
}
