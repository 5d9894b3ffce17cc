use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::section::SectionId;

/// Completion counts for one section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SectionProgress {
    pub completed: usize,
    pub total: usize,
    /// `round(100 * completed / total)`, half rounds up.
    pub percentage: u8,
}

impl SectionProgress {
    pub fn new(completed: usize, total: usize) -> Self {
        let completed = completed.min(total);
        Self {
            completed,
            total,
            percentage: percentage(completed, total),
        }
    }

    /// Every cause in the section is complete.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// Integer percentage of `part` over `whole`, rounded half up. Zero when `whole` is zero.
pub fn percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let part = part.min(whole);
    ((part * 200 + whole) / (whole * 2)) as u8
}

/// Display state of a section in the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Pending,
    Active,
    Completed,
    Locked,
}

/// One entry of the progress bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FormStep {
    pub section: SectionId,
    pub title: String,
    pub status: StepStatus,
    pub progress: u8,
}

/// Per-section progress keyed the way the front end reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SectionProgressSet {
    pub ci: SectionProgress,
    pub cb: SectionProgress,
    pub nac: SectionProgress,
}

impl SectionProgressSet {
    pub fn get(&self, section: SectionId) -> SectionProgress {
        match section {
            SectionId::Ci => self.ci,
            SectionId::Cb => self.cb,
            SectionId::Nac => self.nac,
        }
    }
}

/// Aggregate view of the whole form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FormProgress {
    pub current_section: SectionId,
    pub current_cause: usize,
    pub section_progress: SectionProgressSet,
    pub total_percentage: u8,
    pub is_complete: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(percentage(1, 7), 14);
        assert_eq!(percentage(1, 8), 13); // 12.5
        assert_eq!(percentage(1, 40), 3); // 2.5
        assert_eq!(percentage(7, 15), 47);
        assert_eq!(percentage(20, 20), 100);
        assert_eq!(percentage(0, 20), 0);
    }

    #[test]
    fn percentage_of_empty_whole_is_zero() {
        assert_eq!(percentage(0, 0), 0);
        assert!(!SectionProgress::new(0, 0).is_complete());
    }

    #[test]
    fn completed_is_clamped_to_total() {
        let p = SectionProgress::new(9, 7);
        assert_eq!(p.completed, 7);
        assert_eq!(p.percentage, 100);
        assert!(p.is_complete());
    }
}
