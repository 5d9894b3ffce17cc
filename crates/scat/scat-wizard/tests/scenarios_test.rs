mod common;

use common::{cause_ids, stepper};
use scat_core::{NacDimension, SectionId, StepStatus, ValidationPatch};

#[test]
fn completing_all_of_ci_unlocks_cb() {
    let mut s = stepper();
    assert_eq!(s.step_status(SectionId::Cb), StepStatus::Locked);

    let ids = cause_ids(SectionId::Ci);
    assert_eq!(ids.len(), 7);
    for (n, id) in ids.iter().enumerate() {
        s.update_validation(id, ValidationPatch::new().selected(true))
            .unwrap();
        if n < 6 {
            assert_eq!(s.step_status(SectionId::Cb), StepStatus::Locked);
        }
    }

    assert_eq!(s.section_progress(SectionId::Ci).percentage, 100);
    assert_ne!(s.step_status(SectionId::Cb), StepStatus::Locked);
    assert_eq!(s.step_status(SectionId::Nac), StepStatus::Locked);
}

#[test]
fn nac_cause_completes_only_after_last_evaluation() {
    let mut s = stepper();
    s.update_validation(
        "nac-1",
        ValidationPatch::new()
            .selected(true)
            .nac(NacDimension::P, true)
            .nac(NacDimension::E, true),
    )
    .unwrap();
    assert!(!s.is_cause_complete("nac-1"));
    assert_eq!(s.section_progress(SectionId::Nac).completed, 0);

    s.update_validation("nac-1", ValidationPatch::new().nac(NacDimension::C, true))
        .unwrap();
    assert!(s.is_cause_complete("nac-1"));
    assert_eq!(s.section_progress(SectionId::Nac).completed, 1);
    assert_eq!(s.section_progress(SectionId::Nac).percentage, 5);
}

#[test]
fn full_walkthrough_reaches_completion() {
    let mut s = stepper();
    for section in SectionId::ALL {
        s.go_to_section(section);
        assert_eq!(s.current_section(), section);
        for index in 0..s.current_section_data().total_causes() {
            assert!(s.go_to_cause(index) || index == 0);
            let id = s.current_cause_data().id.clone();
            s.mark_cause_complete(&id).unwrap();
            if section == SectionId::Nac {
                for dim in NacDimension::ALL {
                    s.update_nac_validation(&id, dim, index % 2 == 0).unwrap();
                }
            }
            assert!(s.is_current_cause_complete());
        }
    }
    assert!(s.is_form_complete());
    assert_eq!(s.total_progress(), 100);
    assert_eq!(s.incomplete_validations().count(), 0);
    assert!(s
        .steps()
        .iter()
        .all(|step| step.progress == 100 && step.status != StepStatus::Locked));
}
