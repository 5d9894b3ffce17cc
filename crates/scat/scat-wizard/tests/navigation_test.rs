mod common;

use common::{complete_section, stepper};
use scat_core::{SectionId, StepStatus};

#[test]
fn starts_at_first_cause_of_ci() {
    let s = stepper();
    assert_eq!(s.current_section(), SectionId::Ci);
    assert_eq!(s.current_cause(), 0);
    assert_eq!(s.current_cause_data().id, "ci-1");
    assert!(!s.can_go_previous());
    assert!(s.can_go_next());
}

#[test]
fn go_previous_at_origin_is_ignored() {
    let mut s = stepper();
    assert!(!s.go_previous());
    assert_eq!((s.current_section(), s.current_cause()), (SectionId::Ci, 0));
}

#[test]
fn go_next_walks_causes_then_blocks_at_incomplete_section_end() {
    let mut s = stepper();
    for expected in 1..7 {
        assert!(s.go_next());
        assert_eq!(s.current_cause(), expected);
    }
    assert!(!s.can_go_next());
    assert!(!s.go_next());
    assert_eq!((s.current_section(), s.current_cause()), (SectionId::Ci, 6));
}

#[test]
fn go_next_crosses_into_next_section_once_complete() {
    let mut s = stepper();
    complete_section(&mut s, SectionId::Ci);
    assert!(s.go_to_cause(6));
    assert!(s.can_go_next());
    assert!(s.go_next());
    assert_eq!((s.current_section(), s.current_cause()), (SectionId::Cb, 0));
}

#[test]
fn go_previous_from_cause_zero_lands_on_previous_section_last_cause() {
    let mut s = stepper();
    complete_section(&mut s, SectionId::Ci);
    complete_section(&mut s, SectionId::Cb);
    assert!(s.go_to_section(SectionId::Nac));
    assert!(s.go_previous());
    assert_eq!((s.current_section(), s.current_cause()), (SectionId::Cb, 14));
    assert!(s.go_to_cause(0));
    assert!(s.go_previous());
    assert_eq!((s.current_section(), s.current_cause()), (SectionId::Ci, 6));
}

#[test]
fn last_cause_of_nac_is_terminal_even_when_complete() {
    let mut s = stepper();
    complete_section(&mut s, SectionId::Ci);
    complete_section(&mut s, SectionId::Cb);
    complete_section(&mut s, SectionId::Nac);
    assert!(s.go_to_section(SectionId::Nac));
    assert!(s.go_to_cause(19));
    assert!(s.is_form_complete());
    assert!(!s.can_go_next());
    assert!(!s.go_next());
}

#[test]
fn go_to_section_refuses_locked_sections() {
    let mut s = stepper();
    assert_eq!(s.step_status(SectionId::Cb), StepStatus::Locked);
    assert!(!s.go_to_section(SectionId::Cb));
    assert!(!s.go_to_section(SectionId::Nac));
    assert_eq!(s.current_section(), SectionId::Ci);

    complete_section(&mut s, SectionId::Ci);
    assert!(s.go_to_section(SectionId::Cb));
    assert_eq!((s.current_section(), s.current_cause()), (SectionId::Cb, 0));
    assert!(!s.go_to_section(SectionId::Nac));
}

#[test]
fn go_to_cause_ignores_out_of_range() {
    let mut s = stepper();
    assert!(s.go_to_cause(3));
    assert!(!s.go_to_cause(7));
    assert!(!s.go_to_cause(usize::MAX));
    assert_eq!(s.current_cause(), 3);
    assert!(!s.go_to_cause(3), "same position does not count as a move");
}

#[test]
fn steps_follow_status_precedence() {
    let mut s = stepper();
    let statuses: Vec<_> = s.steps().iter().map(|st| st.status).collect();
    assert_eq!(
        statuses,
        vec![StepStatus::Active, StepStatus::Locked, StepStatus::Locked]
    );

    complete_section(&mut s, SectionId::Ci);
    s.go_to_section(SectionId::Cb);
    let statuses: Vec<_> = s.steps().iter().map(|st| st.status).collect();
    assert_eq!(
        statuses,
        vec![StepStatus::Completed, StepStatus::Active, StepStatus::Locked]
    );
    assert_eq!(s.current_step().section, SectionId::Cb);
    assert_eq!(s.current_step().title, "Causas Básicas / Subyacentes");

    // Un-completing ci re-locks the active cb step.
    s.update_validation("ci-1", scat_core::ValidationPatch::new().selected(false))
        .unwrap();
    assert_eq!(s.step_status(SectionId::Cb), StepStatus::Locked);
    assert_eq!(s.step_status(SectionId::Ci), StepStatus::Pending);
}
