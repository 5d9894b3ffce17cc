mod common;

use common::stepper;
use scat_core::config::ScatConfig;
use scat_core::errors::{ScatError, ValidationError};
use scat_core::{NacDimension, SectionId, ValidationPatch};

#[test]
fn first_mutation_creates_default_record() {
    let mut s = stepper();
    assert!(s.validation("ci-2").is_none());
    s.update_observation("ci-2", "piso mojado").unwrap();

    let v = s.validation("ci-2").unwrap();
    assert!(!v.selected);
    assert_eq!(v.observation, "piso mojado");
    assert!(v.attachments.is_empty());
    assert_eq!((v.p, v.e, v.c), (None, None, None));
    assert!(v.completed_at.is_none());
    assert!(s.is_dirty());
}

#[test]
fn successive_patches_keep_earlier_fields() {
    let mut s = stepper();
    s.update_validation("cb-3", ValidationPatch::new().observation("x"))
        .unwrap();
    s.update_validation("cb-3", ValidationPatch::new().selected(true))
        .unwrap();
    let v = s.validation("cb-3").unwrap();
    assert_eq!(v.observation, "x");
    assert!(v.selected);
}

#[test]
fn completed_at_is_stamped_once_and_never_cleared() {
    let mut s = stepper();
    s.mark_cause_complete("ci-1").unwrap();
    let first = s.validation("ci-1").unwrap().completed_at.unwrap();

    s.update_validation("ci-1", ValidationPatch::new().selected(false))
        .unwrap();
    assert_eq!(s.validation("ci-1").unwrap().completed_at, Some(first));

    s.update_observation("ci-1", "otra").unwrap();
    assert_eq!(s.validation("ci-1").unwrap().completed_at, Some(first));
}

#[test]
fn nac_cause_needs_all_three_evaluations() {
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

    s.update_nac_validation("nac-1", NacDimension::C, true).unwrap();
    assert!(s.is_cause_complete("nac-1"));
}

#[test]
fn false_evaluations_still_count_as_answered() {
    let mut s = stepper();
    s.mark_cause_complete("nac-4").unwrap();
    for dim in NacDimension::ALL {
        s.update_nac_validation("nac-4", dim, false).unwrap();
    }
    assert!(s.is_cause_complete("nac-4"));
}

#[test]
fn attachments_are_appended_and_removed_by_index() {
    let mut s = stepper();
    s.add_attachment("ci-3", "foto.jpg").unwrap();
    s.add_attachment("ci-3", "informe.pdf").unwrap();
    s.add_attachment("ci-3", "plano.png").unwrap();

    assert_eq!(
        s.remove_attachment("ci-3", 1).unwrap().as_deref(),
        Some("informe.pdf")
    );
    assert_eq!(
        s.validation("ci-3").unwrap().attachments,
        vec!["foto.jpg".to_string(), "plano.png".to_string()]
    );
}

#[test]
fn remove_attachment_out_of_range_is_a_no_op() {
    let mut s = stepper();
    assert_eq!(s.remove_attachment("ci-3", 0).unwrap(), None);
    assert!(s.validation("ci-3").is_none(), "no record is created");

    s.add_attachment("ci-3", "foto.jpg").unwrap();
    assert_eq!(s.remove_attachment("ci-3", 5).unwrap(), None);
    assert_eq!(s.validation("ci-3").unwrap().attachments.len(), 1);
}

#[test]
fn unknown_cause_is_rejected() {
    let mut s = stepper();
    let err = s.mark_cause_complete("ci-99").unwrap_err();
    assert!(matches!(
        err,
        ScatError::Validation(ValidationError::UnknownCause { ref cause_id }) if cause_id == "ci-99"
    ));
    assert!(s.validations().is_empty());
    assert!(s.remove_attachment("nope", 0).is_err());
}

#[test]
fn observation_limit_is_enforced() {
    let mut s = stepper();
    s.update_observation("ci-1", "a".repeat(2000)).unwrap();
    let err = s.update_observation("ci-1", "a".repeat(2001)).unwrap_err();
    assert!(matches!(
        err,
        ScatError::Validation(ValidationError::ObservationTooLong {
            length: 2001,
            max: 2000,
            ..
        })
    ));
    assert_eq!(s.validation("ci-1").unwrap().observation.len(), 2000);
}

#[test]
fn attachment_count_and_type_are_enforced() {
    let mut s = stepper();
    for i in 0..10 {
        s.add_attachment("cb-1", format!("evidencia-{i}.png")).unwrap();
    }
    let err = s.add_attachment("cb-1", "extra.png").unwrap_err();
    assert!(matches!(
        err,
        ScatError::Validation(ValidationError::TooManyAttachments { max: 10, .. })
    ));

    let err = s.add_attachment("cb-2", "macro.exe").unwrap_err();
    assert!(matches!(
        err,
        ScatError::Validation(ValidationError::AttachmentTypeNotAllowed { .. })
    ));
    let err = s.add_attachment("cb-2", "   ").unwrap_err();
    assert!(matches!(
        err,
        ScatError::Validation(ValidationError::EmptyAttachmentName)
    ));
    assert!(s.validation("cb-2").is_none());
}

#[test]
fn limits_can_be_disabled() {
    let mut config = ScatConfig::default();
    config.validation.enforce_limits = false;
    let mut s = stepper().with_config(config);
    s.update_observation("ci-1", "a".repeat(5000)).unwrap();
    s.add_attachment("ci-1", "macro.exe").unwrap();
    assert_eq!(s.validation("ci-1").unwrap().attachments.len(), 1);
}

#[test]
fn section_locks_are_advisory_by_default() {
    let mut s = stepper();
    s.mark_cause_complete("nac-2").unwrap();
    assert!(s.validation("nac-2").unwrap().selected);
}

#[test]
fn section_locks_can_be_enforced() {
    let mut config = ScatConfig::default();
    config.navigation.enforce_section_locks = true;
    let mut s = stepper().with_config(config);

    let err = s.mark_cause_complete("cb-1").unwrap_err();
    assert!(matches!(
        err,
        ScatError::Validation(ValidationError::SectionLocked { ref section }) if section == "cb"
    ));

    for id in common::cause_ids(SectionId::Ci) {
        s.mark_cause_complete(&id).unwrap();
    }
    s.mark_cause_complete("cb-1").unwrap();
    assert!(s.update_observation("nac-1", "todavía no").is_err());
}

#[test]
fn incomplete_validations_lists_in_catalog_order() {
    let mut s = stepper();
    let all: Vec<String> = s.incomplete_validations().collect();
    assert_eq!(all.len(), 42);
    assert_eq!(all[0], "CI 1: Actos Inseguros");
    assert!(all[7].starts_with("CB 1: "));
    assert!(all[22].starts_with("NAC 1: "));

    s.mark_cause_complete("ci-1").unwrap();
    s.mark_cause_complete("nac-1").unwrap();
    s.update_nac_validation("nac-1", NacDimension::P, true).unwrap();

    let banner: Vec<String> = s
        .incomplete_validations()
        .take(scat_core::constants::INCOMPLETE_BANNER_LIMIT)
        .collect();
    assert_eq!(banner.len(), 5);
    assert!(banner[0].starts_with("CI 2: "));

    let nac_label = s
        .incomplete_validations()
        .find(|l| l.starts_with("NAC 1:"))
        .unwrap();
    assert_eq!(nac_label, "NAC 1: Validaciones P/E/C incompletas");
    assert_eq!(s.incomplete_validations().count(), 41);
}

#[test]
fn progress_counts_only_complete_causes() {
    let mut s = stepper();
    s.mark_cause_complete("ci-1").unwrap();
    s.mark_cause_complete("nac-1").unwrap();

    let ci = s.section_progress(SectionId::Ci);
    assert_eq!((ci.completed, ci.total, ci.percentage), (1, 7, 14));
    let nac = s.section_progress(SectionId::Nac);
    assert_eq!((nac.completed, nac.total, nac.percentage), (0, 20, 0));
    assert_eq!(s.total_progress(), 2); // 1 / 42

    let p = s.progress();
    assert_eq!(p.section_progress.ci, ci);
    assert_eq!(p.total_percentage, 2);
    assert!(!p.is_complete);
    assert!(s.is_current_cause_complete());
    s.go_to_cause(1);
    assert!(!s.is_current_cause_complete());
}
