use scat_core::errors::*;

#[test]
fn validation_error_carries_cause_and_limits() {
    let err = ValidationError::ObservationTooLong {
        cause_id: "ci-3".into(),
        length: 2500,
        max: 2000,
    };
    let msg = err.to_string();
    assert!(msg.contains("ci-3"));
    assert!(msg.contains("2500"));
    assert!(msg.contains("2000"));
}

#[test]
fn unsupported_version_carries_both_versions() {
    let err = SnapshotError::UnsupportedVersion {
        found: 7,
        supported: 2,
    };
    let msg = err.to_string();
    assert!(msg.contains('7'));
    assert!(msg.contains('2'));
}

// --- From impls ---

#[test]
fn storage_error_converts_to_scat_error() {
    let err: ScatError = StorageError::SqliteError {
        message: "disk full".into(),
    }
    .into();
    assert!(matches!(err, ScatError::Storage(_)));
    assert!(err.to_string().contains("disk full"));
}

#[test]
fn validation_error_converts_to_scat_error() {
    let err: ScatError = ValidationError::UnknownCause {
        cause_id: "zz-1".into(),
    }
    .into();
    assert!(matches!(err, ScatError::Validation(_)));
}

// --- codes ---

#[test]
fn error_codes_pass_through_the_aggregate() {
    let err: ScatError = ValidationError::SectionLocked {
        section: "nac".into(),
    }
    .into();
    assert_eq!(err.error_code(), error_code::SECTION_LOCKED);

    let err: ScatError = ValidationError::EmptyAttachmentName.into();
    assert_eq!(err.error_code(), error_code::ATTACHMENT_REJECTED);

    let err: ScatError = SnapshotError::Malformed {
        reason: "eof".into(),
    }
    .into();
    assert_eq!(err.error_code(), error_code::SNAPSHOT_ERROR);

    let err: ScatError = StorageError::LockPoisoned.into();
    assert_eq!(err.error_code(), error_code::STORAGE_ERROR);
}
