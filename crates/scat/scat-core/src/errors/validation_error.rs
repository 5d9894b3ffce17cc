use super::error_code::{self, ScatErrorCode};

/// Rejected cause-validation mutations.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("unknown cause: {cause_id}")]
    UnknownCause { cause_id: String },

    #[error("observation for {cause_id} is {length} characters, limit is {max}")]
    ObservationTooLong {
        cause_id: String,
        length: usize,
        max: usize,
    },

    #[error("cause {cause_id} already has {max} attachments")]
    TooManyAttachments { cause_id: String, max: usize },

    #[error("attachment name must not be empty")]
    EmptyAttachmentName,

    #[error("attachment type not allowed: {name}")]
    AttachmentTypeNotAllowed { name: String },

    #[error("section {section} is locked")]
    SectionLocked { section: String },
}

impl ScatErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCause { .. } => error_code::UNKNOWN_CAUSE,
            Self::ObservationTooLong { .. } => error_code::OBSERVATION_TOO_LONG,
            Self::TooManyAttachments { .. } => error_code::TOO_MANY_ATTACHMENTS,
            Self::EmptyAttachmentName | Self::AttachmentTypeNotAllowed { .. } => {
                error_code::ATTACHMENT_REJECTED
            }
            Self::SectionLocked { .. } => error_code::SECTION_LOCKED,
        }
    }
}
