use super::error_code::{self, ScatErrorCode};

/// Cause catalog loading errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog parse failed: {reason}")]
    ParseFailed { reason: String },

    #[error("expected sections ci, cb, nac in order, found {found}")]
    SectionLayout { found: String },

    #[error("section {section} has no causes")]
    EmptySection { section: String },

    #[error("duplicate cause id: {id}")]
    DuplicateCause { id: String },
}

impl ScatErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        error_code::CATALOG_ERROR
    }
}
