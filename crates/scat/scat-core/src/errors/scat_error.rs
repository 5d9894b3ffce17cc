use super::error_code::ScatErrorCode;
use super::{CatalogError, ConfigError, SnapshotError, StorageError, ValidationError};

/// Top-level error aggregating every subsystem via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ScatError {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl ScatErrorCode for ScatError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Catalog(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::Snapshot(e) => e.error_code(),
            Self::Validation(e) => e.error_code(),
        }
    }
}

pub type ScatResult<T> = Result<T, ScatError>;
