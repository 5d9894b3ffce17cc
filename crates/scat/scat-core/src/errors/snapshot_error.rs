use super::error_code::{self, ScatErrorCode};

/// Errors decoding or encoding a persisted progress snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("malformed snapshot: {reason}")]
    Malformed { reason: String },

    #[error("snapshot schema version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("snapshot serialization failed: {reason}")]
    SerializationFailed { reason: String },
}

impl ScatErrorCode for SnapshotError {
    fn error_code(&self) -> &'static str {
        error_code::SNAPSHOT_ERROR
    }
}
