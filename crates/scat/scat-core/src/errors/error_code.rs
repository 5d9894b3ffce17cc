//! Stable error codes a host UI maps to user-facing messages.

pub const CATALOG_ERROR: &str = "CATALOG_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const SNAPSHOT_ERROR: &str = "SNAPSHOT_ERROR";
pub const UNKNOWN_CAUSE: &str = "UNKNOWN_CAUSE";
pub const OBSERVATION_TOO_LONG: &str = "OBSERVATION_TOO_LONG";
pub const TOO_MANY_ATTACHMENTS: &str = "TOO_MANY_ATTACHMENTS";
pub const ATTACHMENT_REJECTED: &str = "ATTACHMENT_REJECTED";
pub const SECTION_LOCKED: &str = "SECTION_LOCKED";

/// Every error in the workspace exposes a stable code.
pub trait ScatErrorCode {
    fn error_code(&self) -> &'static str;
}
