/// SCAT core version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Storage key the browser front end has always written progress under.
/// Used as the key prefix when snapshots are namespaced per user.
pub const DEFAULT_STORAGE_KEY_PREFIX: &str = "scat-form-progress";

/// Separator between the key prefix and the user id.
pub const STORAGE_KEY_SEPARATOR: char = ':';

/// Schema version written into every new snapshot.
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 2;

/// Schema version assumed for snapshots that carry no version field
/// (blobs written by the original browser hook).
pub const LEGACY_SNAPSHOT_SCHEMA_VERSION: u32 = 1;

/// Default auto-save interval in seconds.
pub const DEFAULT_AUTOSAVE_INTERVAL_SECS: u64 = 30;

/// Maximum observation length, in characters.
pub const MAX_OBSERVATION_CHARS: usize = 2000;

/// Maximum number of attachments per cause.
pub const MAX_ATTACHMENTS_PER_CAUSE: usize = 10;

/// Attachment file extensions accepted by default (lowercase, no dot).
pub const ALLOWED_ATTACHMENT_EXTENSIONS: &[&str] =
    &["jpg", "jpeg", "png", "gif", "pdf", "doc", "docx"];

/// Number of incomplete-cause labels a warning banner shows.
pub const INCOMPLETE_BANNER_LIMIT: usize = 5;
