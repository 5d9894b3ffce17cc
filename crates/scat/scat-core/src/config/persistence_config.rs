use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_AUTOSAVE_INTERVAL_SECS, DEFAULT_STORAGE_KEY_PREFIX, STORAGE_KEY_SEPARATOR,
};

/// Where and how often progress snapshots are written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistenceConfig {
    /// Storage key (or key prefix when namespaced). Default: "scat-form-progress".
    pub storage_key_prefix: String,
    /// Append `:<user_id>` to the key. Default: true.
    pub namespace_by_user: bool,
    /// Seconds between auto-saves. Default: 30.
    pub autosave_interval_secs: u64,
    /// When namespaced and a user has no snapshot, adopt one stored under the
    /// bare prefix (the single-key browser format) and move it to the user's
    /// key. Default: true.
    pub import_legacy_key: bool,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            storage_key_prefix: DEFAULT_STORAGE_KEY_PREFIX.to_string(),
            namespace_by_user: true,
            autosave_interval_secs: DEFAULT_AUTOSAVE_INTERVAL_SECS,
            import_legacy_key: true,
        }
    }
}

impl PersistenceConfig {
    /// Storage key for a user's snapshot.
    pub fn storage_key(&self, user_id: &str) -> String {
        if self.namespace_by_user {
            format!("{}{}{}", self.storage_key_prefix, STORAGE_KEY_SEPARATOR, user_id)
        } else {
            self.storage_key_prefix.clone()
        }
    }

    /// Bare key to import from, if legacy import applies.
    pub fn legacy_key(&self) -> Option<&str> {
        (self.namespace_by_user && self.import_legacy_key).then_some(self.storage_key_prefix.as_str())
    }
}
