use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Reject mutations on causes of a locked section. Default: false
    /// (locking only drives the progress bar).
    pub enforce_section_locks: bool,
}
