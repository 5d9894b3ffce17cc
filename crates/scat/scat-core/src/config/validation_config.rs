use serde::{Deserialize, Serialize};

use crate::constants::{
    ALLOWED_ATTACHMENT_EXTENSIONS, MAX_ATTACHMENTS_PER_CAUSE, MAX_OBSERVATION_CHARS,
};

/// Limits applied to observation text and attachments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// When false, no limit below is checked. Default: true.
    pub enforce_limits: bool,
    /// Maximum observation length in characters. Default: 2000.
    pub max_observation_chars: usize,
    /// Maximum attachments per cause. Default: 10.
    pub max_attachments: usize,
    /// Accepted file extensions, lowercase without the dot.
    pub allowed_attachment_extensions: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enforce_limits: true,
            max_observation_chars: MAX_OBSERVATION_CHARS,
            max_attachments: MAX_ATTACHMENTS_PER_CAUSE,
            allowed_attachment_extensions: ALLOWED_ATTACHMENT_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
