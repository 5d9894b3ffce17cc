//! Limit checks applied to validation patches before they are merged.

use scat_core::config::ValidationConfig;
use scat_core::errors::ValidationError;
use scat_core::{CauseValidation, ValidationPatch};

/// Check `patch` against the configured limits. `existing` is the record the
/// patch would merge onto, if any.
///
/// Attachment rules only judge what the patch adds: a list that shrinks or
/// keeps names already stored is accepted even if those names predate the
/// current limits.
pub fn check_patch(
    config: &ValidationConfig,
    cause_id: &str,
    existing: Option<&CauseValidation>,
    patch: &ValidationPatch,
) -> Result<(), ValidationError> {
    if !config.enforce_limits {
        return Ok(());
    }

    if let Some(observation) = &patch.observation {
        check_observation(config, cause_id, observation)?;
    }

    if let Some(attachments) = &patch.attachments {
        let current: &[String] = existing.map(|v| v.attachments.as_slice()).unwrap_or(&[]);
        if attachments.len() > current.len() && attachments.len() > config.max_attachments {
            return Err(ValidationError::TooManyAttachments {
                cause_id: cause_id.to_string(),
                max: config.max_attachments,
            });
        }
        for name in attachments.iter().filter(|n| !current.contains(n)) {
            check_attachment_name(config, name)?;
        }
    }

    Ok(())
}

pub fn check_observation(
    config: &ValidationConfig,
    cause_id: &str,
    observation: &str,
) -> Result<(), ValidationError> {
    let length = observation.chars().count();
    if length > config.max_observation_chars {
        return Err(ValidationError::ObservationTooLong {
            cause_id: cause_id.to_string(),
            length,
            max: config.max_observation_chars,
        });
    }
    Ok(())
}

/// Names must be non-blank and carry an allowed extension (case-insensitive).
pub fn check_attachment_name(config: &ValidationConfig, name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyAttachmentName);
    }
    let allowed = trimmed
        .rsplit_once('.')
        .map(|(stem, ext)| {
            !stem.is_empty()
                && config
                    .allowed_attachment_extensions
                    .iter()
                    .any(|a| a.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false);
    if !allowed {
        return Err(ValidationError::AttachmentTypeNotAllowed {
            name: name.to_string(),
        });
    }
    Ok(())
}
