//! Wizard configuration with layered resolution.

pub mod navigation_config;
pub mod observability_config;
pub mod persistence_config;
pub mod validation_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use navigation_config::NavigationConfig;
pub use observability_config::ObservabilityConfig;
pub use persistence_config::PersistenceConfig;
pub use validation_config::ValidationConfig;

use crate::constants::STORAGE_KEY_SEPARATOR;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SCAT_*`)
/// 2. TOML file passed to [`ScatConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatConfig {
    pub persistence: PersistenceConfig,
    pub validation: ValidationConfig,
    pub navigation: NavigationConfig,
    pub observability: ObservabilityConfig,
}

impl ScatConfig {
    /// Load defaults, overlay the TOML file if it exists, then env overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let prefix = &self.persistence.storage_key_prefix;
        if prefix.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "persistence.storage_key_prefix".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if prefix.contains(STORAGE_KEY_SEPARATOR) {
            return Err(ConfigError::ValidationFailed {
                field: "persistence.storage_key_prefix".to_string(),
                message: format!("must not contain '{STORAGE_KEY_SEPARATOR}'"),
            });
        }
        if self.persistence.autosave_interval_secs == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "persistence.autosave_interval_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.validation.max_observation_chars == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "validation.max_observation_chars".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.validation.max_attachments == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "validation.max_attachments".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Pattern: `SCAT_AUTOSAVE_INTERVAL_SECS`, `SCAT_LOG_LEVEL`, etc.
    /// Unparseable values are ignored.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("SCAT_STORAGE_KEY_PREFIX") {
            self.persistence.storage_key_prefix = val;
        }
        if let Ok(val) = std::env::var("SCAT_NAMESPACE_BY_USER") {
            if let Ok(v) = val.parse::<bool>() {
                self.persistence.namespace_by_user = v;
            }
        }
        if let Ok(val) = std::env::var("SCAT_IMPORT_LEGACY_KEY") {
            if let Ok(v) = val.parse::<bool>() {
                self.persistence.import_legacy_key = v;
            }
        }
        if let Ok(val) = std::env::var("SCAT_AUTOSAVE_INTERVAL_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                self.persistence.autosave_interval_secs = v;
            }
        }
        if let Ok(val) = std::env::var("SCAT_ENFORCE_LIMITS") {
            if let Ok(v) = val.parse::<bool>() {
                self.validation.enforce_limits = v;
            }
        }
        if let Ok(val) = std::env::var("SCAT_ENFORCE_SECTION_LOCKS") {
            if let Ok(v) = val.parse::<bool>() {
                self.navigation.enforce_section_locks = v;
            }
        }
        if let Ok(val) = std::env::var("SCAT_LOG_LEVEL") {
            self.observability.log_level = val;
        }
        if let Ok(val) = std::env::var("SCAT_JSON_LOGS") {
            if let Ok(v) = val.parse::<bool>() {
                self.observability.json_logs = v;
            }
        }
    }
}
