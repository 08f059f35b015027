//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::capture::CaptureOptions;
use crate::error::{PromptError, Result};
use crate::resolve::ResolveOptions;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "PROMPTREF_CONFIG";

/// Config file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "promptref.yaml";

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the config file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PromptError::UserError)` - Parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PromptError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            PromptError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Locate and load the active config.
    ///
    /// Lookup order:
    /// 1. `explicit` (from `--config`); must exist
    /// 2. `$PROMPTREF_CONFIG`; must exist
    /// 3. `./promptref.yaml` if present
    /// 4. Defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
            return Self::load(PathBuf::from(path));
        }

        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Self::load(local);
        }

        tracing::debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `multi_select_separator` must be non-empty
    /// - `max_candidates`, if set, must be positive
    /// - `events_log`, if set, must be non-blank
    pub fn validate(&self) -> Result<()> {
        if self.multi_select_separator.is_empty() {
            return Err(PromptError::UserError(
                "config validation failed: multi_select_separator must be non-empty".to_string(),
            ));
        }

        if self.max_candidates == Some(0) {
            return Err(PromptError::UserError(
                "config validation failed: max_candidates must be greater than 0 (omit it for no limit)"
                    .to_string(),
            ));
        }

        if let Some(path) = &self.events_log
            && path.trim().is_empty()
        {
            return Err(PromptError::UserError(
                "config validation failed: events_log must be a non-empty path".to_string(),
            ));
        }

        Ok(())
    }

    /// Options for the resolution engine.
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            multi_select_separator: self.multi_select_separator.clone(),
        }
    }

    /// Options for editing sessions.
    pub fn capture_options(&self) -> CaptureOptions {
        CaptureOptions {
            insert_trailing_space: self.insert_trailing_space,
            max_candidates: self.max_candidates,
        }
    }
}
