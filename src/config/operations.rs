//! Settings loading and validation.

use super::model::{DEFAULT_SETTINGS_FILE, ProcessSettings, Settings};
use crate::error::{JobError, Result};
use std::path::Path;

impl Settings {
    /// Load settings from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - Successfully loaded and validated settings
    /// * `Err(JobError::ConfigError)` - Unreadable file, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            JobError::ConfigError(format!(
                "failed to read settings file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load `jobguard.yaml` from the current working directory.
    pub fn discover() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| {
            JobError::ConfigError(format!("failed to get current working directory: {}", e))
        })?;

        let path = cwd.join(DEFAULT_SETTINGS_FILE);
        if !path.is_file() {
            return Err(JobError::ConfigError(format!(
                "expected settings file at {}",
                path.display()
            )));
        }

        Self::load(path)
    }

    /// Parse settings from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty map
        let settings: Settings = if yaml.trim().is_empty() {
            Settings::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                JobError::ConfigError(format!("failed to parse settings YAML: {}", e))
            })?
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Serialize settings to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            JobError::ConfigError(format!("failed to serialize settings to YAML: {}", e))
        })
    }

    /// Validate settings.
    ///
    /// Validation rules:
    /// - the `process` section must be present
    /// - `lockpath` and `logpath` must be non-empty
    pub fn validate(&self) -> Result<()> {
        let process = self.process()?;

        if process.lockpath.as_os_str().is_empty() {
            return Err(JobError::ConfigError(
                "settings validation failed: process.lockpath must not be empty".to_string(),
            ));
        }

        if process.logpath.as_os_str().is_empty() {
            return Err(JobError::ConfigError(
                "settings validation failed: process.logpath must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// The `process` section, or a configuration error when it is missing.
    pub fn process(&self) -> Result<&ProcessSettings> {
        self.process
            .as_ref()
            .ok_or_else(|| JobError::ConfigError("no process settings found".to_string()))
    }
}
