//! Config loading, discovery, and validation.

use super::model::Config;
use crate::error::{ArchPromptError, Result};
use crate::prompt::Placeholder;
use std::path::Path;
use tracing::debug;

/// File name looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "archprompt.yaml";

/// Contents written by `archprompt init`.
pub const STARTER_CONFIG: &str = r#"# archprompt configuration
#
# Preset values for the prompt placeholders. Each can be overridden with a
# --params file or with --actual-state, --industry, --environment, --cloud.
parameters:
  # actual_state: "Monolithic Java application on a single VM"
  # industry: "Retail"
  environment: "Production"
  cloud: "AWS"

# Output format for `archprompt render`: text or json.
output_format: text
"#;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(ArchPromptError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ArchPromptError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!(path = %path.display(), "loading config");
        Self::from_yaml(&content)
    }

    /// Find and load `archprompt.yaml` in `dir`, if present.
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Option<Self>> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);
        if !path.is_file() {
            debug!(path = %path.display(), "no config file found");
            return Ok(None);
        }
        Self::load(&path).map(Some)
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the default config.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            ArchPromptError::UserError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            ArchPromptError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// Every key under `parameters` must name a placeholder.
    pub fn validate(&self) -> Result<()> {
        for key in self.parameters.keys() {
            if key.parse::<Placeholder>().is_err() {
                return Err(ArchPromptError::UserError(format!(
                    "config validation failed: unknown parameter '{}'. Expected one of: {}",
                    key,
                    Placeholder::names().join(", ")
                )));
            }
        }

        Ok(())
    }
}
