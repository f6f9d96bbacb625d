//! Placeholder names and the parameter record for the architecture prompt.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::template::TemplateError;
use crate::error::{ArchPromptError, Result};

/// The four slots of the architecture prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placeholder {
    /// Description of the current application architecture.
    ActualState,
    /// Industry or domain context.
    Industry,
    /// Target deployment environment.
    Environment,
    /// Target cloud provider name.
    Cloud,
}

impl Placeholder {
    /// All placeholders, in the order they are declared to the template.
    pub const ALL: [Placeholder; 4] = [
        Placeholder::ActualState,
        Placeholder::Industry,
        Placeholder::Environment,
        Placeholder::Cloud,
    ];

    /// The name as written between braces in the template.
    pub fn as_str(&self) -> &'static str {
        match self {
            Placeholder::ActualState => "actual_state",
            Placeholder::Industry => "industry",
            Placeholder::Environment => "environment",
            Placeholder::Cloud => "cloud",
        }
    }

    /// One-line meaning of the placeholder, for help output.
    pub fn description(&self) -> &'static str {
        match self {
            Placeholder::ActualState => "Description of the current application architecture",
            Placeholder::Industry => "Industry/domain context",
            Placeholder::Environment => "Target deployment environment",
            Placeholder::Cloud => "Target cloud provider name",
        }
    }

    /// Slot names for `Template::parse`.
    pub fn names() -> [&'static str; 4] {
        Self::ALL.map(|p| p.as_str())
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Placeholder {
    type Err = ArchPromptError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                ArchPromptError::UserError(format!(
                    "unknown placeholder '{}'. Expected one of: {}",
                    s,
                    Self::names().join(", ")
                ))
            })
    }
}

/// Values for every slot of the architecture prompt.
///
/// Deserializing requires all four fields; unknown fields are ignored so
/// parameter files can carry notes for other tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchitectureParams {
    /// Description of the current application architecture.
    pub actual_state: String,
    /// Industry or domain context.
    pub industry: String,
    /// Target deployment environment.
    pub environment: String,
    /// Target cloud provider name, free text.
    pub cloud: String,
}

impl ArchitectureParams {
    /// The value supplied for `placeholder`.
    pub fn get(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::ActualState => &self.actual_state,
            Placeholder::Industry => &self.industry,
            Placeholder::Environment => &self.environment,
            Placeholder::Cloud => &self.cloud,
        }
    }

    /// Convert to the untyped map accepted by `Template::render`.
    pub fn to_map(&self) -> HashMap<String, String> {
        Placeholder::ALL
            .into_iter()
            .map(|p| (p.as_str().to_string(), self.get(p).to_string()))
            .collect()
    }

    /// Parse from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| {
            ArchPromptError::UserError(format!("failed to parse parameters YAML: {}", e))
        })
    }

    /// Parse from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            ArchPromptError::UserError(format!("failed to parse parameters JSON: {}", e))
        })
    }

    /// Load from a parameter file. `.json` files are read as JSON, anything
    /// else as YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = read_params_file(path)?;

        if is_json(path) {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }
}

impl TryFrom<&HashMap<String, String>> for ArchitectureParams {
    type Error = TemplateError;

    fn try_from(map: &HashMap<String, String>) -> std::result::Result<Self, TemplateError> {
        let take = |p: Placeholder| {
            map.get(p.as_str())
                .cloned()
                .ok_or_else(|| TemplateError::MissingParameter {
                    name: p.as_str().to_string(),
                })
        };

        Ok(Self {
            actual_state: take(Placeholder::ActualState)?,
            industry: take(Placeholder::Industry)?,
            environment: take(Placeholder::Environment)?,
            cloud: take(Placeholder::Cloud)?,
        })
    }
}

/// Load a parameter file as an untyped map, allowing any subset of keys.
///
/// Used when the file is one layer among several sources; completeness is
/// checked later by the renderer.
pub fn load_partial<P: AsRef<Path>>(path: P) -> Result<HashMap<String, String>> {
    let path = path.as_ref();
    let content = read_params_file(path)?;

    let map: HashMap<String, String> = if is_json(path) {
        serde_json::from_str(&content).map_err(|e| {
            ArchPromptError::UserError(format!(
                "failed to parse parameters JSON '{}': {}",
                path.display(),
                e
            ))
        })?
    } else if content.trim().is_empty() {
        HashMap::new()
    } else {
        serde_yaml::from_str(&content).map_err(|e| {
            ArchPromptError::UserError(format!(
                "failed to parse parameters YAML '{}': {}",
                path.display(),
                e
            ))
        })?
    };

    Ok(map)
}

fn read_params_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        ArchPromptError::UserError(format!(
            "failed to read parameters file '{}': {}",
            path.display(),
            e
        ))
    })
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
