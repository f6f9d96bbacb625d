//! Config struct definition.

use super::types::OutputFormat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration for archprompt.
///
/// This struct represents the contents of `archprompt.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Preset placeholder values, keyed by placeholder name.
    ///
    /// These are the lowest-precedence parameter source; a `--params` file
    /// and individual flags override them.
    pub parameters: BTreeMap<String, String>,

    /// Output format for `render` when `--format` is not given.
    pub output_format: OutputFormat,
}
