//! The cloud architecture modernization prompt.
//!
//! The template text is embedded at compile time and parsed once per
//! process. It asks the model for two Mermaid diagrams, a rationale, a
//! Terraform template, and an architectural decision record; those blocks
//! are literal text to the renderer.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::params::{ArchitectureParams, Placeholder};
use super::template::{Template, TemplateError};

const ARCHITECTURE_TEMPLATE: &str = include_str!("templates/architecture.md");

static PARSED: OnceLock<Result<Template, TemplateError>> = OnceLock::new();

/// The raw template text, before substitution.
pub fn template_source() -> &'static str {
    ARCHITECTURE_TEMPLATE
}

/// The parsed architecture template, shared process-wide.
///
/// Parsing happens on first call; later calls return the cached result,
/// including a cached syntax error.
pub fn architecture_template() -> Result<&'static Template, TemplateError> {
    PARSED
        .get_or_init(|| Template::parse(ARCHITECTURE_TEMPLATE, &Placeholder::names()))
        .as_ref()
        .map_err(Clone::clone)
}

/// Render the architecture prompt from an untyped parameter map.
///
/// The map must contain `actual_state`, `industry`, `environment` and
/// `cloud`. Other keys are ignored.
///
/// # Examples
///
/// ```
/// use archprompt::prompt::{render, vars};
///
/// let prompt = render(&vars([
///     ("actual_state", "monolith"),
///     ("industry", "retail"),
///     ("environment", "on-prem"),
///     ("cloud", "AWS"),
/// ]))
/// .unwrap();
/// assert!(prompt.contains("- **Target Cloud Provider:** AWS"));
/// ```
pub fn render(parameters: &HashMap<String, String>) -> Result<String, TemplateError> {
    architecture_template()?.render(parameters)
}

/// Render the architecture prompt from a typed parameter record.
pub fn render_params(params: &ArchitectureParams) -> Result<String, TemplateError> {
    render(&params.to_map())
}
