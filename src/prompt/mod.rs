//! Prompt rendering.
//!
//! This module provides:
//!
//! - **Template**: named-slot substitution engine
//! - **Params**: the placeholder set and typed parameter record
//! - **Architecture**: the embedded cloud architecture prompt
//!
//! # Template Syntax
//!
//! Templates use `{name}` placeholders:
//!
//! ```text
//! - **Current State of the Application:** {actual_state}
//! - **Target Cloud Provider:** {cloud}
//! ```
//!
//! Use `{{` to escape and render a literal `{`.

mod architecture;
mod params;
mod template;

pub use architecture::{architecture_template, render, render_params, template_source};
pub use params::{ArchitectureParams, Placeholder, load_partial};
pub use template::{Template, TemplateError, vars};
