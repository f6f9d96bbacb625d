//! Archprompt: renders the cloud architecture modernization prompt.
//!
//! The crate holds one embedded prompt template with four placeholders
//! (`actual_state`, `industry`, `environment`, `cloud`) and renders it for a
//! downstream language-model call. Calling the model is left to the caller.
//!
//! # Example
//!
//! ```rust
//! use archprompt::prompt::{ArchitectureParams, render_params};
//!
//! let params = ArchitectureParams {
//!     actual_state: "monolith".to_string(),
//!     industry: "retail".to_string(),
//!     environment: "on-prem".to_string(),
//!     cloud: "AWS".to_string(),
//! };
//! let prompt = render_params(&params).unwrap();
//! assert!(prompt.contains("- **Current State of the Application:** monolith"));
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod logging;
pub mod prompt;

pub use error::{ArchPromptError, Result};
pub use prompt::{ArchitectureParams, Placeholder, Template, TemplateError, render, render_params};
