//! Error types for the archprompt CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::prompt::TemplateError;
use thiserror::Error;

/// Main error type for archprompt operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum ArchPromptError {
    /// User provided invalid arguments, unreadable input, or invalid config.
    #[error("{0}")]
    UserError(String),

    /// A placeholder had no value from any parameter source.
    #[error(
        "missing required parameter '{0}'. Supply it with --{flag}, a --params file, or the config 'parameters' map",
        flag = .0.replace('_', "-")
    )]
    MissingParameter(String),

    /// The template failed to parse.
    #[error("template syntax error: {0}")]
    TemplateSyntax(TemplateError),
}

impl ArchPromptError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ArchPromptError::UserError(_) => exit_codes::USER_ERROR,
            ArchPromptError::MissingParameter(_) => exit_codes::MISSING_PARAMETER,
            ArchPromptError::TemplateSyntax(_) => exit_codes::TEMPLATE_SYNTAX,
        }
    }
}

impl From<TemplateError> for ArchPromptError {
    fn from(err: TemplateError) -> Self {
        match err {
            TemplateError::MissingParameter { name } => ArchPromptError::MissingParameter(name),
            other => ArchPromptError::TemplateSyntax(other),
        }
    }
}

/// Result type alias for archprompt operations.
pub type Result<T> = std::result::Result<T, ArchPromptError>;
