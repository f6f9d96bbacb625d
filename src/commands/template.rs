//! Implementation of the `archprompt template` command.

use crate::error::Result;
use crate::prompt::{architecture_template, template_source};

/// Print the raw template text.
pub fn cmd_template() -> Result<()> {
    print!("{}", template_output()?);
    Ok(())
}

/// The raw template text.
///
/// The template is parsed first so a malformed template is reported with
/// its syntax error instead of being printed.
fn template_output() -> Result<String> {
    architecture_template()?;
    Ok(template_source().to_string())
}
