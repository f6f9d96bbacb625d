//! Implementation of the `archprompt placeholders` command.

use crate::cli::PlaceholdersArgs;
use crate::error::{ArchPromptError, Result};
use crate::prompt::{Placeholder, architecture_template};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct PlaceholderInfo {
    name: &'static str,
    flag: String,
    description: &'static str,
    occurrences: usize,
}

/// Execute the `archprompt placeholders` command.
pub fn cmd_placeholders(args: PlaceholdersArgs) -> Result<()> {
    println!("{}", placeholders_output(args.json)?);
    Ok(())
}

/// Placeholder listing as pretty JSON or as an aligned table.
fn placeholders_output(json: bool) -> Result<String> {
    let infos = placeholder_infos()?;

    if json {
        return serde_json::to_string_pretty(&infos).map_err(|e| {
            ArchPromptError::UserError(format!("failed to serialize placeholders: {}", e))
        });
    }

    let mut lines = vec![format!(
        "{:<14} {:<16} {:>4}  DESCRIPTION",
        "NAME", "FLAG", "USES"
    )];
    for info in &infos {
        lines.push(format!(
            "{:<14} {:<16} {:>4}  {}",
            info.name, info.flag, info.occurrences, info.description
        ));
    }

    Ok(lines.join("\n"))
}

fn placeholder_infos() -> Result<Vec<PlaceholderInfo>> {
    let template = architecture_template()?;

    Ok(Placeholder::ALL
        .into_iter()
        .map(|p| PlaceholderInfo {
            name: p.as_str(),
            flag: format!("--{}", p.as_str().replace('_', "-")),
            description: p.description(),
            occurrences: template.occurrences(p.as_str()),
        })
        .collect())
}
