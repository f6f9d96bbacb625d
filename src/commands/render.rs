//! Implementation of the `archprompt render` command.
//!
//! Collects placeholder values from the config, an optional parameter file
//! and individual flags, renders the architecture prompt, and writes it to
//! stdout or a file.

use crate::cli::RenderArgs;
use crate::config::{Config, OutputFormat};
use crate::error::{ArchPromptError, Result};
use crate::fs::atomic_write_file;
use crate::prompt::{self, ArchitectureParams, Placeholder, load_partial};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{info, warn};

/// JSON shape of `render --format json`.
#[derive(Debug, Serialize)]
struct RenderedPrompt<'a> {
    prompt: &'a str,
    parameters: ArchitectureParams,
}

/// Execute the `archprompt render` command.
pub fn cmd_render(args: RenderArgs, config: &Config) -> Result<()> {
    let output = render_output(&args, config)?;

    match &args.output {
        Some(path) => {
            atomic_write_file(path, &output)?;
            info!(path = %path.display(), bytes = output.len(), "wrote rendered prompt");
            eprintln!("Wrote prompt to {}", path.display());
        }
        None => print!("{}", output),
    }

    Ok(())
}

/// Render the prompt in the requested format without writing it anywhere.
fn render_output(args: &RenderArgs, config: &Config) -> Result<String> {
    let parameters = collect_parameters(args, config)?;
    let format = resolve_format(args.format.as_deref(), config)?;

    let prompt = prompt::render(&parameters)?;

    match format {
        OutputFormat::Text => Ok(prompt),
        OutputFormat::Json => {
            let rendered = RenderedPrompt {
                prompt: &prompt,
                parameters: ArchitectureParams::try_from(&parameters)?,
            };
            let mut json = serde_json::to_string_pretty(&rendered).map_err(|e| {
                ArchPromptError::UserError(format!("failed to serialize output: {}", e))
            })?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Merge parameter sources. Later sources override earlier ones:
/// config `parameters`, then the `--params` file, then individual flags.
fn collect_parameters(args: &RenderArgs, config: &Config) -> Result<HashMap<String, String>> {
    let mut parameters: HashMap<String, String> = config
        .parameters
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    if let Some(path) = &args.params {
        for (key, value) in load_partial(path)? {
            if key.parse::<Placeholder>().is_err() {
                warn!(
                    key = %key,
                    file = %path.display(),
                    "ignoring unknown parameter in parameters file"
                );
                continue;
            }
            parameters.insert(key, value);
        }
    }

    let flags = [
        (Placeholder::ActualState, &args.actual_state),
        (Placeholder::Industry, &args.industry),
        (Placeholder::Environment, &args.environment),
        (Placeholder::Cloud, &args.cloud),
    ];
    for (placeholder, value) in flags {
        if let Some(value) = value {
            parameters.insert(placeholder.as_str().to_string(), value.clone());
        }
    }

    Ok(parameters)
}

fn resolve_format(flag: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match flag {
        Some(s) => OutputFormat::from_str(s).ok_or_else(|| {
            ArchPromptError::UserError(format!(
                "invalid output format '{}'. Expected 'text' or 'json'.",
                s
            ))
        }),
        None => Ok(config.output_format),
    }
}
