//! Command implementations for archprompt.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod init;
mod placeholders;
mod render;
mod template;

use crate::cli::Command;
use crate::config::Config;
use crate::error::{ArchPromptError, Result};
use std::path::Path;
use tracing::debug;

/// Dispatch a command to its implementation.
///
/// Only `render` reads the config, so `init` still works when an existing
/// config is invalid.
pub fn dispatch(command: Command, config_path: Option<&Path>) -> Result<()> {
    match command {
        Command::Init(args) => init::cmd_init(args, config_path),
        Command::Render(args) => render::cmd_render(args, &resolve_config(config_path)?),
        Command::Placeholders(args) => placeholders::cmd_placeholders(args),
        Command::Template => template::cmd_template(),
    }
}

/// Load the explicit config file, or discover one in the working directory.
fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return Config::load(path);
    }

    let cwd = std::env::current_dir().map_err(|e| {
        ArchPromptError::UserError(format!("failed to read current directory: {}", e))
    })?;

    let config = Config::discover(&cwd)?.unwrap_or_default();
    debug!(?config, "resolved config");
    Ok(config)
}
