//! Implementation of the `archprompt init` command.
//!
//! Writes a commented starter config to `--config <path>` when given,
//! otherwise to `archprompt.yaml` in the current directory.

use crate::cli::InitArgs;
use crate::config::{CONFIG_FILE_NAME, STARTER_CONFIG};
use crate::error::{ArchPromptError, Result};
use crate::fs::atomic_write_file;
use std::path::{Path, PathBuf};
use tracing::info;

/// Execute the `archprompt init` command.
pub fn cmd_init(args: InitArgs, config_path: Option<&Path>) -> Result<()> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => {
            let cwd = std::env::current_dir().map_err(|e| {
                ArchPromptError::UserError(format!("failed to read current directory: {}", e))
            })?;
            cwd.join(CONFIG_FILE_NAME)
        }
    };

    write_starter_config(&path, args.force)?;

    println!("Created {}", path.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit the 'parameters' map with your defaults");
    if config_path.is_some() {
        println!(
            "  2. archprompt --config {} render --actual-state \"...\" --industry \"...\"",
            path.display()
        );
    } else {
        println!("  2. archprompt render --actual-state \"...\" --industry \"...\"");
    }

    Ok(())
}

/// Write the starter config to `path`, creating parent directories.
fn write_starter_config(path: &Path, force: bool) -> Result<PathBuf> {
    if path.exists() && !force {
        return Err(ArchPromptError::UserError(format!(
            "'{}' already exists.\n\nUse `archprompt init --force` to overwrite it.",
            path.display()
        )));
    }

    atomic_write_file(path, STARTER_CONFIG)?;
    info!(path = %path.display(), force, "wrote starter config");

    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_loadable_config() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join(CONFIG_FILE_NAME);

        let path = write_starter_config(&target, false).unwrap();

        assert_eq!(path, target);
        let config = Config::discover(temp_dir.path()).unwrap().unwrap();
        assert_eq!(config.parameters["cloud"], "AWS");
    }

    #[test]
    fn test_init_writes_to_explicit_config_path() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("nested").join("custom.yaml");

        cmd_init(InitArgs { force: false }, Some(target.as_path())).unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), STARTER_CONFIG);
        assert!(!temp_dir.path().join(CONFIG_FILE_NAME).exists());
        let config = Config::load(&target).unwrap();
        assert_eq!(config.parameters["cloud"], "AWS");
    }

    #[test]
    fn test_init_explicit_path_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("custom.yaml");
        fs::write(&target, "output_format: json\n").unwrap();

        let err = cmd_init(InitArgs { force: false }, Some(target.as_path())).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(fs::read_to_string(&target).unwrap(), "output_format: json\n");
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "output_format: json\n").unwrap();

        let err = write_starter_config(&path, false).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "output_format: json\n");
    }

    #[test]
    fn test_init_force_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "output_format: json\n").unwrap();

        write_starter_config(&path, true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), STARTER_CONFIG);
    }
}
