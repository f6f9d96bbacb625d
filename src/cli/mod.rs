//! CLI argument parsing for archprompt.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::exit_codes;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Archprompt: renders the cloud architecture modernization prompt.
///
/// The prompt asks a language model for Mermaid diagrams, a rationale,
/// a Terraform template and an architectural decision record, tailored to
/// the current application, industry, environment and cloud provider.
#[derive(Parser, Debug)]
#[command(name = "archprompt")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: ./archprompt.yaml if present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for archprompt.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the architecture prompt.
    ///
    /// Parameter sources, lowest to highest precedence: the config
    /// `parameters` map, a --params file, then individual flags.
    Render(RenderArgs),

    /// List the prompt placeholders and what they mean.
    Placeholders(PlaceholdersArgs),

    /// Print the raw template without substitution.
    Template,

    /// Write a starter config to --config, or ./archprompt.yaml.
    Init(InitArgs),
}

/// Arguments for the `render` command.
#[derive(Parser, Debug, Default)]
pub struct RenderArgs {
    /// Description of the current application architecture.
    #[arg(long)]
    pub actual_state: Option<String>,

    /// Industry/domain context.
    #[arg(long)]
    pub industry: Option<String>,

    /// Target deployment environment.
    #[arg(long)]
    pub environment: Option<String>,

    /// Target cloud provider name.
    #[arg(long)]
    pub cloud: Option<String>,

    /// YAML or JSON file with placeholder values (.json is read as JSON).
    #[arg(short, long)]
    pub params: Option<PathBuf>,

    /// Output format: text or json (default from config, else text).
    #[arg(short, long)]
    pub format: Option<String>,

    /// Write the output to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `placeholders` command.
#[derive(Parser, Debug)]
pub struct PlaceholdersArgs {
    /// Print as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `init` command.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Overwrite an existing archprompt.yaml.
    #[arg(long)]
    pub force: bool,
}

impl Cli {
    /// Parse command-line arguments.
    ///
    /// Errors include `--help` and `--version` requests; pass them to
    /// [`parse_error_exit_code`] after printing.
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Cli::try_parse()
    }
}

/// Exit code for a clap parse result that did not produce a `Cli`.
///
/// `--help` and `--version` print to stdout and succeed. Every other parse
/// failure is a user error, keeping the missing-parameter code distinct.
pub fn parse_error_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        exit_codes::USER_ERROR
    } else {
        exit_codes::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_template() {
        let cli = Cli::try_parse_from(["archprompt", "template"]).unwrap();
        assert!(matches!(cli.command, Command::Template));
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        assert!(cli.config.is_none());
    }

    #[test]
    fn parse_render_minimal() {
        let cli = Cli::try_parse_from(["archprompt", "render"]).unwrap();
        if let Command::Render(args) = cli.command {
            assert!(args.actual_state.is_none());
            assert!(args.cloud.is_none());
            assert!(args.params.is_none());
            assert!(args.format.is_none());
            assert!(args.output.is_none());
        } else {
            panic!("Expected Render command");
        }
    }

    #[test]
    fn parse_render_full() {
        let cli = Cli::try_parse_from([
            "archprompt",
            "render",
            "--actual-state",
            "monolith",
            "--industry",
            "retail",
            "--environment",
            "on-prem",
            "--cloud",
            "AWS",
            "--params",
            "params.yaml",
            "--format",
            "json",
            "--output",
            "prompt.md",
        ])
        .unwrap();

        if let Command::Render(args) = cli.command {
            assert_eq!(args.actual_state.as_deref(), Some("monolith"));
            assert_eq!(args.industry.as_deref(), Some("retail"));
            assert_eq!(args.environment.as_deref(), Some("on-prem"));
            assert_eq!(args.cloud.as_deref(), Some("AWS"));
            assert_eq!(args.params, Some(PathBuf::from("params.yaml")));
            assert_eq!(args.format.as_deref(), Some("json"));
            assert_eq!(args.output, Some(PathBuf::from("prompt.md")));
        } else {
            panic!("Expected Render command");
        }
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["archprompt", "placeholders", "--json", "-vv", "--config", "x.yaml"])
                .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("x.yaml")));
        if let Command::Placeholders(args) = cli.command {
            assert!(args.json);
        } else {
            panic!("Expected Placeholders command");
        }
    }

    #[test]
    fn parse_init_force() {
        let cli = Cli::try_parse_from(["archprompt", "init", "--force"]).unwrap();
        if let Command::Init(args) = cli.command {
            assert!(args.force);
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn unknown_command_fails() {
        assert!(Cli::try_parse_from(["archprompt", "deploy"]).is_err());
    }

    #[test]
    fn unknown_flag_exits_with_user_error() {
        let err = Cli::try_parse_from(["archprompt", "render", "--bogus"]).unwrap_err();
        assert_eq!(parse_error_exit_code(&err), exit_codes::USER_ERROR);
        assert_ne!(parse_error_exit_code(&err), exit_codes::MISSING_PARAMETER);
    }

    #[test]
    fn missing_subcommand_exits_with_user_error() {
        let err = Cli::try_parse_from(["archprompt"]).unwrap_err();
        assert_eq!(parse_error_exit_code(&err), exit_codes::USER_ERROR);
    }

    #[test]
    fn help_and_version_exit_successfully() {
        let err = Cli::try_parse_from(["archprompt", "--help"]).unwrap_err();
        assert_eq!(parse_error_exit_code(&err), exit_codes::SUCCESS);

        let err = Cli::try_parse_from(["archprompt", "--version"]).unwrap_err();
        assert_eq!(parse_error_exit_code(&err), exit_codes::SUCCESS);

        let err = Cli::try_parse_from(["archprompt", "render", "--help"]).unwrap_err();
        assert_eq!(parse_error_exit_code(&err), exit_codes::SUCCESS);
    }
}
